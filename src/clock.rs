//! Wall-clock access.
//!
//! The dispatcher reads the time through [`Clock`] so tests can pin "now".

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 15)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
    }

    #[test]
    fn test_system_clock_today_matches_local_date() {
        let today = SystemClock.today();
        let local = Local::now().date_naive();
        // Tolerate a midnight rollover between the two reads.
        assert!((local - today).num_days().abs() <= 1);
    }
}
