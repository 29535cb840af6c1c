//! The command layer: parsing input lines and dispatching them to the
//! address book.

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{CommandDispatcher, Outcome, FAREWELL, GREETING, HELP_TEXT, NO_CONTACTS};
pub use parser::Command;
