//! Interactive assistant layer.
//!
//! Maps typed commands onto address book operations and turns every
//! operation error into a reply, so a bad command never ends the session.

pub mod command;
pub mod session;

pub use command::{split_line, Command};
pub use session::{Assistant, Outcome, UNKNOWN_COMMAND};
