//! Roster session state: the loaded students, the current selection and the
//! derived score texts the view renders.

mod session;
mod student;

pub use session::{LoadTicket, RosterSession};
pub use student::{format_score, parse_score, Student};
