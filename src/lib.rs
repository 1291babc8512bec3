//! Student score roster: the session state model, its HTTP loader and
//! configuration. The Leptos view layer lives in the binary.

pub mod api;
pub mod config;
pub mod error;
pub mod roster;

pub use api::GradesClient;
pub use config::RosterConfig;
pub use error::RosterError;
pub use roster::{LoadTicket, RosterSession, Student};
