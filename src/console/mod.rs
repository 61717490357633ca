//! Interactive terminal front end for the store.

mod terminal;
pub mod menu;
pub mod session;

pub use terminal::*;
pub use session::{run, SessionOutcome};
