//! Entity definitions for the bubble: systems, presences, states.

mod expansion;
mod presence;
mod state;
mod system;

pub use expansion::*;
pub use presence::*;
pub use state::*;
pub use system::*;
