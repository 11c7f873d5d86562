//! # Bubble Model
//!
//! The spatial/political snapshot the mission engine reasons about: systems,
//! the factions present in them, their states, and the queries over the
//! collection ("the bubble").
//! This crate holds data and geometry only; it contains no advice logic.

pub mod bubble;
pub mod conflicts;
pub mod entities;

pub use bubble::*;
pub use conflicts::*;
pub use entities::*;
