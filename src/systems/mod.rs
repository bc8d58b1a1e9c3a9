//! ECS systems for the territory simulation.
//!
//! A single system drives the bots:
//!
//! - `expansion_system` - advances each bot's countdown and, when an interval
//!   elapses, runs one expansion step against the shared grid. Bots are
//!   applied in ascending faction order within a tick, so concurrent claims
//!   behave as if serialized.

pub mod expansion;

pub use expansion::*;
