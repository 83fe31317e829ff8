//! Data model shared by the search and its callers.
//!
//! - [`Player`] and [`Category`]: who is being split, and into which slot
//! - [`Roster`]: the full input, one player list per category
//! - [`Team`] and [`TeamPair`]: candidate splits and the final answer
//! - [`RosterGenerator`]: random rosters for demos and benchmarks

pub mod generator;
pub mod player;
pub mod roster;
pub mod team;

pub use generator::RosterGenerator;
pub use player::{Category, Player};
pub use roster::{Roster, RosterError, MIN_CATEGORY_SIZE};
pub use team::{average_strength, Team, TeamPair, SIZE_TOLERANCE};
