//! Combinatorial building blocks for the exhaustive team search.
//!
//! The balancer never materializes the full search space. Instead it asks
//! this module, once per category, for every way to pick `k` of `n` players
//! and walks those choices lazily.
//!
//! - [`Combinations`]: lexicographic `k`-subsets of `0..n`
//! - [`binomial`]: how many subsets an enumeration will produce
//! - [`split_by_combination`]: selected entries vs. their complement

pub mod combinations;
pub mod split;

pub use combinations::{binomial, CombinationError, Combinations};
pub use split::split_by_combination;
