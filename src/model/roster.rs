//! The roster to be split and the checks it must pass first.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::player::{Category, Player};

/// Fewest players a category may have.
///
/// With fewer than two, one of the teams would get none of the category and
/// its average strength would be undefined.
pub const MIN_CATEGORY_SIZE: usize = 2;

/// Every player available for the split, grouped by category.
///
/// The order within a category only fixes the index each player is chosen by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Goalies.
    pub goalies: Vec<Player>,
    /// Centers.
    pub centers: Vec<Player>,
    /// Wings.
    pub wings: Vec<Player>,
    /// Forwards.
    pub forwards: Vec<Player>,
}

impl Roster {
    /// Build a roster from its four categories.
    pub fn new(
        goalies: Vec<Player>,
        centers: Vec<Player>,
        wings: Vec<Player>,
        forwards: Vec<Player>,
    ) -> Self {
        Self {
            goalies,
            centers,
            wings,
            forwards,
        }
    }

    /// Players in `category`.
    pub fn category(&self, category: Category) -> &[Player] {
        match category {
            Category::Goalies => &self.goalies,
            Category::Centers => &self.centers,
            Category::Wings => &self.wings,
            Category::Forwards => &self.forwards,
        }
    }

    /// Total number of players.
    pub fn len(&self) -> usize {
        self.goalies.len() + self.centers.len() + self.wings.len() + self.forwards.len()
    }

    /// Whether the roster has no players at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every player.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.goalies
            .iter()
            .chain(self.centers.iter())
            .chain(self.wings.iter())
            .chain(self.forwards.iter())
    }

    /// Check the roster can be balanced.
    ///
    /// Every category needs at least [`MIN_CATEGORY_SIZE`] players, ids must be
    /// unique across the whole roster, and strengths must be finite.
    pub fn validate(&self) -> Result<(), RosterError> {
        for category in Category::SEARCH_ORDER {
            let size = self.category(category).len();
            if size < MIN_CATEGORY_SIZE {
                return Err(RosterError::CategoryTooSmall { category, size });
            }
        }

        let mut ids: FxHashSet<u32> = FxHashSet::with_capacity_and_hasher(self.len(), Default::default());
        for player in self.iter() {
            if !player.strength.is_finite() {
                return Err(RosterError::InvalidStrength {
                    id: player.id,
                    strength: player.strength,
                });
            }
            if !ids.insert(player.id) {
                return Err(RosterError::DuplicateId(player.id));
            }
        }

        Ok(())
    }

    /// Load and validate a roster from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| RosterError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a roster from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let roster: Self =
            serde_json::from_str(json).map_err(|e| RosterError::ParseError(e.to_string()))?;
        roster.validate()?;
        Ok(roster)
    }
}

/// Reasons a roster cannot be balanced or loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Reading the roster file failed.
    IoError(String),
    /// The roster file is not valid roster JSON.
    ParseError(String),
    /// A category has fewer than [`MIN_CATEGORY_SIZE`] players.
    CategoryTooSmall {
        /// The offending category.
        category: Category,
        /// How many players it has.
        size: usize,
    },
    /// Two players share an id.
    DuplicateId(u32),
    /// A player's strength is `NaN` or infinite.
    InvalidStrength {
        /// The player's id.
        id: u32,
        /// The rejected strength.
        strength: f64,
    },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::CategoryTooSmall { category, size } => write!(
                f,
                "Category '{}' has {} player(s), at least {} required",
                category, size, MIN_CATEGORY_SIZE
            ),
            Self::DuplicateId(id) => write!(f, "Player id {} appears more than once", id),
            Self::InvalidStrength { id, strength } => {
                write!(f, "Player {} has non-finite strength {}", id, strength)
            }
        }
    }
}

impl std::error::Error for RosterError {}
