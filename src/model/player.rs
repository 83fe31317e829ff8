//! Players and the positional categories they belong to.

use serde::{Deserialize, Serialize};

/// A rostered player.
///
/// `id` identifies the player; no two players in a roster share one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player id.
    pub id: u32,
    /// Skill rating. Higher is stronger.
    pub strength: f64,
}

impl Player {
    /// Create a new player.
    pub fn new(id: u32, strength: f64) -> Self {
        Self { id, strength }
    }
}

/// Positional group a player is balanced within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Goalkeepers.
    Goalies,
    /// Centers.
    Centers,
    /// Wingers.
    Wings,
    /// Forwards.
    Forwards,
}

impl Category {
    /// Outer-to-inner nesting order of the exhaustive search.
    ///
    /// Only affects which of several equally balanced splits is found first.
    pub const SEARCH_ORDER: [Category; 4] = [
        Category::Centers,
        Category::Goalies,
        Category::Wings,
        Category::Forwards,
    ];

    /// Lowercase name, as used in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Goalies => "goalies",
            Category::Centers => "centers",
            Category::Wings => "wings",
            Category::Forwards => "forwards",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
