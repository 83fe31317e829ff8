//! Teams, team pairs and how a pair is scored.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::player::{Category, Player};
use super::roster::Roster;

/// Largest headcount difference a pair may have before its wings are swapped.
pub const SIZE_TOLERANCE: usize = 1;

/// Mean strength of `players`.
///
/// An empty slice has no mean and yields `NaN`. Rosters that pass
/// [`Roster::validate`] never produce an empty half.
pub fn average_strength(players: &[Player]) -> f64 {
    let sum: f64 = players.iter().map(|p| p.strength).sum();
    sum / players.len() as f64
}

/// One side of a split: a subset of every category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Goalies assigned to this team.
    pub goalies: Vec<Player>,
    /// Centers assigned to this team.
    pub centers: Vec<Player>,
    /// Wings assigned to this team.
    pub wings: Vec<Player>,
    /// Forwards assigned to this team.
    pub forwards: Vec<Player>,
}

impl Team {
    /// Players this team holds in `category`.
    pub fn players(&self, category: Category) -> &[Player] {
        match category {
            Category::Goalies => &self.goalies,
            Category::Centers => &self.centers,
            Category::Wings => &self.wings,
            Category::Forwards => &self.forwards,
        }
    }

    /// Mutable access to the players in `category`.
    pub fn players_mut(&mut self, category: Category) -> &mut Vec<Player> {
        match category {
            Category::Goalies => &mut self.goalies,
            Category::Centers => &mut self.centers,
            Category::Wings => &mut self.wings,
            Category::Forwards => &mut self.forwards,
        }
    }

    /// Total headcount across all categories.
    pub fn size(&self) -> usize {
        self.goalies.len() + self.centers.len() + self.wings.len() + self.forwards.len()
    }

    /// Sum of the per-category average strengths.
    ///
    /// Every category weighs the same regardless of how many players it has.
    pub fn strength(&self) -> f64 {
        average_strength(&self.centers)
            + average_strength(&self.goalies)
            + average_strength(&self.wings)
            + average_strength(&self.forwards)
    }

    /// Iterate over every player on the team.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.goalies
            .iter()
            .chain(self.centers.iter())
            .chain(self.wings.iter())
            .chain(self.forwards.iter())
    }
}

/// Two teams that together cover a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPair {
    /// First team, built from the selected half of every category.
    pub team_a: Team,
    /// Second team, built from the complements.
    pub team_b: Team,
}

impl TeamPair {
    /// Pair two teams.
    pub fn new(team_a: Team, team_b: Team) -> Self {
        Self { team_a, team_b }
    }

    /// Absolute headcount difference between the two teams.
    pub fn size_difference(&self) -> usize {
        self.team_a.size().abs_diff(self.team_b.size())
    }

    /// Balance score: absolute difference of the teams' strengths. Lower is better.
    pub fn score(&self) -> f64 {
        (self.team_a.strength() - self.team_b.strength()).abs()
    }

    /// Swap the wings between the teams if their sizes differ by more than
    /// [`SIZE_TOLERANCE`].
    ///
    /// The swap happens whenever the threshold is exceeded, even if it does
    /// not shrink the gap. Returns whether a swap was made.
    pub fn balance_sizes(&mut self) -> bool {
        if self.size_difference() <= SIZE_TOLERANCE {
            return false;
        }
        std::mem::swap(&mut self.team_a.wings, &mut self.team_b.wings);
        true
    }

    /// Whether every player of `roster` appears exactly once across both teams,
    /// and nowhere else.
    ///
    /// Category slots are not compared, so this also holds after a wing swap.
    pub fn covers(&self, roster: &Roster) -> bool {
        let mut seen: FxHashSet<u32> = FxHashSet::default();
        for player in self.team_a.iter().chain(self.team_b.iter()) {
            if !seen.insert(player.id) {
                return false;
            }
        }

        seen.len() == roster.len() && roster.iter().all(|p| seen.contains(&p.id))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save the pair to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(specs: &[(u32, f64)]) -> Vec<Player> {
        specs.iter().map(|&(id, s)| Player::new(id, s)).collect()
    }

    fn sample_pair() -> TeamPair {
        let team_a = Team {
            goalies: players(&[(1, 4.0)]),
            centers: players(&[(2, 6.0)]),
            wings: players(&[(3, 2.0), (4, 8.0)]),
            forwards: players(&[(5, 3.0)]),
        };
        let team_b = Team {
            goalies: players(&[(6, 2.0)]),
            centers: players(&[(7, 6.0)]),
            wings: players(&[(8, 5.0)]),
            forwards: players(&[(9, 1.0), (10, 3.0)]),
        };
        TeamPair::new(team_a, team_b)
    }

    #[test]
    fn test_average_strength() {
        assert_eq!(average_strength(&players(&[(1, 1.0), (2, 9.0)])), 5.0);
        assert!(average_strength(&[]).is_nan());
    }

    #[test]
    fn test_team_strength_sums_category_averages() {
        let pair = sample_pair();
        // 6 + 4 + 5 + 3
        assert_eq!(pair.team_a.strength(), 18.0);
        // 6 + 2 + 5 + 2
        assert_eq!(pair.team_b.strength(), 15.0);
        assert_eq!(pair.score(), 3.0);
    }

    #[test]
    fn test_size_difference() {
        let pair = sample_pair();
        assert_eq!(pair.team_a.size(), 5);
        assert_eq!(pair.team_b.size(), 5);
        assert_eq!(pair.size_difference(), 0);
    }

    #[test]
    fn test_balance_sizes_within_tolerance_is_noop() {
        let mut pair = sample_pair();
        pair.team_b.goalies.clear();
        assert_eq!(pair.size_difference(), 1);

        let before = pair.clone();
        assert!(!pair.balance_sizes());
        assert_eq!(pair, before);
    }

    #[test]
    fn test_balance_sizes_swaps_wings_only() {
        let mut pair = sample_pair();
        pair.team_b.goalies.clear();
        pair.team_b.centers.clear();
        assert_eq!(pair.size_difference(), 2);

        let before = pair.clone();
        assert!(pair.balance_sizes());
        assert_eq!(pair.team_a.wings, before.team_b.wings);
        assert_eq!(pair.team_b.wings, before.team_a.wings);
        assert_eq!(pair.team_a.goalies, before.team_a.goalies);
        assert_eq!(pair.team_a.centers, before.team_a.centers);
        assert_eq!(pair.team_a.forwards, before.team_a.forwards);
        assert_eq!(pair.team_b.forwards, before.team_b.forwards);
    }

    #[test]
    fn test_balance_sizes_swaps_even_when_gap_grows() {
        let mut pair = sample_pair();
        // A: 1 + 1 + 2 + 1 = 5, B: 0 + 0 + 1 + 2 = 3
        pair.team_b.goalies.clear();
        pair.team_b.centers.clear();
        assert!(pair.balance_sizes());
        // A: 1 + 1 + 1 + 1 = 4, B: 0 + 0 + 2 + 2 = 4
        assert_eq!(pair.size_difference(), 0);

        let mut pair = sample_pair();
        pair.team_a.goalies.clear();
        pair.team_a.centers.clear();
        // A: 0 + 0 + 2 + 1 = 3, B: 1 + 1 + 1 + 2 = 5
        assert!(pair.balance_sizes());
        // A: 0 + 0 + 1 + 1 = 2, B: 1 + 1 + 2 + 2 = 6
        assert_eq!(pair.size_difference(), 4);
    }

    #[test]
    fn test_players_by_category() {
        let mut pair = sample_pair();
        assert_eq!(pair.team_a.players(Category::Wings).len(), 2);
        pair.team_a.players_mut(Category::Forwards).push(Player::new(11, 1.0));
        assert_eq!(pair.team_a.forwards.len(), 2);
        assert_eq!(pair.team_a.iter().count(), 6);
    }

    #[test]
    fn test_json_shape() {
        let pair = sample_pair();
        let value: serde_json::Value = serde_json::from_str(&pair.to_json().unwrap()).unwrap();

        assert_eq!(value["team_a"]["goalies"][0]["id"], 1);
        assert_eq!(value["team_a"]["goalies"][0]["strength"], 4.0);
        assert_eq!(value["team_b"]["forwards"].as_array().unwrap().len(), 2);
        for key in ["goalies", "centers", "wings", "forwards"] {
            assert!(value["team_b"].get(key).is_some(), "missing {}", key);
        }
    }
}
