//! Random roster generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::player::{Category, Player};
use super::roster::Roster;

/// Builds rosters with random integer strengths.
///
/// Ids are handed out from 1 upward, centers first, then goalies, wings and
/// forwards.
///
/// # Example
/// ```
/// use team_balancer::model::RosterGenerator;
///
/// let roster = RosterGenerator::new().with_seed(7).generate();
/// assert_eq!(roster.len(), 18);
/// assert!(roster.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RosterGenerator {
    goalies: usize,
    centers: usize,
    wings: usize,
    forwards: usize,
    min_strength: u32,
    max_strength: u32,
    seed: Option<u64>,
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self {
            goalies: 2,
            centers: 2,
            wings: 7,
            forwards: 7,
            min_strength: 1,
            max_strength: 10,
            seed: None,
        }
    }
}

impl RosterGenerator {
    /// Two goalies, two centers, seven wings and seven forwards, strengths 1 to 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set how many players `category` gets.
    pub fn with_size(mut self, category: Category, size: usize) -> Self {
        match category {
            Category::Goalies => self.goalies = size,
            Category::Centers => self.centers = size,
            Category::Wings => self.wings = size,
            Category::Forwards => self.forwards = size,
        }
        self
    }

    /// Builder method: set the inclusive strength range.
    ///
    /// The bounds are swapped if given in the wrong order.
    pub fn with_strength_range(mut self, min: u32, max: u32) -> Self {
        self.min_strength = min.min(max);
        self.max_strength = min.max(max);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate a roster.
    pub fn generate(&self) -> Roster {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut next_id = 1u32;
        let mut roster = Roster::default();
        for category in Category::SEARCH_ORDER {
            let size = match category {
                Category::Goalies => self.goalies,
                Category::Centers => self.centers,
                Category::Wings => self.wings,
                Category::Forwards => self.forwards,
            };

            let players: Vec<Player> = (0..size)
                .map(|_| {
                    let strength = rng.gen_range(self.min_strength..=self.max_strength);
                    let player = Player::new(next_id, f64::from(strength));
                    next_id += 1;
                    player
                })
                .collect();

            match category {
                Category::Goalies => roster.goalies = players,
                Category::Centers => roster.centers = players,
                Category::Wings => roster.wings = players,
                Category::Forwards => roster.forwards = players,
            }
        }

        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let roster = RosterGenerator::new().with_seed(1).generate();
        assert_eq!(roster.centers.len(), 2);
        assert_eq!(roster.goalies.len(), 2);
        assert_eq!(roster.wings.len(), 7);
        assert_eq!(roster.forwards.len(), 7);
        assert!(roster.validate().is_ok());
    }

    #[test]
    fn test_ids_are_sequential() {
        let roster = RosterGenerator::new().with_seed(1).generate();
        assert_eq!(roster.centers[0].id, 1);
        assert_eq!(roster.goalies[0].id, 3);
        assert_eq!(roster.wings[0].id, 5);
        assert_eq!(roster.forwards[6].id, 18);
    }

    #[test]
    fn test_strengths_in_range() {
        let roster = RosterGenerator::new()
            .with_strength_range(8, 3)
            .with_seed(99)
            .generate();
        for player in roster.iter() {
            assert!(player.strength >= 3.0 && player.strength <= 8.0);
            assert_eq!(player.strength.fract(), 0.0);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let generator = RosterGenerator::new()
            .with_size(Category::Wings, 4)
            .with_seed(42);
        assert_eq!(generator.generate(), generator.generate());
        assert_eq!(generator.generate().wings.len(), 4);
    }
}
