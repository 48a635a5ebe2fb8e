use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::{Action, GameState};

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and seeded self-play.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Action {
        // `legal_actions` is never empty: it holds `Pass` when nothing else fits
        state
            .legal_actions()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Pass)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
