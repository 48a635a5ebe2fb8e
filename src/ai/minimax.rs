use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use super::evaluator::{Evaluator, EvaluatorKind};
use crate::game::{Action, Board, GameState, Player};

/// Search settings, loadable from the `[search]` table of the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead; must be at least 1
    pub depth: usize,
    pub evaluator: EvaluatorKind,
    /// Disc count at which the hybrid evaluator switches to its endgame half
    pub hybrid_threshold: usize,
    /// Probability of playing a random legal move instead of searching
    pub epsilon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            evaluator: EvaluatorKind::CornerWeighted,
            hybrid_threshold: 40,
            epsilon: 0.0,
            seed: None,
        }
    }
}

/// Chosen action (if any) and its backed-up value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub action: Option<Action>,
    pub value: f64,
}

impl SearchResult {
    fn leaf(value: f64) -> Self {
        SearchResult {
            action: None,
            value,
        }
    }
}

/// Depth-bounded two-ply minimax with fail-low cutoffs.
///
/// Each level expands the mover's actions and then every opponent reply,
/// recursing two plies deeper with the same searching player. When every
/// line is a proven loss the search picks a uniformly random legal action.
pub struct MinimaxSearch {
    evaluator: Box<dyn Evaluator>,
    rng: StdRng,
    nodes: u64,
}

impl MinimaxSearch {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        MinimaxSearch {
            evaluator,
            rng: StdRng::from_os_rng(),
            nodes: 0,
        }
    }

    pub fn with_seed(evaluator: Box<dyn Evaluator>, seed: u64) -> Self {
        MinimaxSearch {
            evaluator,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Action maximizing `player`'s minimum guaranteed value within `depth` plies.
    pub fn best_action(&mut self, board: &Board, player: Player, depth: usize) -> SearchResult {
        self.nodes = 0;
        let result = self.max_in_mins(board, player, depth);
        debug!(
            "best_action for {} at depth {depth}: {:?} value {} ({} nodes)",
            player.name(),
            result.action,
            result.value,
            self.nodes
        );
        result
    }

    /// Mirror of [`best_action`](Self::best_action): the mover minimizes
    /// values scored from its opponent's point of view.
    pub fn worst_action(&mut self, board: &Board, player: Player, depth: usize) -> SearchResult {
        self.nodes = 0;
        let result = self.min_in_maxs(board, player, depth);
        debug!(
            "worst_action for {} at depth {depth}: {:?} value {} ({} nodes)",
            player.name(),
            result.action,
            result.value,
            self.nodes
        );
        result
    }

    fn max_in_mins(&mut self, board: &Board, player: Player, depth: usize) -> SearchResult {
        self.nodes += 1;
        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(self.evaluator.evaluate(board, player));
        }

        let successors = board.successors(player);

        if depth == 1 {
            let mut best = SearchResult::leaf(f64::NEG_INFINITY);
            for (action, next) in &successors {
                let value = self.evaluator.evaluate(next, player);
                if best.action.is_none() || value > best.value {
                    best = SearchResult {
                        action: Some(*action),
                        value,
                    };
                }
            }
            return best;
        }

        let opponent = player.other();
        let mut max_score = f64::NEG_INFINITY;
        let mut max_action = None;

        for (action, next) in &successors {
            if next.is_terminal() {
                let value = self.evaluator.evaluate(next, player);
                if next.utility() == player.win_utility() {
                    return SearchResult {
                        action: Some(*action),
                        value,
                    };
                }
                if max_score < value {
                    max_score = value;
                    max_action = Some(*action);
                }
                continue;
            }

            let mut min_score = f64::INFINITY;
            for (_, reply) in next.successors(opponent) {
                min_score = min_score.min(self.max_in_mins(&reply, player, depth - 2).value);
                // this action can no longer beat the best one found
                if min_score < max_score {
                    break;
                }
            }
            if max_score < min_score {
                max_score = min_score;
                max_action = Some(*action);
            }
        }

        let action = max_action.unwrap_or_else(|| self.random_action(&successors));
        SearchResult {
            action: Some(action),
            value: max_score,
        }
    }

    fn min_in_maxs(&mut self, board: &Board, player: Player, depth: usize) -> SearchResult {
        self.nodes += 1;
        let perspective = player.other();
        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(self.evaluator.evaluate(board, perspective));
        }

        let successors = board.successors(player);

        if depth == 1 {
            let mut best = SearchResult::leaf(f64::INFINITY);
            for (action, next) in &successors {
                let value = self.evaluator.evaluate(next, perspective);
                if best.action.is_none() || value < best.value {
                    best = SearchResult {
                        action: Some(*action),
                        value,
                    };
                }
            }
            return best;
        }

        let opponent = player.other();
        let mut min_score = f64::INFINITY;
        let mut min_action = None;

        for (action, next) in &successors {
            if next.is_terminal() {
                let value = self.evaluator.evaluate(next, perspective);
                if next.utility() == player.win_utility() {
                    return SearchResult {
                        action: Some(*action),
                        value,
                    };
                }
                if value < min_score {
                    min_score = value;
                    min_action = Some(*action);
                }
                continue;
            }

            let mut max_score = f64::NEG_INFINITY;
            for (_, reply) in next.successors(opponent) {
                max_score = max_score.max(self.min_in_maxs(&reply, player, depth - 2).value);
                if min_score < max_score {
                    break;
                }
            }
            if max_score < min_score {
                min_score = max_score;
                min_action = Some(*action);
            }
        }

        let action = min_action.unwrap_or_else(|| self.random_action(&successors));
        SearchResult {
            action: Some(action),
            value: min_score,
        }
    }

    fn random_action(&mut self, successors: &[(Action, Board)]) -> Action {
        successors
            .choose(&mut self.rng)
            .map(|(action, _)| *action)
            .unwrap_or(Action::Pass)
    }
}

/// Agent that plays the [`MinimaxSearch`] choice, or with probability
/// `epsilon` a uniformly random legal move.
pub struct MinimaxAgent {
    search: MinimaxSearch,
    depth: usize,
    epsilon: f64,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(evaluator: Box<dyn Evaluator>, depth: usize) -> Self {
        MinimaxAgent {
            search: MinimaxSearch::new(evaluator),
            depth,
            epsilon: 0.0,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(evaluator: Box<dyn Evaluator>, depth: usize, seed: u64) -> Self {
        MinimaxAgent {
            search: MinimaxSearch::with_seed(evaluator, seed),
            depth,
            epsilon: 0.0,
            // distinct stream from the search's fallback RNG
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        let evaluator = config.evaluator.build(config.hybrid_threshold);
        let agent = match config.seed {
            Some(seed) => MinimaxAgent::with_seed(evaluator, config.depth, seed),
            None => MinimaxAgent::new(evaluator, config.depth),
        };
        agent.with_epsilon(config.epsilon)
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Action {
        let legal = state.legal_actions();
        if self.epsilon > 0.0 && self.rng.random::<f64>() < self.epsilon {
            if let Some(&action) = legal.choose(&mut self.rng) {
                return action;
            }
        }

        self.search
            .best_action(state.board(), state.current_player(), self.depth)
            .action
            .or_else(|| legal.first().copied())
            .unwrap_or(Action::Pass)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
