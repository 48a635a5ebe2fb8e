mod agent;
pub mod evaluator;
pub mod minimax;
mod random;
pub mod state_encoding;

pub use agent::Agent;
pub use evaluator::{CornerWeighted, DiscRatio, Evaluator, EvaluatorKind, Phased};
pub use minimax::{MinimaxAgent, MinimaxSearch, SearchConfig, SearchResult};
pub use random::RandomAgent;
