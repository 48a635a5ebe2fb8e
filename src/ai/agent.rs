use crate::game::{Action, GameState};

/// Universal interface for anything that can choose moves.
pub trait Agent {
    /// Select an action for the player to move in `state`. The action must be
    /// one of `state.legal_actions()`.
    fn select_action(&mut self, state: &GameState) -> Action;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
