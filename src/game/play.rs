use log::{debug, info};

use super::record::MoveRecord;
use super::{Action, Board, GameOutcome, GameState, Player};
use crate::ai::Agent;
use crate::error::GameError;

/// Everything that happened in one finished game.
#[derive(Debug, Clone)]
pub struct GameSummary {
    /// Every action in order, passes included
    pub actions: Vec<Action>,
    pub final_board: Board,
    pub outcome: GameOutcome,
}

impl GameSummary {
    /// Number of discs placed (passes excluded).
    pub fn placements(&self) -> usize {
        self.actions.iter().filter(|a| !a.is_pass()).count()
    }

    pub fn record(&self) -> MoveRecord {
        MoveRecord::from_actions(&self.actions)
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Play one game on an N x N board, Dark moving first.
///
/// An agent that returns an illegal placement, or passes while it has a
/// legal move, ends the game with an error.
pub fn play_game(
    size: usize,
    dark: &mut dyn Agent,
    light: &mut dyn Agent,
) -> Result<GameSummary, GameError> {
    let mut state = GameState::with_size(size)?;
    let mut actions = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Dark => &mut *dark,
            Player::Light => &mut *light,
        };
        let action = agent.select_action(&state);
        if action.is_pass() && state.board().has_legal_move(player) {
            return Err(GameError::IllegalPass(player.name()));
        }
        debug!("{} ({}) plays {action}", player.name(), agent.name());
        state.apply_action_mut(action)?;
        actions.push(action);
    }

    let (black, white) = state.board().score();
    let outcome = state.outcome().unwrap_or(GameOutcome::Draw);
    info!(
        "{}x{} game over after {} actions: {:?} (black {black}, white {white})",
        size,
        size,
        actions.len(),
        outcome
    );

    Ok(GameSummary {
        actions,
        final_board: state.board().clone(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;

    struct AlwaysPass;

    impl Agent for AlwaysPass {
        fn select_action(&mut self, _state: &GameState) -> Action {
            Action::Pass
        }

        fn name(&self) -> &str {
            "AlwaysPass"
        }
    }

    struct Scripted(Vec<Action>);

    impl Agent for Scripted {
        fn select_action(&mut self, _state: &GameState) -> Action {
            self.0.remove(0)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_random_game_reaches_terminal() {
        let mut dark = RandomAgent::with_seed(1);
        let mut light = RandomAgent::with_seed(2);
        let summary = play_game(8, &mut dark, &mut light).unwrap();

        assert!(summary.final_board.is_terminal());
        assert_eq!(summary.final_board.outcome(), Some(summary.outcome));
        assert_eq!(summary.final_board.disc_count(), 4 + summary.placements());
    }

    #[test]
    fn test_record_replays_to_final_board() {
        let mut dark = RandomAgent::with_seed(7);
        let mut light = RandomAgent::with_seed(8);
        let summary = play_game(6, &mut dark, &mut light).unwrap();

        let boards = summary.record().replay(6).unwrap();
        assert_eq!(boards.last(), Some(&summary.final_board));
    }

    #[test]
    fn test_illegal_pass_is_rejected() {
        let mut dark = AlwaysPass;
        let mut light = RandomAgent::with_seed(3);
        assert_eq!(
            play_game(8, &mut dark, &mut light).unwrap_err(),
            GameError::IllegalPass("Dark")
        );
    }

    #[test]
    fn test_illegal_placement_is_rejected() {
        let mut dark = Scripted(vec![Action::place(0, 0)]);
        let mut light = RandomAgent::with_seed(3);
        assert_eq!(
            play_game(8, &mut dark, &mut light).unwrap_err(),
            GameError::InvalidAction { row: 0, col: 0 }
        );
    }

    #[test]
    fn test_invalid_size() {
        let mut dark = RandomAgent::with_seed(1);
        let mut light = RandomAgent::with_seed(2);
        assert_eq!(
            play_game(5, &mut dark, &mut light).unwrap_err(),
            GameError::InvalidSize(5)
        );
    }
}
