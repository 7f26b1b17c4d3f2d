//! Replays a list of move tokens against a [`Board`] and classifies the result.

use log::{debug, error, info};

use super::{parse_move, Board, GameState, Move, Observer, ObserverId, Observers, COLS, ROWS};
use crate::error::ParseMoveError;

/// Owns one game's board and the observers interested in it.
#[derive(Default)]
pub struct MoveSequencer {
    board: Board,
    observers: Observers,
}

impl MoveSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        self.observers.remove(id)
    }

    /// Board as left by the moves applied so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play `moves` in order and classify the outcome.
    ///
    /// A malformed token aborts with an error. Moves before it stay applied.
    /// A move rejected by the board (bad or full column) is logged and ends
    /// processing without an error.
    ///
    /// Every applied, non-winning move is published as `Ongoing`, followed by
    /// one final notification. `Draw` requires exactly `ROWS * COLS` input
    /// tokens.
    ///
    /// An unfinished game returns `Ongoing` but its final notification carries
    /// `Draw`. The returned value is the authoritative one.
    pub fn resolve<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<GameState, ParseMoveError> {
        let mut last_move: Option<Move> = None;
        let mut winner = None;

        for token in moves {
            let mv = parse_move(token.as_ref())?;
            last_move = Some(mv);

            match self.board.drop_piece(mv.column, mv.player.to_cell()) {
                Ok(true) => {
                    winner = Some(mv.player);
                    break;
                }
                Ok(false) => {
                    debug!("{} dropped into column {}", mv.player, mv.column);
                }
                Err(e) => {
                    error!("{e}");
                    break;
                }
            }

            self.observers
                .notify_all(last_move, &self.board, GameState::Ongoing);
        }

        let (state, published) = match winner {
            Some(player) => (GameState::won_by(player), GameState::won_by(player)),
            None if moves.len() == ROWS * COLS => (GameState::Draw, GameState::Draw),
            // observers see Draw for an unfinished game
            None => (GameState::Ongoing, GameState::Draw),
        };

        info!(
            "resolved {} move(s) into {} after {} tokens",
            self.board.move_count(),
            state,
            moves.len()
        );
        self.observers.notify_all(last_move, &self.board, published);
        Ok(state)
    }
}
