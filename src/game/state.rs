use std::fmt;

use super::Player;

/// Classification of a game after a sequence of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum GameState {
    RedWins,
    YellowWins,
    Draw,
    Ongoing,
}

impl GameState {
    /// The winning state for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Red => GameState::RedWins,
            Player::Yellow => GameState::YellowWins,
        }
    }

    /// Everything except `Ongoing` ends the game.
    pub fn is_terminal(self) -> bool {
        self != GameState::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::RedWins => Some(Player::Red),
            GameState::YellowWins => Some(Player::Yellow),
            GameState::Draw | GameState::Ongoing => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::RedWins => f.write_str("Red wins"),
            GameState::YellowWins => f.write_str("Yellow wins"),
            GameState::Draw => f.write_str("Draw"),
            GameState::Ongoing => f.write_str("Ongoing"),
        }
    }
}
