use std::fmt::{Display, Formatter};

use clap::ValueEnum;

use super::{GameError, GameResult, GridGameModel};

/// Rule sets known by name. Only classic tic-tac-toe is playable so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    #[value(name = "tictactoe")]
    TicTacToe,
    #[value(name = "notakto")]
    Notakto,
    #[value(name = "wild")]
    Wild,
    #[value(name = "pick15")]
    Pick15,
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Variant::TicTacToe => "tictactoe",
            Variant::Notakto => "notakto",
            Variant::Wild => "wild",
            Variant::Pick15 => "pick15",
        })
    }
}

impl Variant {
    pub fn build_model(
        self,
        grid_size: usize,
        player_symbols: Vec<String>,
        player_count: usize,
    ) -> GameResult<GridGameModel<String>> {
        match self {
            Variant::TicTacToe => GridGameModel::new(grid_size, player_symbols, player_count),
            // TODO: notakto needs a validator where completing a line loses the game
            Variant::Notakto | Variant::Wild | Variant::Pick15 => {
                Err(GameError::unsupported_variant(self.to_string()))
            }
        }
    }
}
