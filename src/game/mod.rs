pub mod variant;

mod error;
mod grid;
mod model;
mod player_pool;
mod win;

use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::ops::Deref;

pub use error::GameError;
pub use grid::{Cell, Field};
pub use model::{Feedback, GridGameModel, GridGameMove};
pub use player_pool::PlayerPool;
pub use variant::Variant;
pub use win::{LineWinValidator, WinValidator};

pub type GameResult<T> = Result<T, GameError>;
pub type PlayerId = u32;

/// Anything a player can mark a cell with.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}

/// Contents of one field cell, `None` while nobody has marked it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FinishedState {
    Win(PlayerId),
    Draw,
}

/// Snapshot of where a game stands, derived from the board on every call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Turn(PlayerId),
    Finished(FinishedState),
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }
}
