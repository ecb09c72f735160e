//! Turn-based positional games on an N x N grid in the tic-tac-toe family.
//!
//! [`game::GridGameModel`] keeps the board, the move history and the turn order,
//! [`game::WinValidator`] implementations decide who has won.

pub mod game;
