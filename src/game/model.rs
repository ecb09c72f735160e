use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use tracing::{debug, instrument, trace};

use super::{
    Cell, Field, FinishedState, GameError, GameResult, GameState, LineWinValidator, PlayerId,
    PlayerPool, Symbol, WinValidator,
};

/// One committed placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGameMove<S> {
    player: PlayerId,
    symbol: S,
    cell: Cell,
}

impl<S> GridGameMove<S> {
    pub fn new(player: PlayerId, symbol: S, cell: Cell) -> Self {
        Self {
            player,
            symbol,
            cell,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }
}

/// Outcome of [`GridGameModel::place_symbol`].
///
/// Rejected moves are ordinary traffic (a misclick, a typo), so they are reported
/// as values rather than errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Valid,
    GameOver,
    InvalidSymbol,
    OutOfBounds,
    Occupied,
}

impl Display for Feedback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Feedback::Valid => "ok",
            Feedback::GameOver => "the game is already over",
            Feedback::InvalidSymbol => "that symbol can't be placed by the current player",
            Feedback::OutOfBounds => "the cell is outside of the field",
            Feedback::Occupied => "the cell is already occupied",
        })
    }
}

/// A game on an N x N field for two or more players taking turns.
///
/// Nothing about the outcome is stored: winner and game over are recomputed from the
/// field and the move history on every call.
#[derive(Debug)]
pub struct GridGameModel<S, V = LineWinValidator> {
    field: Field<S>,
    move_history: Vec<GridGameMove<S>>,
    players: PlayerPool<S>,
    win_validator: V,
    current_player: PlayerId,
}

impl<S: Symbol> GridGameModel<S> {
    /// Creates a game won by completing a row, a column or a main diagonal.
    pub fn new(grid_size: usize, player_symbols: Vec<S>, player_count: usize) -> GameResult<Self> {
        Self::with_validator(grid_size, player_symbols, player_count, LineWinValidator)
    }
}

impl<S: Symbol, V: WinValidator<S>> GridGameModel<S, V> {
    /// Creates a game that asks `win_validator` for the winner.
    ///
    /// Player `k` gets the `k`-th symbol of `player_symbols`, player 1 moves first.
    #[instrument(level = "debug", skip(win_validator))]
    pub fn with_validator(
        grid_size: usize,
        player_symbols: Vec<S>,
        player_count: usize,
        win_validator: V,
    ) -> GameResult<Self> {
        let players = PlayerPool::new(player_symbols, player_count)?;
        let field = Field::new(grid_size)?;
        Ok(Self {
            field,
            move_history: Vec::new(),
            players,
            win_validator,
            current_player: 1,
        })
    }

    pub fn field(&self) -> &Field<S> {
        &self.field
    }

    pub fn occupied_cells(&self) -> HashMap<Cell, S> {
        self.field.occupied_cells()
    }

    pub fn grid_size(&self) -> usize {
        self.field.grid_size()
    }

    pub fn is_within_bounds(&self, cell: Cell) -> bool {
        self.field.is_within_bounds(cell)
    }

    pub fn has_unoccupied_cell(&self) -> bool {
        self.field.has_unoccupied_cell()
    }

    pub fn move_history(&self) -> &[GridGameMove<S>] {
        &self.move_history
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || !self.field.has_unoccupied_cell()
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Player that moves after the current one. Doesn't advance the turn.
    pub fn next_player(&self) -> PlayerId {
        self.players.next_after(self.current_player)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.win_validator
            .get_winner(&self.field, &self.move_history)
    }

    pub fn state(&self) -> GameState {
        match self.winner() {
            Some(player) => GameState::Finished(FinishedState::Win(player)),
            None if !self.field.has_unoccupied_cell() => GameState::Finished(FinishedState::Draw),
            None => GameState::Turn(self.current_player),
        }
    }

    /// Symbols `player` is allowed to place.
    pub fn get_symbol_choices(&self, player: PlayerId) -> GameResult<Vec<S>> {
        self.players
            .symbol(player)
            .map(|symbol| vec![symbol.clone()])
            .ok_or_else(|| GameError::invalid_player(player, self.player_count()))
    }

    /// Places `symbol` into `cell` on behalf of the current player and passes the turn on.
    ///
    /// Checks are made in a fixed order: game over, symbol, bounds, occupancy.
    /// Nothing changes unless [`Feedback::Valid`] is returned.
    #[instrument(skip(self), fields(player = self.current_player))]
    pub fn place_symbol(&mut self, symbol: S, cell: Cell) -> Feedback {
        if let Some(feedback) = self.rejection(&symbol, cell) {
            trace!(%feedback, "move rejected");
            return feedback;
        }

        self.field.place_symbol(symbol.clone(), cell);
        self.move_history
            .push(GridGameMove::new(self.current_player, symbol, cell));
        self.current_player = self.next_player();
        debug!(next = self.current_player, "move accepted");

        Feedback::Valid
    }

    fn rejection(&self, symbol: &S, cell: Cell) -> Option<Feedback> {
        if self.is_game_over() {
            return Some(Feedback::GameOver);
        }
        let allowed = self
            .get_symbol_choices(self.current_player)
            .is_ok_and(|choices| choices.contains(symbol));
        if !allowed {
            return Some(Feedback::InvalidSymbol);
        }
        if !self.field.is_within_bounds(cell) {
            return Some(Feedback::OutOfBounds);
        }
        if self.field.get_symbol_at(cell).is_some() {
            return Some(Feedback::Occupied);
        }
        None
    }
}
