use super::PlayerId;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("must have at least two players (found {found})")]
    NotEnoughPlayers { found: usize },
    #[error("player symbols must be unique (found {symbols})")]
    DuplicateSymbols { symbols: String },
    #[error("player symbols must be exactly {expected} (found {found})")]
    SymbolCountMismatch { expected: usize, found: usize },
    #[error("invalid grid size: {size}")]
    InvalidGridSize { size: usize },
    #[error("invalid player: {player} (expected: 1-{player_count})")]
    InvalidPlayer {
        player: PlayerId,
        player_count: usize,
    },
    #[error("variant \"{variant}\" is not yet implemented")]
    UnsupportedVariant { variant: String },
}

impl GameError {
    pub fn not_enough_players(found: usize) -> Self {
        Self::NotEnoughPlayers { found }
    }

    pub fn duplicate_symbols(symbols: String) -> Self {
        Self::DuplicateSymbols { symbols }
    }

    pub fn symbol_count_mismatch(expected: usize, found: usize) -> Self {
        Self::SymbolCountMismatch { expected, found }
    }

    pub fn invalid_grid_size(size: usize) -> Self {
        Self::InvalidGridSize { size }
    }

    pub fn invalid_player(player: PlayerId, player_count: usize) -> Self {
        Self::InvalidPlayer {
            player,
            player_count,
        }
    }

    pub fn unsupported_variant(variant: String) -> Self {
        Self::UnsupportedVariant { variant }
    }
}
