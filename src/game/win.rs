use tracing::instrument;

use super::{Cell, Field, GridGameMove, PlayerId, Symbol};

/// Decides who, if anyone, has won the game so far.
pub trait WinValidator<S> {
    fn get_winner(&self, field: &Field<S>, move_history: &[GridGameMove<S>]) -> Option<PlayerId>;
}

/// Wins by filling a whole row, column or main diagonal with one symbol.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineWinValidator;

impl LineWinValidator {
    /// Every full-length line of the field: rows, then columns,
    /// then the backslash diagonal, then the forward slash one.
    fn groups<'a, S: 'a>(field: &'a Field<S>) -> impl Iterator<Item = Vec<Cell>> + 'a {
        let coords = field.valid_coords();
        let size = *coords.end();
        let rows = coords.clone().map(move |row| {
            field
                .valid_coords()
                .map(|k| Cell::new(row, k))
                .collect::<Vec<_>>()
        });
        let cols = coords.clone().map(move |col| {
            field
                .valid_coords()
                .map(|k| Cell::new(k, col))
                .collect::<Vec<_>>()
        });
        let backslash: Vec<Cell> = coords.clone().map(|k| Cell::new(k, k)).collect();
        let forward_slash: Vec<Cell> = coords.map(|k| Cell::new(k, size - k + 1)).collect();

        rows.chain(cols).chain([backslash, forward_slash])
    }
}

impl<S: Symbol> WinValidator<S> for LineWinValidator {
    #[instrument(level = "trace", skip_all)]
    fn get_winner(&self, field: &Field<S>, move_history: &[GridGameMove<S>]) -> Option<PlayerId> {
        for group in Self::groups(field) {
            let Some(basis) = field.get_symbol_at(group[0]) else {
                continue;
            };
            if !field.are_all_equal_to_basis(basis, &group) {
                continue;
            }

            let owner = move_history
                .iter()
                .rev()
                .find(|m| m.symbol() == basis && group.contains(&m.cell()))
                .map(|m| m.player());
            match owner {
                Some(player) => return Some(player),
                None => panic!(
                    "winning symbol {:?} in cell group {:?} has no associated player",
                    basis, group
                ),
            }
        }
        None
    }
}
