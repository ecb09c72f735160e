use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, RangeInclusive};

use super::{BoardCell, GameError, GameResult, Symbol};

/// Coordinates of a cell in the [`Field`], 1-indexed on both axes.
///
/// Coordinates are signed so that any pair a caller comes up with can be
/// represented; everything outside `1..=grid_size` is simply out of bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: i32,
    col: i32,
}

impl From<(i32, i32)> for Cell {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Cell {
    /// Constructs a new [`Cell`].
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> i32 {
        self.col
    }
}

/// Square grid that stores at most one symbol per cell.
/// Cells are never cleared once a symbol is placed.
#[derive(Clone, Debug)]
pub struct Field<S> {
    size: i32,
    contents: Vec<Vec<BoardCell<S>>>,
}

impl<S> Deref for Field<S> {
    type Target = [Vec<BoardCell<S>>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

impl<S: Display> Display for Field<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.deref() {
            for val in row {
                write!(f, "{}", val)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<S> Index<Cell> for Field<S> {
    type Output = BoardCell<S>;

    fn index(&self, index: Cell) -> &Self::Output {
        match self.position(index) {
            Some((row, col)) => &self.contents[row][col],
            None => panic!(
                "cell {} is out of bounds of a {}x{} field",
                index, self.size, self.size
            ),
        }
    }
}

impl<S> Field<S> {
    /// Creates an empty `grid_size` x `grid_size` field.
    pub fn new(grid_size: usize) -> GameResult<Self> {
        let size = i32::try_from(grid_size)
            .ok()
            .filter(|&size| size > 0)
            .ok_or_else(|| GameError::invalid_grid_size(grid_size))?;
        let contents = (0..grid_size)
            .map(|_| (0..grid_size).map(|_| BoardCell::default()).collect())
            .collect();
        Ok(Self { size, contents })
    }

    pub fn grid_size(&self) -> usize {
        self.contents.len()
    }

    /// Row and column indices that address a cell, in ascending order.
    pub fn valid_coords(&self) -> RangeInclusive<i32> {
        1..=self.size
    }

    pub fn is_within_bounds(&self, cell: Cell) -> bool {
        self.valid_coords().contains(&cell.row) && self.valid_coords().contains(&cell.col)
    }

    /// Returns the symbol placed at `cell`.
    ///
    /// [`None`] means the cell is empty, or that it doesn't exist at all, so callers
    /// that care about the difference have to check [`Field::is_within_bounds`] first.
    pub fn get_symbol_at(&self, cell: Cell) -> Option<&S> {
        let (row, col) = self.position(cell)?;
        self.contents[row][col].as_ref()
    }

    pub fn has_unoccupied_cell(&self) -> bool {
        self.contents.iter().flatten().any(|cell| cell.is_none())
    }

    /// Returns an iterator to occupied cells row by row
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, &S)> {
        self.valid_coords()
            .flat_map(move |row| self.valid_coords().map(move |col| Cell::new(row, col)))
            .filter_map(move |cell| self.get_symbol_at(cell).map(|symbol| (cell, symbol)))
    }

    fn position(&self, cell: Cell) -> Option<(usize, usize)> {
        if !self.is_within_bounds(cell) {
            return None;
        }
        // both coordinates are at least 1 here
        Some(((cell.row - 1) as usize, (cell.col - 1) as usize))
    }
}

impl<S: Symbol> Field<S> {
    /// Puts `symbol` into `cell`.
    ///
    /// The cell must be within bounds and empty, it's up to the caller to check it.
    pub fn place_symbol(&mut self, symbol: S, cell: Cell) {
        let Some((row, col)) = self.position(cell) else {
            panic!(
                "cell {} is out of bounds of a {}x{} field",
                cell, self.size, self.size
            );
        };
        let target = &mut self.contents[row][col];
        debug_assert!(target.is_none(), "cell {} is already occupied", cell);
        *target = BoardCell::from(symbol);
    }

    /// Checks that every cell of `group` holds exactly `basis`.
    pub fn are_all_equal_to_basis(&self, basis: &S, group: &[Cell]) -> bool {
        group
            .iter()
            .all(|&cell| self.get_symbol_at(cell) == Some(basis))
    }

    /// Returns a snapshot of all occupied cells.
    pub fn occupied_cells(&self) -> HashMap<Cell, S> {
        self.occupied()
            .map(|(cell, symbol)| (cell, symbol.clone()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_rejects_empty_grid() {
        assert_eq!(
            Field::<char>::new(0).unwrap_err(),
            GameError::invalid_grid_size(0)
        );
        assert!(Field::<char>::new(1).is_ok());
    }

    #[test]
    fn test_is_within_bounds() {
        let field = Field::<char>::new(3).unwrap();
        for row in 1..=3 {
            for col in 1..=3 {
                assert!(field.is_within_bounds(Cell::new(row, col)));
            }
        }

        assert!(!field.is_within_bounds(Cell::new(0, 0)));
        assert!(!field.is_within_bounds(Cell::new(0, 1)));
        assert!(!field.is_within_bounds(Cell::new(1, 0)));
        assert!(!field.is_within_bounds(Cell::new(-1, 2)));
        assert!(!field.is_within_bounds(Cell::new(4, 1)));
        assert!(!field.is_within_bounds(Cell::new(1, 4)));
    }

    #[test]
    fn test_place_and_get_symbol() {
        let mut field = Field::new(2).unwrap();
        assert_eq!(field.get_symbol_at((1, 2).into()), None);

        field.place_symbol('X', (1, 2).into());
        assert_eq!(field.get_symbol_at((1, 2).into()), Some(&'X'));
        assert_eq!(*field[Cell::new(1, 2)], Some('X'));

        // out of bounds cells are never occupied
        assert_eq!(field.get_symbol_at((0, 2).into()), None);
        assert_eq!(field.get_symbol_at((3, 3).into()), None);
    }

    #[test]
    #[should_panic]
    fn test_place_out_of_bounds() {
        let mut field = Field::new(2).unwrap();
        field.place_symbol('X', (3, 1).into());
    }

    #[test]
    fn test_are_all_equal_to_basis() {
        let mut field = Field::new(3).unwrap();
        let row: Vec<Cell> = (1..=3).map(|col| Cell::new(1, col)).collect();

        field.place_symbol('X', (1, 1).into());
        field.place_symbol('X', (1, 2).into());
        // an empty cell breaks the line
        assert!(!field.are_all_equal_to_basis(&'X', &row));

        field.place_symbol('O', (1, 3).into());
        // and so does a different symbol
        assert!(!field.are_all_equal_to_basis(&'X', &row));
        assert!(field.are_all_equal_to_basis(&'X', &row[..2]));
    }

    #[test]
    fn test_has_unoccupied_cell() {
        let mut field = Field::new(2).unwrap();
        for (i, cell) in [(1, 1), (1, 2), (2, 1), (2, 2)].into_iter().enumerate() {
            assert!(field.has_unoccupied_cell());
            field.place_symbol(i, cell.into());
        }
        assert!(!field.has_unoccupied_cell());
    }

    #[test]
    fn test_occupied_cells() {
        let mut field = Field::new(2).unwrap();
        field.place_symbol('O', (2, 2).into());
        field.place_symbol('X', (1, 1).into());

        itertools::assert_equal(
            field.occupied(),
            [(Cell::new(1, 1), &'X'), (Cell::new(2, 2), &'O')],
        );
        assert_eq!(
            field.occupied_cells(),
            HashMap::from([(Cell::new(1, 1), 'X'), (Cell::new(2, 2), 'O')])
        );
    }

    #[test]
    fn test_valid_coords() {
        let field = Field::<char>::new(4).unwrap();
        itertools::assert_equal(field.valid_coords(), [1, 2, 3, 4]);
        assert_eq!(field.grid_size(), 4);
    }

    #[test]
    fn test_display() {
        let mut field = Field::new(2).unwrap();
        field.place_symbol('X', (1, 2).into());
        assert_eq!(field.to_string(), "[ ][X]\n[ ][ ]\n");
    }
}
