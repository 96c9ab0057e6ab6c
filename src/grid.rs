//! Rail grid: the transient k×N working structure of the cipher.
//!
//! Cells are stored row-major in a single `Vec`. Since the zig-zag path
//! descends one rail per column, rail `r` is first reached at column `r`;
//! rails at or beyond the input length are never reached and are not
//! materialized. They still count towards [`RailGrid::rails`] and read as
//! empty.

use crate::zigzag::{Position, RailCount};

/// Content of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<T> {
    /// Not on the zig-zag path.
    Empty,
    /// On the path, waiting for a symbol (decode pass 1).
    Reserved,
    /// Holds a symbol.
    Symbol(T),
}

impl<T> Default for Cell<T> {
    fn default() -> Self {
        Cell::Empty
    }
}

impl<T> Cell<T> {
    /// Returns the held symbol, if any.
    pub fn symbol(&self) -> Option<&T> {
        match self {
            Cell::Symbol(value) => Some(value),
            _ => None,
        }
    }

    /// True for cells off the zig-zag path.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True for cells reserved but not yet filled.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Cell::Reserved)
    }
}

/// A k×N grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailGrid<T> {
    rails: usize,
    stored_rails: usize,
    columns: usize,
    cells: Vec<Cell<T>>,
}

impl<T> RailGrid<T> {
    /// Creates an all-empty grid of `rails` rows by `columns` columns.
    pub fn new(rails: RailCount, columns: usize) -> Self {
        let stored_rails = rails.get().min(columns);
        let mut cells = Vec::with_capacity(stored_rails * columns);
        cells.resize_with(stored_rails * columns, Cell::default);
        RailGrid {
            rails: rails.get(),
            stored_rails,
            columns,
            cells,
        }
    }

    /// Number of rails (rows), k.
    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Number of columns, N.
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.rail < self.stored_rails && pos.column < self.columns {
            Some(pos.rail * self.columns + pos.column)
        } else {
            None
        }
    }

    /// Returns the cell at `pos`, or `None` if `pos` is not a materialized cell.
    pub fn cell(&self, pos: Position) -> Option<&Cell<T>> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Returns the symbol at `pos`, if that cell holds one.
    pub fn symbol(&self, pos: Position) -> Option<&T> {
        self.cell(pos).and_then(Cell::symbol)
    }

    /// Writes `value` into the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` lies outside the reachable part of the grid. Positions
    /// produced by the zig-zag path for this grid's dimensions never do.
    pub(crate) fn place(&mut self, pos: Position, value: T) {
        let i = self.reachable(pos);
        self.cells[i] = Cell::Symbol(value);
    }

    /// Marks the cell at `pos` as reserved.
    ///
    /// # Panics
    /// Same condition as [`place`](Self::place).
    pub(crate) fn reserve(&mut self, pos: Position) {
        let i = self.reachable(pos);
        self.cells[i] = Cell::Reserved;
    }

    fn reachable(&self, pos: Position) -> usize {
        match self.index(pos) {
            Some(i) => i,
            None => panic!(
                "position ({}, {}) outside {}x{} grid",
                pos.rail, pos.column, self.rails, self.columns
            ),
        }
    }

    /// Cells of rail `rail`, left to right. Unreached rails yield an empty slice.
    pub fn rail(&self, rail: usize) -> &[Cell<T>] {
        if rail < self.stored_rails {
            let start = rail * self.columns;
            &self.cells[start..start + self.columns]
        } else {
            &[]
        }
    }

    /// Symbols in row-major order: rail 0 first, columns ascending.
    pub fn symbols_row_major(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().filter_map(Cell::symbol)
    }

    /// Mutable cells in row-major order.
    pub(crate) fn cells_row_major_mut(&mut self) -> impl Iterator<Item = &mut Cell<T>> + '_ {
        self.cells.iter_mut()
    }

    /// Iterates `(position, symbol)` for every filled cell in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.symbol().map(|value| {
                (
                    Position {
                        rail: i / columns,
                        column: i % columns,
                    },
                    value,
                )
            })
        })
    }

    /// Number of cells holding a symbol.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.symbol().is_some()).count()
    }

    /// Number of reserved cells.
    pub fn reserved_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_reserved()).count()
    }
}
