//! Grid visualizer adapter.
//!
//! Maps a populated [`RailGrid`] to plot coordinates (`x = column`,
//! `y = -rail`, so rails stack top to bottom) and renders it as text for
//! terminal output. Carries no cipher logic.

use std::fmt::{self, Display, Write as _};

use crate::grid::{Cell, RailGrid};

/// Title used for grids produced by encoding.
pub const ENCODE_TITLE: &str = "Rail Fence encoding pattern";

/// Title used for grids produced by decoding.
pub const DECODE_TITLE: &str = "Rail Fence decoding pattern";

/// Minimum figure width, in plot units.
const MIN_FIGURE_WIDTH: f64 = 10.0;

/// Figure width added per column.
const WIDTH_PER_COLUMN: f64 = 0.4;

/// A symbol placed at plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPoint<'a, T> {
    /// Horizontal coordinate: the column index.
    pub x: i64,
    /// Vertical coordinate: the negated rail index.
    pub y: i64,
    /// The symbol drawn at this point.
    pub symbol: &'a T,
}

/// Everything a plotting front end needs to draw a rail grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure<'a, T> {
    /// Caption drawn above the grid.
    pub title: String,
    /// Figure width, growing with the number of columns.
    pub width: f64,
    /// Figure height, growing with the number of reached rails.
    pub height: f64,
    /// Horizontal plot range `[-1, N]`.
    pub x_limits: (i64, i64),
    /// Vertical plot range `[-k, 1]`.
    pub y_limits: (i64, i64),
    /// One point per filled cell, in row-major order.
    pub points: Vec<PlotPoint<'a, T>>,
}

impl<'a, T> Figure<'a, T> {
    /// Builds the figure for `grid`.
    pub fn from_grid(grid: &'a RailGrid<T>, title: &str) -> Self {
        let points = grid
            .filled()
            .map(|(pos, symbol)| PlotPoint {
                x: pos.column as i64,
                y: -(pos.rail as i64),
                symbol,
            })
            .collect();
        let (width, height) = figure_size(grid);
        Figure {
            title: title.to_string(),
            width,
            height,
            x_limits: (-1, grid.columns() as i64),
            y_limits: (-(grid.rails() as i64), 1),
            points,
        }
    }
}

/// Number of rails the zig-zag actually reaches for this grid.
fn reached_rails<T>(grid: &RailGrid<T>) -> usize {
    grid.rails().min(grid.columns())
}

/// Figure dimensions scaled with N and the reached rail depth.
pub fn figure_size<T>(grid: &RailGrid<T>) -> (f64, f64) {
    let width = MIN_FIGURE_WIDTH.max(grid.columns() as f64 * WIDTH_PER_COLUMN);
    let height = reached_rails(grid).max(1) as f64;
    (width, height)
}

/// Renders `grid` as text under `title`.
///
/// Each reached rail becomes one line; empty cells print as `.` and every
/// cell is padded to the widest symbol.
///
/// # Examples
///
/// ```
/// use railfence::RailFence;
/// use railfence::visualize::render_text;
///
/// let t = RailFence::new(2).unwrap().encode_with_grid(&['H', 'E', 'L', 'L', 'O']);
/// assert_eq!(render_text(&t.grid, "demo"), "demo\n====\nH . L . O\n. E . L .\n");
/// ```
pub fn render_text<T: Display>(grid: &RailGrid<T>, title: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_grid(&mut out, grid, title);
    out
}

fn write_grid<T: Display>(out: &mut String, grid: &RailGrid<T>, title: &str) -> fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;

    let labels: Vec<Vec<String>> = (0..reached_rails(grid))
        .map(|r| grid.rail(r).iter().map(cell_label).collect())
        .collect();
    let width = labels
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(1);

    for row in &labels {
        let line: Vec<String> = row.iter().map(|label| format!("{:<width$}", label)).collect();
        writeln!(out, "{}", line.join(" ").trim_end())?;
    }
    Ok(())
}

fn cell_label<T: Display>(cell: &Cell<T>) -> String {
    match cell {
        Cell::Empty => ".".to_string(),
        Cell::Reserved => "*".to_string(),
        Cell::Symbol(value) => value.to_string(),
    }
}
