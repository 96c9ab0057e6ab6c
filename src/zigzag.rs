//! Zig-zag index generator.
//!
//! Produces the ordered sequence of grid positions visited when a text of
//! length N is written diagonally across k rails: down from rail 0 to rail
//! k-1, back up to rail 0, and so on, one column per symbol.
//!
//! Both encoding and decoding walk this path; neither re-derives the
//! row/column stepping on its own, so the two stay exact inverses.

use crate::error::RailFenceError;

/// Smallest rail count for which the zig-zag is defined.
pub const MIN_RAILS: usize = 2;

/// A validated rail count (k >= 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RailCount(usize);

impl RailCount {
    /// Validates a caller-supplied rail count.
    ///
    /// # Errors
    /// Returns [`RailFenceError::InvalidRailCount`] if `rails < 2`, or if the
    /// value does not fit in `usize` on this platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use railfence::RailCount;
    ///
    /// assert_eq!(RailCount::new(3).unwrap().get(), 3);
    /// assert!(RailCount::new(1).is_err());
    /// assert!(RailCount::new(-1).is_err());
    /// ```
    pub fn new(rails: i64) -> Result<Self, RailFenceError> {
        match usize::try_from(rails) {
            Ok(k) if k >= MIN_RAILS => Ok(RailCount(k)),
            _ => Err(RailFenceError::InvalidRailCount { rails }),
        }
    }

    /// Returns the rail count as a `usize`.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for RailCount {
    type Error = RailFenceError;

    fn try_from(rails: i64) -> Result<Self, Self::Error> {
        RailCount::new(rails)
    }
}

impl TryFrom<usize> for RailCount {
    type Error = RailFenceError;

    fn try_from(rails: usize) -> Result<Self, Self::Error> {
        if rails < MIN_RAILS {
            return Err(RailFenceError::InvalidRailCount {
                rails: rails as i64,
            });
        }
        Ok(RailCount(rails))
    }
}

impl std::fmt::Display for RailCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell coordinate in the rail grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, 0 being the top rail.
    pub rail: usize,
    /// Column index, equal to the symbol's index in the plaintext.
    pub column: usize,
}

/// Iterator over the zig-zag path for a given length and rail count.
///
/// Yields exactly `len` positions. Column `i` is always the `i`-th item.
#[derive(Debug, Clone)]
pub struct ZigZag {
    last_rail: usize,
    remaining: usize,
    rail: usize,
    column: usize,
    descending: bool,
}

impl ZigZag {
    /// Starts a path of `len` steps across `rails` rails.
    pub fn new(len: usize, rails: RailCount) -> Self {
        ZigZag {
            last_rail: rails.get() - 1,
            remaining: len,
            rail: 0,
            column: 0,
            // Flipped at rail 0 before the first step is taken.
            descending: false,
        }
    }
}

impl Iterator for ZigZag {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }
        let position = Position {
            rail: self.rail,
            column: self.column,
        };

        if self.rail == 0 || self.rail == self.last_rail {
            self.descending = !self.descending;
        }
        // last_rail >= 1, so rail stays within [0, last_rail].
        if self.descending {
            self.rail += 1;
        } else {
            self.rail -= 1;
        }
        self.column += 1;
        self.remaining -= 1;

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ZigZag {}

impl std::iter::FusedIterator for ZigZag {}

/// Collects the zig-zag path for `len` symbols across `rails` rails.
///
/// # Examples
///
/// ```
/// use railfence::zigzag::{generate_path, RailCount};
///
/// let rails = RailCount::new(2).unwrap();
/// let rows: Vec<usize> = generate_path(5, rails).iter().map(|p| p.rail).collect();
/// assert_eq!(rows, vec![0, 1, 0, 1, 0]);
/// ```
pub fn generate_path(len: usize, rails: RailCount) -> Vec<Position> {
    ZigZag::new(len, rails).collect()
}
