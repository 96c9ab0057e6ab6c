//! RailFence: the encode/decode engine.
//!
//! Encoding writes the input along the zig-zag path and reads the grid
//! rail by rail. Decoding reserves the same path, refills the reserved
//! cells rail by rail from the ciphertext, then reads them back along the
//! path. Both are pure permutations: output length always equals input
//! length and no symbol is altered.

use tracing::{debug, trace};

use crate::error::RailFenceError;
use crate::grid::{Cell, RailGrid};
use crate::zigzag::{RailCount, ZigZag};

/// Result of a transform together with the populated grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription<T> {
    /// The transformed symbol sequence.
    pub output: Vec<T>,
    /// The fully populated grid, for visualization.
    pub grid: RailGrid<T>,
}

/// Rail Fence transposition cipher for a fixed rail count.
///
/// # Examples
///
/// ```
/// use railfence::RailFence;
///
/// let fence = RailFence::new(3).unwrap();
/// let cipher = fence.encode_str("WEAREDISCOVEREDFLEEATONCE");
/// assert_eq!(cipher, "WECRLTEERDSOEEFEAOCAIVDEN");
/// assert_eq!(fence.decode_str(&cipher), "WEAREDISCOVEREDFLEEATONCE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: RailCount,
}

impl RailFence {
    /// Creates an engine with `rails` rails.
    ///
    /// # Errors
    /// Returns [`RailFenceError::InvalidRailCount`] if `rails < 2`.
    ///
    /// ```
    /// use railfence::{RailFence, RailFenceError};
    ///
    /// assert_eq!(
    ///     RailFence::new(1),
    ///     Err(RailFenceError::InvalidRailCount { rails: 1 })
    /// );
    /// ```
    pub fn new(rails: i64) -> Result<Self, RailFenceError> {
        Ok(Self::with_rails(RailCount::new(rails)?))
    }

    /// Creates an engine from an already validated rail count.
    pub fn with_rails(rails: RailCount) -> Self {
        RailFence { rails }
    }

    /// Returns the rail count.
    pub fn rails(&self) -> RailCount {
        self.rails
    }

    /// Encodes `text`, discarding the grid.
    pub fn encode<T: Clone>(&self, text: &[T]) -> Vec<T> {
        self.encode_with_grid(text).output
    }

    /// Encodes `text` and returns the grid it was written into.
    pub fn encode_with_grid<T: Clone>(&self, text: &[T]) -> Transcription<T> {
        debug!(rails = self.rails.get(), len = text.len(), "rail fence encode");
        let mut grid = RailGrid::new(self.rails, text.len());

        for (pos, symbol) in ZigZag::new(text.len(), self.rails).zip(text) {
            grid.place(pos, symbol.clone());
        }

        let output: Vec<T> = grid.symbols_row_major().cloned().collect();
        trace!(filled = grid.filled_count(), "encode grid populated");
        Transcription { output, grid }
    }

    /// Decodes `cipher`, discarding the grid.
    pub fn decode<T: Clone>(&self, cipher: &[T]) -> Vec<T> {
        self.decode_with_grid(cipher).output
    }

    /// Decodes `cipher` and returns the reconstructed grid.
    pub fn decode_with_grid<T: Clone>(&self, cipher: &[T]) -> Transcription<T> {
        debug!(rails = self.rails.get(), len = cipher.len(), "rail fence decode");
        let mut grid = RailGrid::new(self.rails, cipher.len());

        // Pass 1: mark the skeleton.
        for pos in ZigZag::new(cipher.len(), self.rails) {
            grid.reserve(pos);
        }
        trace!(reserved = grid.reserved_count(), "decode skeleton reserved");

        // Pass 2: refill rail by rail in ciphertext order.
        let reserved = grid.cells_row_major_mut().filter(|cell| cell.is_reserved());
        for (cell, symbol) in reserved.zip(cipher) {
            *cell = Cell::Symbol(symbol.clone());
        }

        // Pass 3: read back along the path.
        let output: Vec<T> = ZigZag::new(cipher.len(), self.rails)
            .filter_map(|pos| grid.symbol(pos).cloned())
            .collect();
        trace!(filled = grid.filled_count(), "decode grid populated");
        Transcription { output, grid }
    }

    /// Encodes a string, treating each `char` as one symbol.
    pub fn encode_str(&self, text: &str) -> String {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols).into_iter().collect()
    }

    /// Decodes a string, treating each `char` as one symbol.
    pub fn decode_str(&self, cipher: &str) -> String {
        let symbols: Vec<char> = cipher.chars().collect();
        self.decode(&symbols).into_iter().collect()
    }

    /// Encodes raw bytes, one byte per symbol.
    pub fn encode_bytes(&self, data: &[u8]) -> Vec<u8> {
        self.encode(data)
    }

    /// Decodes raw bytes, one byte per symbol.
    pub fn decode_bytes(&self, data: &[u8]) -> Vec<u8> {
        self.decode(data)
    }
}

/// Encodes `text` across `rails` rails.
///
/// # Errors
/// Returns [`RailFenceError::InvalidRailCount`] if `rails < 2`.
///
/// # Examples
///
/// ```
/// assert_eq!(railfence::encode("HELLO", 2).unwrap(), "HLOEL");
/// assert!(railfence::encode("HELLO", 0).is_err());
/// ```
pub fn encode(text: &str, rails: i64) -> Result<String, RailFenceError> {
    Ok(RailFence::new(rails)?.encode_str(text))
}

/// Decodes `cipher` across `rails` rails.
///
/// # Errors
/// Returns [`RailFenceError::InvalidRailCount`] if `rails < 2`.
///
/// # Examples
///
/// ```
/// assert_eq!(railfence::decode("HLOEL", 2).unwrap(), "HELLO");
/// ```
pub fn decode(cipher: &str, rails: i64) -> Result<String, RailFenceError> {
    Ok(RailFence::new(rails)?.decode_str(cipher))
}
