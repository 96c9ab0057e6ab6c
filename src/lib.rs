//! Rail Fence transposition cipher engine.
//!
//! The Rail Fence cipher writes a text diagonally across k horizontal
//! rails, bouncing between the top and bottom rail, then reads the rails
//! off one after another. Decoding rebuilds the same zig-zag skeleton and
//! refills it from the ciphertext.
//!
//! # Architecture
//!
//! ```text
//! zigzag     (path generator — the single source of (rail, column) positions)
//!     ↓ consumed by
//! fence      (RailFence — encode / decode over a RailGrid)
//!     ↓ grid handed to
//! visualize  (plot points and text rendering)
//!
//! config + session   (front-end adapter: validation, input loading, saving)
//! ```
//!
//! # Examples
//!
//! Encode and decode a string:
//!
//! ```
//! use railfence::RailFence;
//!
//! let fence = RailFence::new(3).unwrap();
//! let cipher = fence.encode_str("WEAREDISCOVEREDFLEEATONCE");
//! assert_eq!(cipher, "WECRLTEERDSOEEFEAOCAIVDEN");
//! assert_eq!(fence.decode_str(&cipher), "WEAREDISCOVEREDFLEEATONCE");
//! ```
//!
//! Any cloneable symbol type works, and the populated grid is available
//! for display:
//!
//! ```
//! use railfence::RailFence;
//! use railfence::visualize::render_text;
//!
//! let fence = RailFence::new(2).unwrap();
//! let t = fence.encode_with_grid(&[1u8, 2, 3, 4]);
//! assert_eq!(t.output, vec![1, 3, 2, 4]);
//! assert!(render_text(&t.grid, "bytes").contains("1 . 3 ."));
//! ```
//!
//! Rail counts below 2 are rejected:
//!
//! ```
//! use railfence::RailFenceError;
//!
//! assert_eq!(
//!     railfence::encode("HELLO", 1),
//!     Err(RailFenceError::InvalidRailCount { rails: 1 })
//! );
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod grid;
pub mod session;
pub mod visualize;
pub mod zigzag;

mod fence;

pub use error::{RailFenceError, SessionError};
pub use fence::{decode, encode, RailFence, Transcription};
pub use grid::{Cell, RailGrid};
pub use zigzag::{generate_path, Position, RailCount, ZigZag};
