//! Front-end configuration: operation, rail count and output naming.
//!
//! The transform engine accepts any rail count >= 2. The front end narrows
//! that to [`MIN_RAILS`]..=[`MAX_RAILS`] and requires a non-blank output
//! file name before the engine is invoked.

use std::fmt;

use crate::error::SessionError;
use crate::fence::RailFence;

/// Rail count used when none is given.
pub const DEFAULT_RAILS: i64 = 3;

/// Smallest rail count accepted by the front end.
pub const MIN_RAILS: i64 = 2;

/// Largest rail count accepted by the front end.
pub const MAX_RAILS: i64 = 100;

/// Default output file name for encoded text.
pub const DEFAULT_ENCODE_OUTPUT: &str = "ciphertext.txt";

/// Default output file name for decoded text.
pub const DEFAULT_DECODE_OUTPUT: &str = "plaintext.txt";

/// Direction of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Plaintext to ciphertext.
    Encode,
    /// Ciphertext to plaintext.
    Decode,
}

impl Operation {
    /// Output file name offered when the user does not pick one.
    pub fn default_output_name(self) -> &'static str {
        match self {
            Operation::Encode => DEFAULT_ENCODE_OUTPUT,
            Operation::Decode => DEFAULT_DECODE_OUTPUT,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encode => write!(f, "encode"),
            Operation::Decode => write!(f, "decode"),
        }
    }
}

/// Parameters for one run of the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Encode or decode.
    pub operation: Operation,
    /// Rail count, k.
    pub rails: i64,
    /// File name the result is saved under.
    pub output_name: String,
    /// Whether to render the rail grid.
    pub show_grid: bool,
}

impl Config {
    /// Default configuration for `operation`.
    pub fn new(operation: Operation) -> Self {
        Config {
            operation,
            rails: DEFAULT_RAILS,
            output_name: operation.default_output_name().to_string(),
            show_grid: true,
        }
    }

    /// Sets the rail count.
    pub fn with_rails(mut self, rails: i64) -> Self {
        self.rails = rails;
        self
    }

    /// Sets the output file name.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    /// Enables or disables grid rendering.
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Checks the configuration and builds the engine it describes.
    ///
    /// # Errors
    /// - [`SessionError::BlankOutputName`] if the output name is blank.
    /// - [`SessionError::RailsOutOfRange`] if `rails` is outside
    ///   `MIN_RAILS..=MAX_RAILS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railfence::config::{Config, Operation};
    ///
    /// let fence = Config::new(Operation::Encode).validate().unwrap();
    /// assert_eq!(fence.rails().get(), 3);
    ///
    /// assert!(Config::new(Operation::Decode).with_output_name("  ").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<RailFence, SessionError> {
        if self.output_name.trim().is_empty() {
            return Err(SessionError::BlankOutputName);
        }
        if !(MIN_RAILS..=MAX_RAILS).contains(&self.rails) {
            return Err(SessionError::RailsOutOfRange {
                rails: self.rails,
                min: MIN_RAILS,
                max: MAX_RAILS,
            });
        }
        Ok(RailFence::new(self.rails)?)
    }
}
