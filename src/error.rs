//! Error types for the railfence library.

use std::path::PathBuf;

/// Errors produced by the Rail Fence transform engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RailFenceError {
    /// Rail count is below the minimum of 2.
    #[error("rail count must be at least 2, got {rails}")]
    InvalidRailCount {
        /// The rejected rail count.
        rails: i64,
    },
}

/// Errors produced by the session adapter around the transform engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The output file name is empty or whitespace only.
    #[error("output file name must not be blank")]
    BlankOutputName,
    /// Rail count is outside the range accepted by the interactive front end.
    #[error("rail count {rails} is outside the accepted range [{min}, {max}]")]
    RailsOutOfRange {
        /// The rejected rail count.
        rails: i64,
        /// Smallest accepted rail count.
        min: i64,
        /// Largest accepted rail count.
        max: i64,
    },
    /// The input text could not be loaded.
    #[error("failed to read {}: {message}", .path.display())]
    Read {
        /// Source that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        message: String,
    },
    /// The result could not be written.
    #[error("failed to write {}: {message}", .path.display())]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        message: String,
    },
    /// The transform engine rejected its parameters.
    #[error(transparent)]
    Cipher(#[from] RailFenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_rail_count() {
        let err = RailFenceError::InvalidRailCount { rails: 1 };
        assert_eq!(format!("{}", err), "rail count must be at least 2, got 1");
    }

    #[test]
    fn test_display_negative_rail_count() {
        let err = RailFenceError::InvalidRailCount { rails: -1 };
        assert_eq!(format!("{}", err), "rail count must be at least 2, got -1");
    }

    #[test]
    fn test_display_blank_output_name() {
        assert_eq!(
            format!("{}", SessionError::BlankOutputName),
            "output file name must not be blank"
        );
    }

    #[test]
    fn test_display_rails_out_of_range() {
        let err = SessionError::RailsOutOfRange {
            rails: 101,
            min: 2,
            max: 100,
        };
        assert_eq!(
            format!("{}", err),
            "rail count 101 is outside the accepted range [2, 100]"
        );
    }

    #[test]
    fn test_display_read_failure() {
        let err = SessionError::Read {
            path: PathBuf::from("missing.txt"),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "failed to read missing.txt: No such file or directory"
        );
    }

    #[test]
    fn test_cipher_error_is_transparent() {
        let err: SessionError = RailFenceError::InvalidRailCount { rails: 0 }.into();
        assert_eq!(format!("{}", err), "rail count must be at least 2, got 0");
        assert_eq!(
            err,
            SessionError::Cipher(RailFenceError::InvalidRailCount { rails: 0 })
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            RailFenceError::InvalidRailCount { rails: 1 },
            RailFenceError::InvalidRailCount { rails: 1 }
        );
        assert_ne!(
            RailFenceError::InvalidRailCount { rails: 1 },
            RailFenceError::InvalidRailCount { rails: 0 }
        );
    }
}
