//! Session adapter: loads the input, runs the engine, saves the result.
//!
//! One [`run`] corresponds to one "apply" action of an interactive front
//! end. Configuration is validated before any input is read or the engine
//! is invoked.

use std::fs;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{Config, Operation};
use crate::error::SessionError;
use crate::visualize::{render_text, DECODE_TITLE, ENCODE_TITLE};

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text typed directly.
    Inline(String),
    /// A UTF-8 text file.
    File(PathBuf),
    /// Everything on standard input.
    Stdin,
}

impl Source {
    /// Reads the full input text.
    ///
    /// # Errors
    /// Returns [`SessionError::Read`] if the file or stream cannot be read
    /// or is not valid UTF-8.
    pub fn load(&self) -> Result<String, SessionError> {
        match self {
            Source::Inline(text) => Ok(text.clone()),
            Source::File(path) => {
                let text = fs::read_to_string(path).map_err(|e| SessionError::Read {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                info!(path = %path.display(), bytes = text.len(), "loaded input file");
                Ok(text)
            }
            Source::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| SessionError::Read {
                        path: PathBuf::from("<stdin>"),
                        message: e.to_string(),
                    })?;
                Ok(text)
            }
        }
    }
}

/// Result of one session run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The operation that was applied.
    pub operation: Operation,
    /// The loaded input text.
    pub input: String,
    /// The transformed text.
    pub output: String,
    /// Rendered rail grid, when requested.
    pub grid_text: Option<String>,
    /// File name the result is saved under.
    pub output_name: String,
}

impl Outcome {
    /// Writes the output text to `dir/output_name` and returns that path.
    ///
    /// # Errors
    /// Returns [`SessionError::Write`] if the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, SessionError> {
        let path = dir.join(&self.output_name);
        fs::write(&path, &self.output).map_err(|e| SessionError::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), bytes = self.output.len(), "saved result");
        Ok(path)
    }
}

/// Runs `config.operation` over the text from `source`.
///
/// # Errors
/// Configuration errors from [`Config::validate`], or a read failure from
/// [`Source::load`].
///
/// # Examples
///
/// ```
/// use railfence::config::{Config, Operation};
/// use railfence::session::{run, Source};
///
/// let config = Config::new(Operation::Encode).with_rails(2).with_grid(false);
/// let outcome = run(&config, &Source::Inline("HELLO".into())).unwrap();
/// assert_eq!(outcome.output, "HLOEL");
/// assert_eq!(outcome.output_name, "ciphertext.txt");
/// ```
pub fn run(config: &Config, source: &Source) -> Result<Outcome, SessionError> {
    let fence = config.validate()?;
    let input = source.load()?;
    let symbols: Vec<char> = input.chars().collect();

    let (transcription, title) = match config.operation {
        Operation::Encode => (fence.encode_with_grid(&symbols), ENCODE_TITLE),
        Operation::Decode => (fence.decode_with_grid(&symbols), DECODE_TITLE),
    };
    info!(
        operation = %config.operation,
        rails = fence.rails().get(),
        symbols = symbols.len(),
        "applied rail fence"
    );

    let grid_text = config
        .show_grid
        .then(|| render_text(&transcription.grid, title));

    Ok(Outcome {
        operation: config.operation,
        input,
        output: transcription.output.into_iter().collect(),
        grid_text,
        output_name: config.output_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_encode() {
        let config = Config::new(Operation::Encode);
        let outcome = run(
            &config,
            &Source::Inline("WEAREDISCOVEREDFLEEATONCE".to_string()),
        )
        .unwrap();
        assert_eq!(outcome.output, "WECRLTEERDSOEEFEAOCAIVDEN");
        assert_eq!(outcome.operation, Operation::Encode);
        assert!(outcome
            .grid_text
            .as_deref()
            .unwrap()
            .starts_with(ENCODE_TITLE));
    }

    #[test]
    fn test_inline_decode() {
        let config = Config::new(Operation::Decode);
        let outcome = run(
            &config,
            &Source::Inline("WECRLTEERDSOEEFEAOCAIVDEN".to_string()),
        )
        .unwrap();
        assert_eq!(outcome.output, "WEAREDISCOVEREDFLEEATONCE");
        assert_eq!(outcome.output_name, "plaintext.txt");
        assert!(outcome
            .grid_text
            .as_deref()
            .unwrap()
            .starts_with(DECODE_TITLE));
    }

    #[test]
    fn test_grid_disabled() {
        let config = Config::new(Operation::Encode).with_grid(false);
        let outcome = run(&config, &Source::Inline("abc".to_string())).unwrap();
        assert_eq!(outcome.grid_text, None);
    }

    #[test]
    fn test_blank_name_rejected_before_reading() {
        // The file does not exist; the name check must fire first.
        let config = Config::new(Operation::Encode).with_output_name("");
        let source = Source::File(PathBuf::from("/nonexistent/railfence/input.txt"));
        assert_eq!(run(&config, &source), Err(SessionError::BlankOutputName));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let config = Config::new(Operation::Encode);
        let path = PathBuf::from("/nonexistent/railfence/input.txt");
        match run(&config, &Source::File(path.clone())) {
            Err(SessionError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let config = Config::new(Operation::Decode);
        let outcome = run(&config, &Source::Inline(String::new())).unwrap();
        assert_eq!(outcome.output, "");
    }
}
