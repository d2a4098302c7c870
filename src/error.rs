//! Error types shared by the three demo programs.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a demo before (or while) its window is up.
///
/// Startup input errors carry the exact diagnostic printed to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading stdin or a JSON file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON config or scene file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard input ended before a required value was read.
    #[error("Missing input: expected {what}")]
    MissingInput {
        /// What the program was waiting for.
        what: &'static str,
    },

    /// A token could not be parsed as the expected value.
    #[error("Invalid {what}: {token:?}")]
    InvalidInput {
        /// What the program was waiting for.
        what: &'static str,
        /// The offending token.
        token: String,
    },

    /// Thick-line width outside `1..=MAX_WIDTH`.
    #[error("Invalid line width: {0} (expected 1 to 1000)")]
    InvalidWidth(i64),

    /// Thick-line endpoint coordinate outside `-MAX_COORD..=MAX_COORD`.
    #[error("Coordinate {0} out of range (expected -5000 to 5000)")]
    CoordinateOutOfRange(i32),

    #[error("Invalid clipping window input.")]
    InvalidClipWindow,

    #[error("Invalid number of lines.")]
    InvalidLineCount,

    /// Endpoints of the n-th line (1-based) were malformed.
    #[error("Invalid input for line {0}.")]
    InvalidLine(usize),

    #[error("Memory allocation failed.")]
    Allocation,

    /// A config value outside its allowed range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// SDL2 reports its failures as strings.
    #[error("SDL error: {0}")]
    Sdl(String),
}

impl Error {
    /// Wrap any SDL2 error value.
    pub fn sdl(err: impl ToString) -> Self {
        Self::Sdl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipping_diagnostics_match_prompts() {
        assert_eq!(Error::InvalidClipWindow.to_string(), "Invalid clipping window input.");
        assert_eq!(Error::InvalidLineCount.to_string(), "Invalid number of lines.");
        assert_eq!(Error::InvalidLine(3).to_string(), "Invalid input for line 3.");
        assert_eq!(Error::Allocation.to_string(), "Memory allocation failed.");
    }

    #[test]
    fn test_invalid_input_names_token() {
        let err = Error::InvalidInput {
            what: "x1",
            token: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("x1"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_sdl_wraps_string() {
        let err = Error::sdl("No available video device");
        assert!(matches!(err, Error::Sdl(ref s) if s == "No available video device"));
    }
}
