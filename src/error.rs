//! # Error Types
//!
//! This module defines the error types for the chord engine.
//!
//! Nothing here is fatal. A chord that fails to parse is an ordinary value the
//! caller can skip, flag, or show to the user, and whole-line transposition
//! never surfaces these errors at all (unparseable tokens pass through as text).
//!
//! ## Error Types
//! - [`ChordParseError`] - A single chord symbol could not be parsed
//! - [`ChordLibreError`] - Failures at the API/document boundary (bad key names, bad JSON)
//!
//! ## Usage
//! ```rust
//! use chordlibre::{parse_chord, ChordParseError};
//!
//! match parse_chord("H7") {
//!     Ok(chord) => println!("Parsed {}", chord),
//!     Err(ChordParseError::Empty) => eprintln!("Nothing to parse"),
//!     Err(ChordParseError::NoMatch(text)) => eprintln!("Not a chord: {}", text),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordParseError {
    /// The chord string was blank after trimming.
    ///
    /// # Example
    /// ```
    /// # use chordlibre::ChordParseError;
    /// assert_eq!(ChordParseError::Empty.to_string(), "Chord string is empty");
    /// ```
    #[error("Chord string is empty")]
    Empty,

    /// The chord string does not follow the chord grammar.
    ///
    /// Carries the trimmed input for diagnostics.
    ///
    /// # Example
    /// ```
    /// # use chordlibre::ChordParseError;
    /// let err = ChordParseError::NoMatch("H7".to_string());
    /// assert_eq!(err.to_string(), "Could not parse chord: H7");
    /// ```
    #[error("Could not parse chord: {0}")]
    NoMatch(String),
}

#[derive(Error, Debug)]
pub enum ChordLibreError {
    /// A chord symbol handed to a single-chord entry point did not parse.
    #[error(transparent)]
    ChordParse(#[from] ChordParseError),

    /// Unknown or unsupported key name.
    ///
    /// # Example
    /// ```
    /// # use chordlibre::ChordLibreError;
    /// let err = ChordLibreError::InvalidKey("Cb".to_string());
    /// assert_eq!(err.to_string(), "Invalid key: Cb");
    /// ```
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The song document could not be encoded or decoded.
    #[error("Invalid song document: {0}")]
    Document(#[from] serde_json::Error),
}
