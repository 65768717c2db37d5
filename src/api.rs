//! # Public API
//!
//! String-in, string-out entry points for callers that hold chords and songs
//! as text (an editor, an importer, the `chordlibre` binary).
//!
//! ## Functions
//!
//! - [`transpose_chord_symbol()`] - One chord symbol; reports parse errors
//! - [`transpose_song_json()`] - A JSON song document by a semitone offset
//! - [`transpose_song_json_to_key()`] - A JSON song document into a named key
//!
//! For chord lines (`"C  G Am"`), which never fail, use
//! [`transpose_chord_string`](crate::transpose_chord_string) directly.
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordlibre::transpose_song_json;
//!
//! let json = r#"{
//!   "title": "Sketch",
//!   "key": "C",
//!   "sections": [{
//!     "id": "6f1c2a0e-7d7b-4c1e-9a51-3f0b7c9d2e11",
//!     "label": "Verse",
//!     "lines": [{
//!       "id": "0b8f5a7e-3c2d-4e6f-8a9b-1c2d3e4f5a6b",
//!       "lyrics": "Hello",
//!       "chords": "C Am"
//!     }]
//!   }]
//! }"#;
//!
//! let moved = transpose_song_json(json, 2)?;
//! assert!(moved.contains("\"key\": \"D\""));
//! assert!(moved.contains("\"chords\": \"D Bm\""));
//! # Ok::<(), chordlibre::ChordLibreError>(())
//! ```

use crate::{
    parse_chord, transpose_chord, transpose_song, transpose_song_to_key, ChordLibreError,
    ChordLibreSong, MusicalKey,
};

/// Parse, transpose, and render a single chord symbol.
///
/// # Example
/// ```rust
/// use chordlibre::transpose_chord_symbol;
///
/// assert_eq!(transpose_chord_symbol("Bb7/D", 2, true)?, "C7/E");
/// assert!(transpose_chord_symbol("Q7", 2, true).is_err());
/// # Ok::<(), chordlibre::ChordLibreError>(())
/// ```
///
/// # Errors
/// Returns [`ChordLibreError::ChordParse`] if `symbol` is not a chord.
pub fn transpose_chord_symbol(
    symbol: &str,
    semitones: i32,
    prefer_sharps: bool,
) -> Result<String, ChordLibreError> {
    let chord = parse_chord(symbol)?;
    Ok(transpose_chord(&chord, semitones, prefer_sharps).to_string())
}

/// Decode a song, transpose it by `semitones`, and encode it again.
///
/// # Errors
/// Returns [`ChordLibreError::Document`] if `json` is not a song document.
pub fn transpose_song_json(json: &str, semitones: i32) -> Result<String, ChordLibreError> {
    let song = ChordLibreSong::from_json(json)?;
    transpose_song(&song, semitones).to_json()
}

/// Decode a song, move it into `key` (e.g. `"Bb"`, `"F#"`), and encode it.
///
/// The song keeps its own mode; only the tonic of `key` is used.
///
/// # Errors
/// - [`ChordLibreError::InvalidKey`] if `key` is not a key name
/// - [`ChordLibreError::Document`] if `json` is not a song document
pub fn transpose_song_json_to_key(json: &str, key: &str) -> Result<String, ChordLibreError> {
    let target: MusicalKey = key.parse()?;
    let song = ChordLibreSong::from_json(json)?;
    transpose_song_to_key(&song, target).to_json()
}
