//! # ChordLibre chord engine
//!
//! Parses chord symbols (`Dm7b5`, `C/G`, `F#sus4`) and transposes chords,
//! chord lines, and whole chordsheets, picking sharp or flat spelling for
//! the target key.
//!
//! Everything here is a pure function over plain values: nothing is cached,
//! nothing is mutated in place, and every call is safe from any thread.
//!
//! ```rust
//! use chordlibre::{parse_chord, transpose_chord, transpose_chord_string};
//!
//! let chord = parse_chord("C/G")?;
//! assert_eq!(transpose_chord(&chord, 1, false).to_string(), "Db/Ab");
//! assert_eq!(transpose_chord_string("C G Am", 2, true), "D A Bm");
//! # Ok::<(), chordlibre::ChordParseError>(())
//! ```

pub mod api;
pub mod chord;
pub mod error;
pub mod history;
pub mod key;
pub mod parser;
pub mod pitch;
pub mod song;
pub mod transpose;

pub use api::{transpose_chord_symbol, transpose_song_json, transpose_song_json_to_key};
pub use chord::Chord;
pub use error::*;
pub use history::{KeyHistory, PreviousKey, MAX_PREVIOUS_KEYS};
pub use key::MusicalKey;
pub use parser::parse_chord;
pub use pitch::{Accidental, NoteName, Spelling};
pub use song::{ChordLibreSong, Line, Section};
pub use transpose::{
    semitones_between, should_prefer_sharps, transpose_chord, transpose_chord_string,
    transpose_note, transpose_song, transpose_song_to_key, Transposition,
};
