//! # Chord Symbol Parser
//!
//! Scans a chord symbol into a [`Chord`].
//!
//! ## Grammar
//! ```text
//! chord  = ROOT ACCIDENTAL? BODY ( "/" ROOT ACCIDENTAL? )?
//! ROOT   = "A" | "B" | "C" | "D" | "E" | "F" | "G"
//! ACCIDENTAL = "#" | "b"
//! BODY   = any text up to the first "/" (may be empty)
//! ```
//!
//! Spaces and tabs around the input are trimmed first; line breaks are not
//! whitespace here and stay part of the symbol. After a `/` there must be exactly one note
//! letter and at most one accidental, then the end of the input.
//!
//! ## Quality / Extension Split
//! `BODY` is split by the first matching prefix:
//!
//! | Prefix          | Quality         | Extension   |
//! |-----------------|-----------------|-------------|
//! | `maj`           | `maj`           | remainder   |
//! | `m`             | `m`             | remainder   |
//! | `dim`           | `dim`           | remainder   |
//! | `aug` / `+`     | `aug` / `+`     | remainder   |
//! | `sus`           | first 4 chars   | remainder   |
//! | anything else   | none            | whole body  |
//!
//! `maj` is tested before `m`, so `Cmaj7` is a major seventh and `Cm7` a
//! minor seventh. `sus` takes four characters whatever the fourth one is.
//! Modifications such as `b5` or `add9` stay inside the extension.

use crate::chord::Chord;
use crate::error::ChordParseError;
use crate::pitch::{Accidental, NoteName, Spelling};

/// Parse a chord symbol such as `"Dm7b5"`, `"C/G"` or `"F#sus4"`.
///
/// # Example
/// ```
/// use chordlibre::{parse_chord, NoteName};
///
/// let chord = parse_chord("F#sus4")?;
/// assert_eq!(chord.root, NoteName::F);
/// assert_eq!(chord.quality.as_deref(), Some("sus4"));
/// assert_eq!(chord.to_string(), "F#sus4");
/// # Ok::<(), chordlibre::ChordParseError>(())
/// ```
///
/// # Errors
/// - [`ChordParseError::Empty`] for blank input
/// - [`ChordParseError::NoMatch`] when the text is not a chord symbol
pub fn parse_chord(input: &str) -> Result<Chord, ChordParseError> {
    let trimmed = trim_blanks(input);
    if trimmed.is_empty() {
        return Err(ChordParseError::Empty);
    }
    let no_match = || ChordParseError::NoMatch(trimmed.to_string());

    let mut chars = trimmed.chars();
    let root = chars
        .next()
        .and_then(NoteName::from_char)
        .ok_or_else(no_match)?;

    let mut rest = chars.as_str();
    let accidental = rest.chars().next().and_then(Accidental::from_char);
    if accidental.is_some() {
        // '#' and 'b' are both single-byte
        rest = &rest[1..];
    }

    let (body, bass) = match rest.split_once('/') {
        Some((body, bass_text)) => (body, Some(parse_bass(bass_text).ok_or_else(no_match)?)),
        None => (rest, None),
    };

    let (quality, extension) = split_quality(body);

    Ok(Chord {
        root,
        accidental,
        quality,
        extension,
        modifications: None,
        bass,
    })
}

/// Trim spaces, tabs, and other same-line blanks, keeping line breaks.
pub(crate) fn trim_blanks(text: &str) -> &str {
    text.trim_matches(|c: char| match c {
        '\t' => true,
        '\u{2028}' | '\u{2029}' => false,
        _ => c.is_whitespace() && !c.is_control(),
    })
}

/// Parse the text after `/`; returns the bass with its `/` restored.
fn parse_bass(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let name = chars.next().and_then(NoteName::from_char)?;
    let accidental = match chars.next() {
        Some(c) => Some(Accidental::from_char(c)?),
        None => None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some(format!("/{}", Spelling::new(name, accidental)))
}

fn split_quality(body: &str) -> (Option<String>, Option<String>) {
    if body.is_empty() {
        return (None, None);
    }

    let (quality, rest) = if let Some(rest) = body.strip_prefix("maj") {
        ("maj", rest)
    } else if let Some(rest) = body.strip_prefix('m') {
        ("m", rest)
    } else if let Some(rest) = body.strip_prefix("dim") {
        ("dim", rest)
    } else if let Some(rest) = body.strip_prefix("aug") {
        ("aug", rest)
    } else if let Some(rest) = body.strip_prefix('+') {
        ("+", rest)
    } else if body.starts_with("sus") {
        match body.char_indices().nth(4) {
            Some((idx, _)) => body.split_at(idx),
            None => (body, ""),
        }
    } else {
        return (None, Some(body.to_string()));
    };

    let extension = if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    };
    (Some(quality.to_string()), extension)
}
