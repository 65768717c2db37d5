//! Chord value type
//!
//! A [`Chord`] keeps the pieces of a chord symbol as written. Quality,
//! extension, and modifications stay free-form text so that any symbol the
//! parser accepts renders back byte-for-byte.

use crate::error::ChordParseError;
use crate::parser::parse_chord;
use crate::pitch::{Accidental, NoteName, Spelling};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed chord symbol such as `Dm7b5` or `C/G`
///
/// # Fields
/// - `root`: note letter, always one of C-B
/// - `accidental`: `#` or `b` on the root
/// - `quality`: `m`, `maj`, `dim`, `aug`, `+`, `sus2`, `sus4`, ...
/// - `extension`: whatever follows the quality (`7`, `7b5`, `9`, ...)
/// - `modifications`: part of the document schema; the parser leaves it empty
/// - `bass`: slash bass including its leading `/` (`/G`, `/F#`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: NoteName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accidental: Option<Accidental>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(
        rename = "ext",
        alias = "extension",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bass: Option<String>,
}

impl Chord {
    /// A plain major triad on `root`.
    pub fn new(root: NoteName) -> Self {
        Self {
            root,
            accidental: None,
            quality: None,
            extension: None,
            modifications: None,
            bass: None,
        }
    }

    pub fn with_accidental(mut self, accidental: Accidental) -> Self {
        self.accidental = Some(accidental);
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_modifications(mut self, modifications: impl Into<String>) -> Self {
        self.modifications = Some(modifications.into());
        self
    }

    /// Attach a slash bass note; the leading `/` is added here.
    pub fn with_bass(mut self, bass: Spelling) -> Self {
        self.bass = Some(format!("/{}", bass));
        self
    }

    /// Root letter plus accidental
    pub fn root_spelling(&self) -> Spelling {
        Spelling::new(self.root, self.accidental)
    }

    /// The chord as text: root, accidental, quality, extension,
    /// modifications, bass, with no separators.
    ///
    /// # Example
    /// ```
    /// use chordlibre::parse_chord;
    ///
    /// let chord = parse_chord("Dm7b5").unwrap();
    /// assert_eq!(chord.display_string(), "Dm7b5");
    /// ```
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root_spelling())?;
        for part in [
            &self.quality,
            &self.extension,
            &self.modifications,
            &self.bass,
        ]
        .into_iter()
        .flatten()
        {
            f.write_str(part)?;
        }
        Ok(())
    }
}

impl FromStr for Chord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chord(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let chord = Chord::new(NoteName::B)
            .with_accidental(Accidental::Flat)
            .with_quality("m")
            .with_extension("7")
            .with_modifications("add11")
            .with_bass(Spelling::new(NoteName::F, None));
        assert_eq!(chord.to_string(), "Bbm7add11/F");
    }

    #[test]
    fn test_display_bare_root() {
        assert_eq!(Chord::new(NoteName::E).display_string(), "E");
    }

    #[test]
    fn test_json_field_names() {
        let chord: Chord = "F#m7/C#".parse().unwrap();
        let json = serde_json::to_value(&chord).unwrap();
        assert_eq!(json["root"], "F");
        assert_eq!(json["accidental"], "#");
        assert_eq!(json["quality"], "m");
        assert_eq!(json["ext"], "7");
        assert_eq!(json["bass"], "/C#");
        assert!(json.get("modifications").is_none());
    }

    #[test]
    fn test_json_accepts_extension_alias() {
        let chord: Chord =
            serde_json::from_str(r#"{"root":"G","extension":"9"}"#).unwrap();
        assert_eq!(chord.to_string(), "G9");
    }
}
