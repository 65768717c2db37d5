//! # Song Document
//!
//! The chordsheet shape the engine reads and returns.
//!
//! ## Type Hierarchy
//! ```text
//! ChordLibreSong
//!   ├── title, artist
//!   ├── key: MusicalKey
//!   ├── tempo, timeSignature, capo
//!   └── Vec<Section>
//!         ├── id: Uuid
//!         ├── label ("Verse 1", "Chorus", ...)
//!         └── Vec<Line>
//!               ├── id: Uuid
//!               ├── lyrics
//!               ├── chord: Option<Chord>
//!               └── chords: Option<String>   (space-delimited chord line)
//! ```
//!
//! ## JSON
//! Field names are camelCase (`timeSignature`), keys are short names
//! (`"Bbm"`), ids are hyphenated UUIDs. Absent optionals are left out when
//! writing and may be left out when reading. Writing is pretty-printed.

use crate::chord::Chord;
use crate::error::ChordLibreError;
use crate::key::MusicalKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A complete chordsheet with sections and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordLibreSong {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub key: MusicalKey,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capo: Option<u32>,
}

impl ChordLibreSong {
    /// An empty song in `key`
    pub fn new(title: impl Into<String>, key: MusicalKey) -> Self {
        Self {
            title: title.into(),
            artist: None,
            key,
            sections: Vec::new(),
            tempo: None,
            time_signature: None,
            capo: None,
        }
    }

    pub fn display_key(&self) -> MusicalKey {
        self.key
    }

    /// Every line of every section, in document order
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(|section| section.lines.iter())
    }

    /// Decode a song from its JSON document form.
    ///
    /// # Example
    /// ```
    /// use chordlibre::{ChordLibreSong, MusicalKey};
    ///
    /// let song = ChordLibreSong::from_json(r#"{"title": "Untitled", "key": "Eb"}"#)?;
    /// assert_eq!(song.key, MusicalKey::Eb);
    /// assert!(song.sections.is_empty());
    /// # Ok::<(), chordlibre::ChordLibreError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ChordLibreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the song as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ChordLibreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A section of a song (verse, chorus, bridge, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub label: String,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(label: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            lines,
        }
    }
}

/// One line of lyrics with its chords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: Uuid,
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord: Option<Chord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chords: Option<String>,
}

impl Line {
    pub fn new(lyrics: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            lyrics: lyrics.into(),
            chord: None,
            chords: None,
        }
    }

    pub fn with_chord(mut self, chord: Chord) -> Self {
        self.chord = Some(chord);
        self
    }

    /// Attach a space-delimited chord line such as `"C  G Am"`.
    pub fn with_chords(mut self, chords: impl Into<String>) -> Self {
        self.chords = Some(chords.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_chord;

    fn sample_song() -> ChordLibreSong {
        let mut song = ChordLibreSong::new("Amazing Grace", MusicalKey::G);
        song.artist = Some("John Newton".to_string());
        song.tempo = Some(72);
        song.time_signature = Some("3/4".to_string());
        song.capo = Some(2);
        song.sections = vec![Section::new(
            "Verse 1",
            vec![
                Line::new("Amazing grace, how sweet the sound")
                    .with_chord(parse_chord("G").unwrap())
                    .with_chords("G  C G"),
                Line::new("That saved a wretch like me"),
            ],
        )];
        song
    }

    #[test]
    fn test_json_round_trip() {
        let song = sample_song();
        let json = song.to_json().unwrap();
        assert_eq!(ChordLibreSong::from_json(&json).unwrap(), song);
    }

    #[test]
    fn test_json_field_names() {
        let song = sample_song();
        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["title"], "Amazing Grace");
        assert_eq!(value["artist"], "John Newton");
        assert_eq!(value["key"], "G");
        assert_eq!(value["tempo"], 72);
        assert_eq!(value["timeSignature"], "3/4");
        assert_eq!(value["capo"], 2);

        let section = &value["sections"][0];
        assert_eq!(section["label"], "Verse 1");
        assert_eq!(section["id"], song.sections[0].id.to_string());

        let line = &section["lines"][0];
        assert_eq!(line["lyrics"], "Amazing grace, how sweet the sound");
        assert_eq!(line["chord"]["root"], "G");
        assert_eq!(line["chords"], "G  C G");

        let bare = &section["lines"][1];
        assert!(bare.get("chord").is_none());
        assert!(bare.get("chords").is_none());
    }

    #[test]
    fn test_json_omits_absent_metadata() {
        let value = serde_json::to_value(ChordLibreSong::new("Untitled", MusicalKey::C)).unwrap();
        let fields: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(fields.len(), 3);
        for field in ["title", "key", "sections"] {
            assert!(fields.contains(&field), "missing {}", field);
        }

        let json = ChordLibreSong::new("Untitled", MusicalKey::C).to_json().unwrap();
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_decode_minimal_document() {
        let json = r#"{
            "title": "Sketch",
            "key": "F#m",
            "sections": [
                {
                    "id": "6f1c2a0e-7d7b-4c1e-9a51-3f0b7c9d2e11",
                    "label": "Intro",
                    "lines": [
                        {
                            "id": "0b8f5a7e-3c2d-4e6f-8a9b-1c2d3e4f5a6b",
                            "lyrics": "",
                            "chord": {"root": "B", "quality": "m", "ext": "7"}
                        }
                    ]
                }
            ]
        }"#;
        let song = ChordLibreSong::from_json(json).unwrap();
        assert_eq!(song.key, MusicalKey::Gbm);
        assert_eq!(song.artist, None);
        assert_eq!(song.capo, None);
        let line = song.lines().next().unwrap();
        assert_eq!(line.chord.as_ref().unwrap().to_string(), "Bm7");
        assert_eq!(line.chords, None);
    }

    #[test]
    fn test_decode_rejects_bad_key() {
        let err = ChordLibreSong::from_json(r#"{"title": "x", "key": "Cb"}"#).unwrap_err();
        assert!(matches!(err, ChordLibreError::Document(_)));
    }

    #[test]
    fn test_sections_get_distinct_ids() {
        let a = Section::new("Verse", Vec::new());
        let b = Section::new("Verse", Vec::new());
        assert_ne!(a.id, b.id);
    }
}
