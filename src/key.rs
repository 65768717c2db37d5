//! # Musical Keys
//!
//! The 12 major and 12 minor keys a song can be written in. Each semitone has
//! exactly one key name per mode; black-key tonics use the flat row of the
//! spelling table (`Db`, `Eb`, `Gb`, `Ab`, `Bb`).
//!
//! Key names are read leniently: any tonic spelling found in the sharp or flat
//! row is accepted, so `"F#"` reads as [`MusicalKey::Gb`] and `"C#m"` as
//! [`MusicalKey::Dbm`]. Spellings outside the table (`Cb`, `E#`) are rejected.

use crate::error::ChordLibreError;
use crate::pitch::{wrap_semitone, Accidental, NoteName, Spelling, FLAT_SPELLINGS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MusicalKey {
    #[default]
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
    Cm,
    Dbm,
    Dm,
    Ebm,
    Em,
    Fm,
    Gbm,
    Gm,
    Abm,
    Am,
    Bbm,
    Bm,
}

use MusicalKey::*;

const MAJOR_KEYS: [MusicalKey; 12] = [C, Db, D, Eb, E, F, Gb, G, Ab, A, Bb, B];
const MINOR_KEYS: [MusicalKey; 12] = [Cm, Dbm, Dm, Ebm, Em, Fm, Gbm, Gm, Abm, Am, Bbm, Bm];

impl MusicalKey {
    /// All 24 keys, majors first, each mode ascending from C
    pub const ALL: [MusicalKey; 24] = [
        C, Db, D, Eb, E, F, Gb, G, Ab, A, Bb, B, Cm, Dbm, Dm, Ebm, Em, Fm, Gbm, Gm, Abm, Am, Bbm,
        Bm,
    ];

    /// Chromatic position of the tonic, 0 (C) to 11 (B)
    pub fn semitone_value(self) -> u8 {
        match self {
            C | Cm => 0,
            Db | Dbm => 1,
            D | Dm => 2,
            Eb | Ebm => 3,
            E | Em => 4,
            F | Fm => 5,
            Gb | Gbm => 6,
            G | Gm => 7,
            Ab | Abm => 8,
            A | Am => 9,
            Bb | Bbm => 10,
            B | Bm => 11,
        }
    }

    pub fn is_major(self) -> bool {
        MAJOR_KEYS.contains(&self)
    }

    /// Key for a semitone (wrapped into 0..=11) and mode.
    ///
    /// # Example
    /// ```
    /// use chordlibre::MusicalKey;
    ///
    /// assert_eq!(MusicalKey::from_semitone(7, true), MusicalKey::G);
    /// assert_eq!(MusicalKey::from_semitone(-3, false), MusicalKey::Am);
    /// ```
    pub fn from_semitone(semitone: i32, major: bool) -> Self {
        let keys = if major { &MAJOR_KEYS } else { &MINOR_KEYS };
        keys[wrap_semitone(semitone) as usize]
    }

    /// Canonical spelling of the tonic
    pub fn tonic(self) -> Spelling {
        FLAT_SPELLINGS[self.semitone_value() as usize]
    }

    /// Same key, other mode (C <-> Cm)
    pub fn with_mode(self, major: bool) -> Self {
        Self::from_semitone(self.semitone_value() as i32, major)
    }

    pub fn display_name(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MusicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tonic())?;
        if !self.is_major() {
            f.write_str("m")?;
        }
        Ok(())
    }
}

impl FromStr for MusicalKey {
    type Err = ChordLibreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChordLibreError::InvalidKey(s.to_string());
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        let name = chars
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(invalid)?;
        let mut rest = chars.as_str();
        let accidental = rest.chars().next().and_then(Accidental::from_char);
        if accidental.is_some() {
            rest = &rest[1..];
        }
        let major = match rest {
            "" => true,
            "m" => false,
            _ => return Err(invalid()),
        };

        let tonic = Spelling::new(name, accidental);
        if !tonic.is_tabled() {
            return Err(invalid());
        }
        Ok(Self::from_semitone(tonic.pitch_class() as i32, major))
    }
}

impl Serialize for MusicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MusicalKey {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitone_values_ascend() {
        for (i, key) in MAJOR_KEYS.iter().enumerate() {
            assert_eq!(key.semitone_value() as usize, i);
            assert!(key.is_major());
        }
        for (i, key) in MINOR_KEYS.iter().enumerate() {
            assert_eq!(key.semitone_value() as usize, i);
            assert!(!key.is_major());
        }
    }

    #[test]
    fn test_names_round_trip() {
        for key in MusicalKey::ALL {
            assert_eq!(key.to_string().parse::<MusicalKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_short_names() {
        assert_eq!(C.to_string(), "C");
        assert_eq!(Bbm.to_string(), "Bbm");
        assert_eq!(Gb.to_string(), "Gb");
        assert_eq!(Dbm.display_name(), "Dbm");
    }

    #[test]
    fn test_enharmonic_aliases() {
        assert_eq!("F#".parse::<MusicalKey>().unwrap(), Gb);
        assert_eq!("C#m".parse::<MusicalKey>().unwrap(), Dbm);
        assert_eq!("A#".parse::<MusicalKey>().unwrap(), Bb);
    }

    #[test]
    fn test_rejects_unknown_names() {
        for bad in ["", "Cb", "E#", "H", "c", "Cmaj", "Am7", "F##"] {
            assert!(bad.parse::<MusicalKey>().is_err(), "{} should not parse", bad);
        }
    }

    #[test]
    fn test_with_mode() {
        assert_eq!(A.with_mode(false), Am);
        assert_eq!(Ebm.with_mode(true), Eb);
    }

    #[test]
    fn test_serde_as_string() {
        assert_eq!(serde_json::to_string(&Abm).unwrap(), "\"Abm\"");
        let key: MusicalKey = serde_json::from_str("\"F#m\"").unwrap();
        assert_eq!(key, Gbm);
        assert!(serde_json::from_str::<MusicalKey>("\"X\"").is_err());
    }
}
