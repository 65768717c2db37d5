//! # Pitch Classes and Spelling
//!
//! Note letters, accidentals, and the one table that maps the 12 pitch classes
//! to note names. Chord roots, slash basses, and key names are all spelled
//! from [`SHARP_SPELLINGS`] and [`FLAT_SPELLINGS`].
//!
//! ```text
//! semitone  0  1   2  3   4  5  6   7  8   9  10  11
//! sharps    C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! flats     C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Note letters C through B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Uppercase letters only; `H` and lowercase letters are not note names.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }

    /// Semitone offset of the natural note from C
    pub fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Sharp or flat. A natural note has no accidental (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    #[serde(rename = "#")]
    Sharp,
    #[serde(rename = "b")]
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Accidental::Sharp => '#',
            Accidental::Flat => 'b',
        }
    }

    pub fn offset(self) -> i32 {
        match self {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A note letter with an optional accidental, e.g. `C`, `F#`, `Bb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spelling {
    pub name: NoteName,
    pub accidental: Option<Accidental>,
}

impl Spelling {
    pub const fn new(name: NoteName, accidental: Option<Accidental>) -> Self {
        Self { name, accidental }
    }

    /// Pitch class in 0..=11 (so `B#` is 0 and `Cb` is 11)
    pub fn pitch_class(&self) -> u8 {
        pitch_class(self.name, self.accidental)
    }

    /// True if this spelling appears in either row of the spelling table.
    pub fn is_tabled(&self) -> bool {
        let pc = self.pitch_class() as usize;
        SHARP_SPELLINGS[pc] == *self || FLAT_SPELLINGS[pc] == *self
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(acc) = self.accidental {
            write!(f, "{}", acc)?;
        }
        Ok(())
    }
}

const fn natural(name: NoteName) -> Spelling {
    Spelling::new(name, None)
}

const fn sharp(name: NoteName) -> Spelling {
    Spelling::new(name, Some(Accidental::Sharp))
}

const fn flat(name: NoteName) -> Spelling {
    Spelling::new(name, Some(Accidental::Flat))
}

/// Pitch classes 0..=11 spelled with sharps
pub const SHARP_SPELLINGS: [Spelling; 12] = [
    natural(NoteName::C),
    sharp(NoteName::C),
    natural(NoteName::D),
    sharp(NoteName::D),
    natural(NoteName::E),
    natural(NoteName::F),
    sharp(NoteName::F),
    natural(NoteName::G),
    sharp(NoteName::G),
    natural(NoteName::A),
    sharp(NoteName::A),
    natural(NoteName::B),
];

/// Pitch classes 0..=11 spelled with flats
pub const FLAT_SPELLINGS: [Spelling; 12] = [
    natural(NoteName::C),
    flat(NoteName::D),
    natural(NoteName::D),
    flat(NoteName::E),
    natural(NoteName::E),
    natural(NoteName::F),
    flat(NoteName::G),
    natural(NoteName::G),
    flat(NoteName::A),
    natural(NoteName::A),
    flat(NoteName::B),
    natural(NoteName::B),
];

/// Floored modulo 12, so negative semitone counts wrap downwards.
pub fn wrap_semitone(semitone: i32) -> u8 {
    semitone.rem_euclid(12) as u8
}

pub fn pitch_class(name: NoteName, accidental: Option<Accidental>) -> u8 {
    let offset = accidental.map_or(0, Accidental::offset);
    wrap_semitone(name.semitone() as i32 + offset)
}

/// Spell a (possibly out-of-range) semitone from the sharp or flat row.
pub fn spell(semitone: i32, prefer_sharps: bool) -> Spelling {
    let row = if prefer_sharps {
        &SHARP_SPELLINGS
    } else {
        &FLAT_SPELLINGS
    };
    row[wrap_semitone(semitone) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_agree_on_pitch_class() {
        for pc in 0..12 {
            assert_eq!(SHARP_SPELLINGS[pc].pitch_class() as usize, pc);
            assert_eq!(FLAT_SPELLINGS[pc].pitch_class() as usize, pc);
        }
    }

    #[test]
    fn test_wrap_semitone_negative() {
        assert_eq!(wrap_semitone(-1), 11);
        assert_eq!(wrap_semitone(-12), 0);
        assert_eq!(wrap_semitone(-13), 11);
        assert_eq!(wrap_semitone(25), 1);
    }

    #[test]
    fn test_spell() {
        assert_eq!(spell(1, true).to_string(), "C#");
        assert_eq!(spell(1, false).to_string(), "Db");
        assert_eq!(spell(-2, false).to_string(), "Bb");
        assert_eq!(spell(14, true).to_string(), "D");
    }

    #[test]
    fn test_edge_accidentals_wrap() {
        assert_eq!(pitch_class(NoteName::C, Some(Accidental::Flat)), 11);
        assert_eq!(pitch_class(NoteName::B, Some(Accidental::Sharp)), 0);
    }

    #[test]
    fn test_is_tabled() {
        assert!(Spelling::new(NoteName::F, Some(Accidental::Sharp)).is_tabled());
        assert!(Spelling::new(NoteName::G, Some(Accidental::Flat)).is_tabled());
        assert!(!Spelling::new(NoteName::C, Some(Accidental::Flat)).is_tabled());
        assert!(!Spelling::new(NoteName::E, Some(Accidental::Sharp)).is_tabled());
    }
}
