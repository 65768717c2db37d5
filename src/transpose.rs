//! # Transposition
//!
//! Moves chords, chord lines, and whole songs by a signed number of semitones.
//!
//! ## Spelling
//! After transposing, notes are re-spelled from the sharp or flat row of the
//! pitch table. For songs the row is picked by the *target* key's semitone
//! (see [`should_prefer_sharps`]); single-chord calls take it as an argument.
//!
//! ## Failure Handling
//! Nothing here returns an error. In a chord line, tokens that are not chords
//! (`N.C.`, `x2`, lyrics that slipped in) are kept as written while the rest
//! of the line moves.

use crate::chord::Chord;
use crate::key::MusicalKey;
use crate::parser::{parse_chord, trim_blanks};
use crate::pitch::{spell, wrap_semitone, Accidental, NoteName, Spelling};
use crate::song::{ChordLibreSong, Line, Section};

/// Target semitones whose keys are written with sharps: G D A E B F#
const SHARP_KEY_SEMITONES: [u8; 6] = [7, 2, 9, 4, 11, 6];

/// Transpose a single note and re-spell it.
///
/// # Example
/// ```
/// use chordlibre::{transpose_note, NoteName};
///
/// let up = transpose_note(NoteName::C, None, 1, true);
/// assert_eq!(up.to_string(), "C#");
/// let down = transpose_note(NoteName::C, None, -2, false);
/// assert_eq!(down.to_string(), "Bb");
/// ```
pub fn transpose_note(
    root: NoteName,
    accidental: Option<Accidental>,
    semitones: i32,
    prefer_sharps: bool,
) -> Spelling {
    let current = Spelling::new(root, accidental).pitch_class() as i32;
    spell(current + semitones.rem_euclid(12), prefer_sharps)
}

/// Transpose a chord's root and slash bass. Quality, extension, and
/// modifications are carried over untouched.
pub fn transpose_chord(chord: &Chord, semitones: i32, prefer_sharps: bool) -> Chord {
    let root = transpose_note(chord.root, chord.accidental, semitones, prefer_sharps);

    Chord {
        root: root.name,
        accidental: root.accidental,
        quality: chord.quality.clone(),
        extension: chord.extension.clone(),
        modifications: chord.modifications.clone(),
        bass: chord
            .bass
            .as_deref()
            .map(|bass| transpose_bass(bass, semitones, prefer_sharps)),
    }
}

/// Transpose a pre-formatted bass such as `"/F#"`. Text that does not start
/// with `/` and a note letter comes back unchanged.
fn transpose_bass(bass: &str, semitones: i32, prefer_sharps: bool) -> String {
    let Some(note) = bass.strip_prefix('/') else {
        return bass.to_string();
    };
    let mut chars = note.chars();
    let Some(name) = chars.next().and_then(NoteName::from_char) else {
        return bass.to_string();
    };
    let accidental = chars.next().and_then(Accidental::from_char);

    format!("/{}", transpose_note(name, accidental, semitones, prefer_sharps))
}

/// Transpose every chord in a space-delimited chord line.
///
/// The line is split on single spaces and rejoined with single spaces, so
/// runs of spaces (used to line chords up over lyrics) survive unchanged.
/// Tokens that don't parse as chords are kept as they are.
///
/// # Example
/// ```
/// use chordlibre::transpose_chord_string;
///
/// assert_eq!(transpose_chord_string("C G Am", 2, true), "D A Bm");
/// assert_eq!(transpose_chord_string("C  xyz G", 1, true), "C#  xyz G#");
/// ```
pub fn transpose_chord_string(input: &str, semitones: i32, prefer_sharps: bool) -> String {
    input
        .split(' ')
        .map(|token| {
            let trimmed = trim_blanks(token);
            if trimmed.is_empty() {
                return token.to_string();
            }
            match parse_chord(trimmed) {
                Ok(chord) => transpose_chord(&chord, semitones, prefer_sharps).to_string(),
                Err(err) => {
                    log::trace!("keeping token as text: {}", err);
                    trimmed.to_string()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a key on this semitone is written with sharps.
///
/// Sharp side: G D A E B and F# (semitone 6 goes to the sharp side).
/// Everything else, including C, is spelled with flats.
pub fn should_prefer_sharps(target_semitone: i32) -> bool {
    (0..12).contains(&target_semitone)
        && SHARP_KEY_SEMITONES.contains(&(target_semitone as u8))
}

/// Transpose a whole song.
///
/// The key moves to the new semitone and keeps its mode. Chord lines and
/// per-line chords are transposed with the spelling of the new key. Titles,
/// labels, lyrics, ids, and the rest of the metadata are copied.
///
/// # Example
/// ```
/// use chordlibre::{transpose_song, ChordLibreSong, Line, MusicalKey, Section};
///
/// let mut song = ChordLibreSong::new("Demo", MusicalKey::C);
/// song.sections.push(Section::new("Verse", vec![Line::new("la la").with_chords("C F G")]));
///
/// let up = transpose_song(&song, 7);
/// assert_eq!(up.key, MusicalKey::G);
/// assert_eq!(up.sections[0].lines[0].chords.as_deref(), Some("G C D"));
/// assert_eq!(song.key, MusicalKey::C);
/// ```
pub fn transpose_song(song: &ChordLibreSong, semitones: i32) -> ChordLibreSong {
    let new_semitone =
        wrap_semitone(song.key.semitone_value() as i32 + semitones.rem_euclid(12));
    let prefer_sharps = should_prefer_sharps(new_semitone as i32);
    let new_key = MusicalKey::from_semitone(new_semitone as i32, song.key.is_major());

    log::debug!(
        "transposing '{}' by {} semitones: {} -> {} ({})",
        song.title,
        semitones,
        song.key,
        new_key,
        if prefer_sharps { "sharps" } else { "flats" }
    );

    let sections = song
        .sections
        .iter()
        .map(|section| Section {
            id: section.id,
            label: section.label.clone(),
            lines: section
                .lines
                .iter()
                .map(|line| transpose_line(line, semitones, prefer_sharps))
                .collect(),
        })
        .collect();

    ChordLibreSong {
        key: new_key,
        sections,
        ..song.clone()
    }
}

fn transpose_line(line: &Line, semitones: i32, prefer_sharps: bool) -> Line {
    let chords = match line.chords.as_deref() {
        Some(chords) if !chords.is_empty() => {
            Some(transpose_chord_string(chords, semitones, prefer_sharps))
        }
        other => other.map(str::to_string),
    };

    Line {
        id: line.id,
        lyrics: line.lyrics.clone(),
        chord: line
            .chord
            .as_ref()
            .map(|chord| transpose_chord(chord, semitones, prefer_sharps)),
        chords,
    }
}

/// Upward distance from one key's tonic to another's, in 0..=11.
///
/// ```
/// use chordlibre::{semitones_between, MusicalKey};
///
/// assert_eq!(semitones_between(MusicalKey::C, MusicalKey::G), 7);
/// assert_eq!(semitones_between(MusicalKey::G, MusicalKey::C), 5);
/// ```
pub fn semitones_between(from: MusicalKey, to: MusicalKey) -> i32 {
    wrap_semitone(to.semitone_value() as i32 - from.semitone_value() as i32) as i32
}

/// Transpose a song so its tonic lands on `target`'s tonic. The song keeps
/// its own mode.
pub fn transpose_song_to_key(song: &ChordLibreSong, target: MusicalKey) -> ChordLibreSong {
    transpose_song(song, semitones_between(song.key, target))
}

/// The running offset a player applies to a song.
///
/// Each step is applied to the original song, never to an already transposed
/// copy, so going up five times and down five times gives back the original
/// chord spellings. The offset is kept within one octave (-11..=11) and keeps
/// its sign, so a player can show "-2" after two steps down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transposition {
    offset: i32,
}

impl Transposition {
    pub fn new(offset: i32) -> Self {
        Self {
            offset: offset % 12,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn up(&mut self) {
        self.offset = (self.offset + 1) % 12;
    }

    pub fn down(&mut self) {
        self.offset = (self.offset - 1) % 12;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Jump to the offset that puts `original_key` on `target`.
    pub fn toward_key(&mut self, original_key: MusicalKey, target: MusicalKey) {
        self.offset = semitones_between(original_key, target);
    }

    /// True when the offset is a whole number of octaves.
    pub fn is_identity(&self) -> bool {
        wrap_semitone(self.offset) == 0
    }

    /// Key `original` would be shown in
    pub fn key_for(&self, original: &ChordLibreSong) -> MusicalKey {
        MusicalKey::from_semitone(
            original.key.semitone_value() as i32 + self.offset,
            original.key.is_major(),
        )
    }

    pub fn apply(&self, original: &ChordLibreSong) -> ChordLibreSong {
        if self.is_identity() {
            return original.clone();
        }
        transpose_song(original, self.offset)
    }
}
