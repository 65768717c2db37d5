//! Previously performed keys
//!
//! A song remembers the keys it was performed in so a player can jump back to
//! one. The log keeps the newest [`MAX_PREVIOUS_KEYS`] entries. The engine
//! only produces the keys; whoever owns the song owns its history.

use crate::key::MusicalKey;
use bounded_vec_deque::BoundedVecDeque;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MAX_PREVIOUS_KEYS: usize = 20;

/// A key a song was performed in, and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousKey {
    pub key: MusicalKey,
    pub performed_at: DateTime<Utc>,
}

impl PreviousKey {
    pub fn new(key: MusicalKey, performed_at: DateTime<Utc>) -> Self {
        Self { key, performed_at }
    }
}

/// Oldest-first log of performed keys, serialized as a plain JSON array
#[derive(Debug)]
pub struct KeyHistory {
    entries: BoundedVecDeque<PreviousKey>,
}

impl KeyHistory {
    pub fn new() -> Self {
        Self {
            entries: BoundedVecDeque::new(MAX_PREVIOUS_KEYS),
        }
    }

    /// Append an entry; the oldest one falls off once the log is full.
    pub fn record(&mut self, key: MusicalKey, performed_at: DateTime<Utc>) {
        self.entries.push_back(PreviousKey::new(key, performed_at));
    }

    pub fn record_now(&mut self, key: MusicalKey) {
        self.record(key, Utc::now());
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PreviousKey> {
        self.entries.iter()
    }

    pub fn most_recent_first(&self) -> impl Iterator<Item = &PreviousKey> {
        self.entries.iter().rev()
    }

    pub fn latest(&self) -> Option<&PreviousKey> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeyHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for KeyHistory {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl PartialEq for KeyHistory {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for KeyHistory {}

impl FromIterator<PreviousKey> for KeyHistory {
    fn from_iter<I: IntoIterator<Item = PreviousKey>>(iter: I) -> Self {
        let mut history = Self::new();
        for entry in iter {
            history.record(entry.key, entry.performed_at);
        }
        history
    }
}

impl Serialize for KeyHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for KeyHistory {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let entries = Vec::<PreviousKey>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(minute: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 20, 0, 0).unwrap() + Duration::minutes(minute)
    }

    #[test]
    fn test_record_keeps_newest_twenty() {
        let mut history = KeyHistory::new();
        for i in 0..25 {
            history.record(MusicalKey::from_semitone(i, true), at(i as i64));
        }
        assert_eq!(history.len(), MAX_PREVIOUS_KEYS);
        assert_eq!(history.iter().next().unwrap().performed_at, at(5));
        assert_eq!(history.latest().unwrap().performed_at, at(24));
        assert_eq!(history.latest().unwrap().key, MusicalKey::C);
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut history = KeyHistory::new();
        history.record(MusicalKey::A, at(0));
        let mut copy = history.clone();
        assert_eq!(copy, history);
        for i in 1..=MAX_PREVIOUS_KEYS as i64 {
            copy.record(MusicalKey::D, at(i));
        }
        assert_eq!(copy.len(), MAX_PREVIOUS_KEYS);
        assert_eq!(copy.iter().next().unwrap().key, MusicalKey::D);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = KeyHistory::new();
        history.record(MusicalKey::C, at(0));
        history.record(MusicalKey::D, at(1));
        let keys: Vec<_> = history.most_recent_first().map(|e| e.key).collect();
        assert_eq!(keys, vec![MusicalKey::D, MusicalKey::C]);
    }

    #[test]
    fn test_json_shape() {
        let mut history = KeyHistory::new();
        history.record(MusicalKey::Bbm, at(0));
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json[0]["key"], "Bbm");
        assert_eq!(json[0]["performedAt"], "2025-03-01T20:00:00Z");

        let back: KeyHistory = serde_json::from_value(json).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn test_decode_trims_long_history() {
        let entries: Vec<_> = (0..30)
            .map(|i| PreviousKey::new(MusicalKey::E, at(i)))
            .collect();
        let json = serde_json::to_string(&entries).unwrap();
        let history: KeyHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), MAX_PREVIOUS_KEYS);
        assert_eq!(history.iter().next().unwrap().performed_at, at(10));
    }
}
