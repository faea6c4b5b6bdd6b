//! In-memory leaderboard.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Player names mapped to cumulative scores.
///
/// Entries keep the order they were first inserted in; writing an existing
/// name replaces its score in place. Serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<(String, i64)>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`'s score, replacing any earlier one.
    pub fn insert(&mut self, name: impl Into<String>, score: i64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = score,
            None => self.entries.push((name, score)),
        }
    }

    /// Returns `name`'s score, if recorded.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, score)| *score)
    }

    /// Iterates over `(name, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Number of recorded players.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nobody has saved a score.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Leaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let mut leaderboard = Leaderboard::new();
        for (name, value) in object {
            let score = value.as_i64().ok_or_else(|| {
                D::Error::custom(format!("score for {name:?} is not an integer: {value}"))
            })?;
            leaderboard.insert(name, score);
        }
        Ok(leaderboard)
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leaderboard")?;
        for (name, score) in self.iter() {
            write!(f, "\n {name}: {score}")?;
        }
        Ok(())
    }
}
