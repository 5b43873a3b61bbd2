use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

pub type Position = usize;

/// Word -> positions mapping used by OpenAlex to ship abstracts.
///
/// Entries keep the order in which they were listed, so when two words claim
/// the same position the later entry wins. Deserializing from a `serde_json::Value`
/// instead of raw text loses that order (its maps are sorted by key).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbstractIndex {
    entries: Vec<(String, Vec<Position>)>,
    dropped_positions: usize,
}

impl AbstractIndex {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, word: impl Into<String>, positions: Vec<Position>) {
        self.entries.push((word.into(), positions));
    }

    pub fn entries(&self) -> &[(String, Vec<Position>)] { &self.entries }

    /// True when there are no words at all (positions are not inspected).
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Number of position values skipped while decoding: not non-negative integers, or too large to address.
    pub fn dropped_positions(&self) -> usize { self.dropped_positions }

    pub fn max_position(&self) -> Option<Position> {
        self.entries.iter().flat_map(|(_, p)| p.iter().copied()).max()
    }
}

impl<W: Into<String>> FromIterator<(W, Vec<Position>)> for AbstractIndex {
    fn from_iter<I: IntoIterator<Item = (W, Vec<Position>)>>(iter: I) -> Self {
        let mut index = AbstractIndex::new();
        for (word, positions) in iter {
            index.insert(word, positions);
        }
        index
    }
}

impl<'de> Deserialize<'de> for AbstractIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(IndexVisitor)
    }
}

struct IndexVisitor;

impl<'de> Visitor<'de> for IndexVisitor {
    type Value = AbstractIndex;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of words to position lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut index = AbstractIndex::new();
        while let Some((word, raw)) = map.next_entry::<String, Value>()? {
            let items = match raw {
                Value::Array(items) => items,
                _ => {
                    index.dropped_positions += 1;
                    continue;
                }
            };
            let mut positions = Vec::with_capacity(items.len());
            for item in items {
                let pos = item
                    .as_u64()
                    .and_then(|p| Position::try_from(p).ok())
                    .filter(|p| p.checked_add(1).is_some());
                match pos {
                    Some(p) => positions.push(p),
                    None => index.dropped_positions += 1,
                }
            }
            index.entries.push((word, positions));
        }
        Ok(index)
    }
}

/// Rebuild the abstract text by placing every word at each of its positions.
///
/// All slots are joined with a single space, including slots nobody claimed,
/// so a gap in the positions shows up as a doubled space. A position too large
/// to allocate slots for yields an empty string.
pub fn reconstruct_abstract(index: &AbstractIndex) -> String {
    let Some(len) = index.max_position().and_then(|max| max.checked_add(1)) else { return String::new(); };
    let mut slots: Vec<&str> = Vec::new();
    if slots.try_reserve_exact(len).is_err() {
        tracing::warn!(len, "abstract index too large to rebuild");
        return String::new();
    }
    slots.resize(len, "");
    for (word, positions) in index.entries() {
        for &pos in positions {
            slots[pos] = word.as_str();
        }
    }
    slots.join(" ")
}

/// `None` for a missing or empty index, or one that rebuilds to nothing.
pub fn decode_abstract(index: Option<&AbstractIndex>) -> Option<String> {
    let index = index.filter(|i| !i.is_empty())?;
    let text = reconstruct_abstract(index);
    if text.is_empty() { None } else { Some(text) }
}
