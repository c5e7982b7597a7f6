// crates/domain/src/analytics/sort.rs
use std::collections::BTreeMap;
use std::fmt;

use letter_tally_shared_kernel::OccurrenceCount;
use serde::Serialize;

use crate::analytics::FrequencyTally;

/// A frequency mapping re-emitted in ascending code-point order.
///
/// Holds the exact key/value pairs of the tally it was built from; only the
/// iteration order differs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortedFrequency {
    entries: BTreeMap<char, OccurrenceCount>,
}

impl SortedFrequency {
    pub fn get(&self, ch: char) -> Option<OccurrenceCount> {
        self.entries.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, OccurrenceCount)> + '_ {
        self.entries.iter().map(|(&ch, &count)| (ch, count))
    }
}

impl From<&FrequencyTally> for SortedFrequency {
    fn from(tally: &FrequencyTally) -> Self {
        Self { entries: tally.iter().collect() }
    }
}

impl FromIterator<(char, OccurrenceCount)> for SortedFrequency {
    fn from_iter<I: IntoIterator<Item = (char, OccurrenceCount)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Renders like a debug-printed map, e.g. `{'!': 1, 'a': 4}`.
impl fmt::Display for SortedFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_come_out_in_code_point_order() {
        let sorted = SortedFrequency::from(&FrequencyTally::of("cba!"));
        let keys: Vec<char> = sorted.iter().map(|(ch, _)| ch).collect();
        assert_eq!(keys, vec!['!', 'a', 'b', 'c']);
    }

    #[test]
    fn sorting_preserves_the_key_set_and_counts() {
        let tally = FrequencyTally::of("Mississippi");
        let sorted = SortedFrequency::from(&tally);
        assert_eq!(sorted.len(), tally.len());
        for (ch, count) in tally.iter() {
            assert_eq!(sorted.get(ch), Some(count));
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let sorted = SortedFrequency::from(&FrequencyTally::of("AaAa!"));
        let resorted: SortedFrequency = sorted.iter().collect();
        assert_eq!(resorted, sorted);
    }

    #[test]
    fn displays_like_a_debug_map() {
        let sorted = SortedFrequency::from(&FrequencyTally::of("AaAa!"));
        assert_eq!(sorted.to_string(), "{'!': 1, 'a': 4}");
    }

    #[test]
    fn empty_tally_displays_as_empty_braces() {
        let sorted = SortedFrequency::from(&FrequencyTally::of(""));
        assert_eq!(sorted.to_string(), "{}");
    }
}
