// crates/domain/src/analytics/tally.rs
use std::collections::HashMap;

use letter_tally_shared_kernel::OccurrenceCount;

/// Case-folded character frequency counts over the aggregate text.
///
/// The backing map is unordered; display order is imposed separately by
/// [`crate::analytics::SortedFrequency`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTally {
    counts: HashMap<char, OccurrenceCount>,
}

impl FrequencyTally {
    /// Counts every character of `text`, lowercased. Characters whose
    /// lowercase form expands to several characters contribute one count
    /// per expanded character.
    pub fn of(text: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in text.chars().flat_map(char::to_lowercase) {
            counts.entry(ch).or_insert_with(OccurrenceCount::zero).increment();
        }
        Self { counts }
    }

    pub fn get(&self, ch: char) -> Option<OccurrenceCount> {
        self.counts.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted characters.
    pub fn total(&self) -> OccurrenceCount {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, OccurrenceCount)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }
}
