// crates/shared-kernel/src/value_objects/occurrence.rs
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// How many times a character occurred in the aggregate text.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceCount(u64);

impl OccurrenceCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self(1)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Counts saturate rather than wrap; an input large enough to hit
    /// `u64::MAX` is out of scope but must not corrupt the tally.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

// Formats as the bare number so frequency mappings render as `{'a': 4}`.
impl fmt::Debug for OccurrenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OccurrenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for OccurrenceCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for OccurrenceCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for OccurrenceCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl From<u64> for OccurrenceCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<OccurrenceCount> for u64 {
    fn from(value: OccurrenceCount) -> Self {
        value.0
    }
}

impl Sum for OccurrenceCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a OccurrenceCount> for OccurrenceCount {
    fn sum<I: Iterator<Item = &'a OccurrenceCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
