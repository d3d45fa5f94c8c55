//! Month bucketing of resolved dates
//!
//! Groups dates by `(year, month)` with a count per bucket. Bucketing is
//! order-independent, so the unspecified enumeration order of the resolver
//! never shows up in the output.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

/// Bucket key: calendar year and month (1-12)
pub type Month = (i32, u32);

/// Histogram of dates bucketed by calendar month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    buckets: BTreeMap<Month, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, date: NaiveDate) {
        *self
            .buckets
            .entry((date.year(), date.month()))
            .or_insert(0) += 1;
    }

    /// Buckets in chronological order
    pub fn buckets(&self) -> impl Iterator<Item = (Month, usize)> + '_ {
        self.buckets.iter().map(|(&month, &count)| (month, count))
    }

    /// Total number of dates added
    pub fn total(&self) -> usize {
        self.buckets.values().sum()
    }

    /// Largest single bucket count, 0 when empty
    pub fn max_count(&self) -> usize {
        self.buckets.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Earliest and latest bucket, `None` when empty
    pub fn span(&self) -> Option<(Month, Month)> {
        let first = *self.buckets.keys().next()?;
        let last = *self.buckets.keys().next_back()?;
        Some((first, last))
    }
}

impl FromIterator<NaiveDate> for Histogram {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut hist = Self::new();
        for date in iter {
            hist.add(date);
        }
        hist
    }
}
