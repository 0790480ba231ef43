//! Per-day presence histogram.
//!
//! # Buckets
//!
//! Buckets start at the opening hour and advance by whole hours while the
//! next hour stays at or before closing. A closing hour with a quarter-hour
//! remainder adds one final bucket at the closing hour itself:
//!
//! | Day | Opening | Buckets |
//! |-----|---------|---------|
//! | Monday..Saturday | 07:00-21:15 | 7, 8, .., 20, 21.25 |
//! | Sunday | 08:00-13:15 | 8, 9, .., 12, 13.25 |
//!
//! # Counting
//!
//! Each shift is walked from its start while below its end, by whole hours
//! until the fine-step hour and by quarter hours past it. Every position
//! that falls exactly on a bucket adds one to that bucket. Buckets are keyed
//! by quarter-hour index so that lookups are exact.

use std::collections::BTreeMap;

use crate::models::Interval;

use super::config::OpeningHours;

fn quarter_key(hour: f64) -> Option<i64> {
    let quarters = hour * 4.0;
    (quarters.fract() == 0.0).then_some(quarters as i64)
}

fn key_hour(key: i64) -> f64 {
    key as f64 / 4.0
}

/// Occupancy count per bucket for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceHistogram {
    buckets: BTreeMap<i64, usize>,
    fine_step_after_quarters: i64,
    open_quarters: i64,
}

impl PresenceHistogram {
    /// Creates an empty histogram for the given opening hours.
    pub fn new(hours: OpeningHours, fine_step_after: f64) -> Self {
        let mut buckets = BTreeMap::new();
        let mut h = hours.open;
        while h + 1.0 <= hours.close {
            if let Some(key) = quarter_key(h) {
                buckets.insert(key, 0);
            }
            h += 1.0;
        }
        if (hours.close.fract() * 100.0).round() == 25.0 {
            if let Some(key) = quarter_key(hours.close) {
                buckets.insert(key, 0);
            }
        }
        Self {
            buckets,
            fine_step_after_quarters: (fine_step_after * 4.0).floor() as i64,
            open_quarters: (hours.open * 4.0).floor() as i64,
        }
    }

    /// Bucket hours in ascending order.
    pub fn bucket_hours(&self) -> Vec<f64> {
        self.buckets.keys().map(|&k| key_hour(k)).collect()
    }

    /// Occupancy at a bucket, `None` when the hour is not a bucket.
    pub fn occupancy(&self, hour: f64) -> Option<usize> {
        quarter_key(hour).and_then(|key| self.buckets.get(&key).copied())
    }

    /// `(hour, occupancy)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.buckets.iter().map(|(&k, &count)| (key_hour(k), count))
    }

    /// Counts one shift. Degenerate shifts count nothing.
    pub fn add(&mut self, interval: &Interval) {
        if interval.is_degenerate() {
            return;
        }
        let Some(&last) = self.buckets.keys().next_back() else {
            return;
        };
        let last_hour = key_hour(last);
        let fine_step_after = key_hour(self.fine_step_after_quarters);

        let mut h = interval.start;
        // Positions before opening are never buckets; skip them in whole
        // hours so the fractional offset of the walk is kept.
        let open = key_hour(self.open_quarters);
        if h < open && open <= fine_step_after {
            h += (open - h).floor();
        }
        while h < interval.end && h <= last_hour {
            if let Some(count) = quarter_key(h).and_then(|key| self.buckets.get_mut(&key)) {
                *count += 1;
            }
            h += if h + 1.0 <= fine_step_after { 1.0 } else { 0.25 };
        }
    }

    /// Windows during which occupancy stays below `min_staff`.
    ///
    /// A window opens at the first bucket below the minimum and closes at
    /// the next bucket back at or above it, or at the last bucket of the
    /// day. Windows whose start and end bucket coincide are not reported.
    pub fn understaffed_windows(&self, min_staff: usize) -> Vec<(f64, f64)> {
        let mut windows = Vec::new();
        let Some(&last) = self.buckets.keys().next_back() else {
            return windows;
        };
        let mut start: Option<i64> = None;
        for (&key, &count) in &self.buckets {
            match start {
                None if count < min_staff => start = Some(key),
                Some(open) if count >= min_staff || key == last => {
                    if open != key {
                        windows.push((key_hour(open), key_hour(key)));
                    }
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(open) = start {
            if open != last {
                windows.push((key_hour(open), key_hour(last)));
            }
        }
        windows
    }
}
