//! Core metrics abstractions and utilities
//!
//! This module provides the foundational types for metrics collection: the
//! containers that hold one instrument handle per label combination, and a
//! RAII timing guard for latency histograms.

use std::time::Instant;

use metrics::Histogram;

/// One instrument handle per value of a single label dimension.
///
/// Handles are materialized once at registry construction; recording is an
/// index into the vector, so repeated calls always hit the same series.
pub(crate) struct SeriesRow<T> {
    series: Vec<T>,
}

impl<T> SeriesRow<T> {
    pub(crate) fn build<L: Copy>(values: &[L], make: impl FnMut(L) -> T) -> Self {
        Self {
            series: values.iter().copied().map(make).collect(),
        }
    }

    pub(crate) fn get(&self, index: usize) -> &T {
        &self.series[index]
    }
}

/// One instrument handle per combination of two label dimensions, row-major.
pub(crate) struct SeriesGrid<T> {
    cols: usize,
    series: Vec<T>,
}

impl<T> SeriesGrid<T> {
    pub(crate) fn build<R: Copy, C: Copy>(
        rows: &[R],
        cols: &[C],
        mut make: impl FnMut(R, C) -> T,
    ) -> Self {
        let mut series = Vec::with_capacity(rows.len() * cols.len());
        for &row in rows {
            for &col in cols {
                series.push(make(row, col));
            }
        }
        Self {
            cols: cols.len(),
            series,
        }
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> &T {
        &self.series[row * self.cols + col]
    }
}

/// A timing guard that records elapsed seconds into a histogram when dropped.
///
/// RAII-style timing measurement that's hard to misuse: the observation
/// happens exactly once, on drop, even on early returns.
pub struct TimingGuard {
    start: Instant,
    histogram: Histogram,
}

impl TimingGuard {
    pub fn new(histogram: Histogram) -> Self {
        Self {
            start: Instant::now(),
            histogram,
        }
    }

    /// Manually finish the timing and record the duration.
    ///
    /// This consumes the guard and records the duration. If not called,
    /// the duration will be recorded when the guard is dropped.
    pub fn finish(self) {
        // The Drop implementation will handle the recording
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        self.histogram.record(self.start.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::labels::{DbOperation, Outcome};

    #[test]
    fn series_grid_is_row_major() {
        let grid = SeriesGrid::build(&Outcome::VALUES, &DbOperation::VALUES, |row, col| {
            (row.as_str(), col.as_str())
        });
        assert_eq!(
            *grid.get(Outcome::Success.index(), DbOperation::Find.index()),
            ("success", "find")
        );
        assert_eq!(
            *grid.get(Outcome::Failed.index(), DbOperation::Delete.index()),
            ("failed", "delete")
        );
    }

    #[test]
    fn series_row_preserves_order() {
        let row = SeriesRow::build(&DbOperation::VALUES, |op| op.as_str());
        assert_eq!(*row.get(DbOperation::Update.index()), "update");
    }
}
