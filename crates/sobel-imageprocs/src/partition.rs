/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Splitting the interior rows of a source image between workers
use std::ops::Range;

/// A worker's share of rows
///
/// Rows are counted in the *source* image and cover only its interior,
/// so `1 <= start_row <= end_row <= height - 1`. Output row `r` corresponds
/// to source row `r + 1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RowRange {
    pub start_row: usize,
    /// Exclusive
    pub end_row:   usize
}

impl RowRange {
    /// Number of rows in the range
    pub const fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    pub const fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }

    /// The output rows this range produces
    pub const fn output_rows(&self) -> Range<usize> {
        self.start_row - 1..self.end_row - 1
    }
}

/// Number of workers actually used for a source of `source_height` rows.
///
/// More workers than output rows would leave some with nothing to do,
/// so the count is clamped to the number of output rows.
pub fn effective_workers(source_height: usize, requested: usize) -> usize {
    requested.min(source_height.saturating_sub(2))
}

/// Split the interior rows `[1, source_height - 1)` into contiguous ranges.
///
/// Each worker gets `(source_height - 2) / workers` rows in order and the
/// last worker additionally takes the remainder, so every interior row is
/// covered exactly once.
///
/// Returns an empty list when there are no interior rows or no workers.
pub fn partition_rows(source_height: usize, workers: usize) -> Vec<RowRange> {
    let workers = effective_workers(source_height, workers);

    if workers == 0 {
        return Vec::new();
    }
    let out_rows = source_height - 2;
    let rows_per_worker = out_rows / workers;

    (0..workers)
        .map(|i| {
            let start_row = 1 + i * rows_per_worker;
            let end_row = if i + 1 == workers {
                source_height - 1
            } else {
                start_row + rows_per_worker
            };
            RowRange { start_row, end_row }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::partition::{effective_workers, partition_rows, RowRange};

    fn assert_exact_cover(height: usize, workers: usize) {
        let ranges = partition_rows(height, workers);
        let mut covered = vec![0_u32; height];

        let mut expected_start = 1;
        for range in &ranges {
            assert_eq!(range.start_row, expected_start, "ranges must be contiguous");
            assert!(!range.is_empty());
            for row in range.start_row..range.end_row {
                covered[row] += 1;
            }
            expected_start = range.end_row;
        }
        assert_eq!(expected_start, height - 1);
        assert_eq!(covered[0], 0);
        assert_eq!(covered[height - 1], 0);
        assert!(covered[1..height - 1].iter().all(|x| *x == 1));
    }

    #[test]
    fn even_split() {
        let ranges = partition_rows(10, 4);
        assert_eq!(
            ranges,
            vec![
                RowRange { start_row: 1, end_row: 3 },
                RowRange { start_row: 3, end_row: 5 },
                RowRange { start_row: 5, end_row: 7 },
                RowRange { start_row: 7, end_row: 9 }
            ]
        );
        assert_eq!(ranges[1].output_rows(), 2..4);
    }

    #[test]
    fn remainder_goes_to_last_worker() {
        let ranges = partition_rows(12, 4);
        // 10 output rows, 2 each and the last one takes 4
        assert_eq!(ranges.iter().map(RowRange::len).collect::<Vec<_>>(), vec![2, 2, 2, 4]);
    }

    #[test]
    fn more_workers_than_rows() {
        assert_eq!(effective_workers(5, 8), 3);
        let ranges = partition_rows(5, 8);
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(partition_rows(2, 4).is_empty());
        assert!(partition_rows(0, 4).is_empty());
        assert!(partition_rows(10, 0).is_empty());
    }

    #[test]
    fn every_row_covered_once() {
        for height in 3..40 {
            for workers in 1..12 {
                assert_exact_cover(height, workers);
            }
        }
    }
}
