//! Instrumented selection sort over `i32` slices.
//!
//! Two in-place variants are provided: the classic single-ended sort with
//! an early-termination check, and a bidirectional (double-ended) variant
//! that places both the minimum and the maximum of the unsorted window in
//! each pass. Both record comparisons, swaps, element accesses, and elapsed
//! time into a [`metrics::MetricsCollector`], which the benchmark harness
//! reads back after each call.
//!
//! # Example
//!
//! ```
//! use selsort::{is_sorted, SelectionSorter};
//!
//! let mut arr = vec![3, 1, 4, 1, 5];
//! let mut sorter = SelectionSorter::new();
//! sorter.sort(&mut arr);
//!
//! assert_eq!(arr, vec![1, 1, 3, 4, 5]);
//! assert!(is_sorted(&arr));
//! assert!(sorter.metrics().comparisons() > 0);
//! ```

pub mod metrics;

use metrics::MetricsCollector;

/// Either the sorter's own collector or one lent by the caller.
enum MetricsHandle<'a> {
    Owned(MetricsCollector),
    Shared(&'a mut MetricsCollector),
}

/// In-place selection sort with per-call instrumentation.
///
/// The sorter holds a [`MetricsCollector`] and resets it at the start of
/// every sort call, so the counters always describe the most recent call.
/// By default the collector is owned; [`SelectionSorter::with_collector`]
/// lets the caller lend one instead and inspect it once the sorter is
/// dropped.
pub struct SelectionSorter<'a> {
    metrics: MetricsHandle<'a>,
}

impl<'a> SelectionSorter<'a> {
    /// Creates a sorter owning a fresh collector.
    pub fn new() -> Self {
        Self {
            metrics: MetricsHandle::Owned(MetricsCollector::new()),
        }
    }

    /// Creates a sorter that records into a caller-owned collector.
    ///
    /// The sorter resets and mutates the collector but never destroys it;
    /// the borrow ends when the sorter is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use selsort::metrics::MetricsCollector;
    /// use selsort::SelectionSorter;
    ///
    /// let mut collector = MetricsCollector::new();
    /// let mut arr = vec![2, 1];
    /// SelectionSorter::with_collector(&mut collector).sort(&mut arr);
    ///
    /// assert_eq!(arr, vec![1, 2]);
    /// assert_eq!(collector.swaps(), 1);
    /// ```
    pub fn with_collector(collector: &'a mut MetricsCollector) -> Self {
        Self {
            metrics: MetricsHandle::Shared(collector),
        }
    }

    /// Read access to the metrics recorded by the last sort call.
    pub fn metrics(&self) -> &MetricsCollector {
        match &self.metrics {
            MetricsHandle::Owned(m) => m,
            MetricsHandle::Shared(m) => m,
        }
    }

    fn metrics_mut(&mut self) -> &mut MetricsCollector {
        match &mut self.metrics {
            MetricsHandle::Owned(m) => m,
            MetricsHandle::Shared(m) => m,
        }
    }

    /// Sorts `arr` in place into non-descending order.
    ///
    /// Classic selection sort with two optimizations: a swap is skipped when
    /// the minimum is already in position, and the outer loop terminates
    /// early once a swap-free pass finds the remaining suffix sorted.
    ///
    /// Resets the collector and opens a timing window on entry; the window
    /// is closed on every return path.
    pub fn sort(&mut self, arr: &mut [i32]) {
        run_standard(self.metrics_mut(), arr);
    }

    /// Sorts `arr` in place, fixing both ends of the unsorted window per pass.
    ///
    /// Each pass scans `[left, right]` once, tracking the minimum and the
    /// maximum (two counted comparisons per element), then places the
    /// minimum at `left` and the maximum at `right`. Roughly halves the
    /// number of passes versus [`sort`](SelectionSorter::sort) at the cost
    /// of twice the comparisons per pass.
    pub fn sort_bidirectional(&mut self, arr: &mut [i32]) {
        run_bidirectional(self.metrics_mut(), arr);
    }
}

impl Default for SelectionSorter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns whether `arr` is in non-descending order.
///
/// Pure check for verification; records nothing. Slices of length 0 or 1
/// count as sorted.
pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

fn run_standard(m: &mut MetricsCollector, arr: &mut [i32]) {
    m.reset();
    m.start_timer();

    let n = arr.len();
    if n <= 1 {
        m.stop_timer();
        return;
    }

    for i in 0..n - 1 {
        let mut min_idx = i;

        // Ties keep the earliest index: only a strict `<` moves min_idx.
        for j in i + 1..n {
            m.record_comparison();
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }

        let swapped = min_idx != i;
        if swapped {
            swap(m, arr, i, min_idx);
        }

        // A swap-free pass may mean the rest is already in order.
        if !swapped && suffix_sorted(m, arr, i) {
            m.stop_timer();
            return;
        }
    }

    m.stop_timer();
}

fn run_bidirectional(m: &mut MetricsCollector, arr: &mut [i32]) {
    m.reset();
    m.start_timer();

    let n = arr.len();
    if n <= 1 {
        m.stop_timer();
        return;
    }

    let mut left = 0;
    let mut right = n - 1;

    while left < right {
        let mut min_idx = left;
        let mut max_idx = right;

        // One pass finds both extremes; two counted comparisons per element.
        for i in left..=right {
            m.record_comparisons(2);
            if arr[i] < arr[min_idx] {
                min_idx = i;
            }
            if arr[i] > arr[max_idx] {
                max_idx = i;
            }
        }

        // If the maximum starts at `left`, placing the minimum there moves
        // it to `min_idx`; retarget before placing.
        if max_idx == left {
            max_idx = min_idx;
        }

        if min_idx != left {
            swap(m, arr, left, min_idx);
        }

        if max_idx != right {
            swap(m, arr, right, max_idx);
        }

        left += 1;
        right -= 1;
    }

    m.stop_timer();
}

/// Suffix-sorted check used for early termination. Unlike [`is_sorted`],
/// every adjacent-pair probe is counted, and the scan stops at the first
/// inversion.
fn suffix_sorted(m: &mut MetricsCollector, arr: &[i32], start: usize) -> bool {
    for i in start..arr.len() - 1 {
        m.record_comparison();
        if arr[i] > arr[i + 1] {
            return false;
        }
    }
    true
}

fn swap(m: &mut MetricsCollector, arr: &mut [i32], i: usize, j: usize) {
    m.record_swap();
    // Two reads plus one write for the three-step exchange.
    m.record_array_accesses(3);
    arr.swap(i, j);
}
