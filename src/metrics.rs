//! Performance metrics collection for sort instrumentation.
//!
//! A [`MetricsCollector`] bundles the operation counters (comparisons,
//! swaps, array accesses, memory allocations) with a monotonic wall-clock
//! timer. Each sort entry point resets the collector on entry, so after a
//! call returns the collector describes exactly that call's work.

use std::time::{Duration, Instant};

/// Header matching [`MetricsCollector::csv_row`], without the trailing newline.
pub const CSV_HEADER: &str = "InputSize,Comparisons,Swaps,ArrayAccesses,MemoryAllocations,TimeMs";

/// Mutable bundle of operation counters plus an elapsed-time window.
///
/// Counters only grow between [`reset`](MetricsCollector::reset) calls.
/// `memory_allocations` is carried for the CSV contract but is never
/// incremented by the current algorithms.
///
/// Not synchronized; a collector must not be shared by two in-flight sorts.
///
/// # Example
///
/// ```
/// use selsort::metrics::MetricsCollector;
///
/// let mut m = MetricsCollector::new();
/// m.start_timer();
/// m.record_comparison();
/// m.record_swap();
/// m.stop_timer();
///
/// assert_eq!(m.comparisons(), 1);
/// assert_eq!(m.swaps(), 1);
/// assert!(m.elapsed_millis() >= 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    comparisons: u64,
    swaps: u64,
    array_accesses: u64,
    memory_allocations: u64,
    started_at: Option<Instant>,
    elapsed: Duration,
    timer_running: bool,
}

impl MetricsCollector {
    /// Creates a collector with all counters zeroed and the timer stopped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every counter and discards any timer state.
    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
        self.array_accesses = 0;
        self.memory_allocations = 0;
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.timer_running = false;
    }

    /// Opens a timing window at the current instant.
    ///
    /// Calling this while the timer is already running restarts the window
    /// from now; windows do not stack.
    pub fn start_timer(&mut self) {
        self.started_at = Some(Instant::now());
        self.timer_running = true;
    }

    /// Closes the timing window. No-op if the timer is not running.
    pub fn stop_timer(&mut self) {
        if self.timer_running {
            if let Some(start) = self.started_at {
                self.elapsed = start.elapsed();
            }
            self.timer_running = false;
        }
    }

    /// Elapsed nanoseconds: a live reading while the timer runs, otherwise
    /// the frozen width of the last closed window (zero if none).
    pub fn elapsed_nanos(&self) -> u128 {
        if self.timer_running {
            match self.started_at {
                Some(start) => start.elapsed().as_nanos(),
                None => 0,
            }
        } else {
            self.elapsed.as_nanos()
        }
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed_nanos() as f64 / 1_000_000.0
    }

    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn record_comparisons(&mut self, count: u64) {
        self.comparisons += count;
    }

    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    pub fn record_array_accesses(&mut self, count: u64) {
        self.array_accesses += count;
    }

    pub fn record_allocations(&mut self, count: u64) {
        self.memory_allocations += count;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn array_accesses(&self) -> u64 {
        self.array_accesses
    }

    pub fn memory_allocations(&self) -> u64 {
        self.memory_allocations
    }

    /// Serializes the metrics as one CSV row matching [`CSV_HEADER`]:
    /// five integer fields and the elapsed milliseconds with three decimals.
    pub fn csv_row(&self, input_size: usize) -> String {
        format!(
            "{},{},{},{},{},{:.3}",
            input_size,
            self.comparisons,
            self.swaps,
            self.array_accesses,
            self.memory_allocations,
            self.elapsed_millis()
        )
    }
}
