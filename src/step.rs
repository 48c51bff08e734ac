//! Step events and the step sink contract.
//!
//! Every algorithm in this crate reports its progress as a sequence of
//! [`StepEvent`]s handed to a [`StepSink`]. The sink is the single suspension
//! point of a run: it performs whatever side effects it wants (drawing,
//! tones, recording), waits, and then either lets the algorithm continue or
//! fails with [`SortError::Cancelled`].
//!
//! Algorithms never touch the sequence or the sink directly. They go through
//! a [`Stepper`], which owns the mutation count and checks that every
//! highlighted index is in range before a step leaves the engine.

use std::future::Future;
use std::pin::Pin;

use crate::error::{Result, SortError};

/// Boxed future used by the recursive algorithm helpers.
pub type StepFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Anything the algorithms can order and snapshot.
///
/// Runs driven by the controller sort `f64`; tests also sort tagged values
/// to observe stability.
pub trait Element: PartialOrd + Clone + Send + Sync {}

impl<T: PartialOrd + Clone + Send + Sync> Element for T {}

/// Snapshot of the sequence at one instrumented point, plus highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct StepEvent<T = f64> {
    /// Full copy of the sequence at the time of the step.
    pub values: Vec<T>,
    /// Algorithm bookmarks (current minimum, pivot, merge scope, ...).
    pub saved: Vec<usize>,
    /// Elements currently being examined.
    pub compared: Vec<usize>,
    /// Elements written by the step that precedes this event.
    pub swapped: Vec<usize>,
}

impl<T> StepEvent<T> {
    /// Returns `true` when the event carries no highlighted index.
    pub fn is_plain(&self) -> bool {
        self.saved.is_empty() && self.compared.is_empty() && self.swapped.is_empty()
    }
}

/// Consumer of step events and owner of the per-step suspension.
///
/// Pacing sinks suspend here before resolving. A sink must fail with
/// [`SortError::Cancelled`] once cancellation has been requested for the run
/// it belongs to; algorithms propagate that error without handling it.
pub trait StepSink<T = f64>: Send {
    /// Consume one step. Resolves when the algorithm may continue.
    fn emit(&mut self, step: StepEvent<T>) -> impl Future<Output = Result<()>> + Send;
}

/// Counters collected while an algorithm runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of swaps and writes performed on the sequence.
    pub mutations: usize,
    /// Number of steps handed to the sink, including the initial frame.
    pub steps: usize,
}

/// Instrumented view of a sequence being sorted.
pub struct Stepper<'a, T, S> {
    values: &'a mut [T],
    sink: &'a mut S,
    stats: SortStats,
}

impl<'a, T: Element, S: StepSink<T>> Stepper<'a, T, S> {
    pub fn new(values: &'a mut [T], sink: &'a mut S) -> Self {
        Self {
            values,
            sink,
            stats: SortStats::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.values[index]
    }

    /// Read-only copy of `start..end`, invisible to the sink.
    pub fn copy_range(&self, start: usize, end: usize) -> Vec<T> {
        self.values[start..end].to_vec()
    }

    /// Swap two elements and count it as one mutation, even when `i == j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.stats.mutations += 1;
    }

    /// Overwrite one element and count it as one mutation.
    pub fn write(&mut self, index: usize, value: T) {
        self.values[index] = value;
        self.stats.mutations += 1;
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// Hand a snapshot to the sink and wait for it to resume the run.
    ///
    /// Fails with [`SortError::IndexOutOfRange`] before anything is emitted
    /// if a highlight points outside the sequence; that is an algorithm bug
    /// and halts the run.
    pub async fn emit(
        &mut self,
        saved: &[usize],
        compared: &[usize],
        swapped: &[usize],
    ) -> Result<()> {
        let len = self.values.len();
        if let Some(&index) = saved
            .iter()
            .chain(compared)
            .chain(swapped)
            .find(|&&index| index >= len)
        {
            return Err(SortError::IndexOutOfRange { index, len });
        }

        let step = StepEvent {
            values: self.values.to_vec(),
            saved: saved.to_vec(),
            compared: compared.to_vec(),
            swapped: swapped.to_vec(),
        };
        self.stats.steps += 1;
        self.sink.emit(step).await
    }
}
