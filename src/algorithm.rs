//! The closed set of instrumented algorithms and name-based dispatch.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortError};
use crate::step::{Element, SortStats, StepSink};
use crate::{heap_sort, merge_sort, quick_sort, selection_sort};

/// One of the four instrumented sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Heap,
    Quick,
    Merge,
}

impl Algorithm {
    /// Every algorithm, in the order they are listed to users.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Identifier accepted by [`Algorithm::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    /// Sort `values` in place with this algorithm, reporting every step to `sink`.
    pub async fn sort<T: Element, S: StepSink<T>>(
        self,
        values: &mut [T],
        sink: &mut S,
    ) -> Result<SortStats> {
        match self {
            Algorithm::Selection => selection_sort::sort(values, sink).await,
            Algorithm::Heap => heap_sort::sort(values, sink).await,
            Algorithm::Quick => quick_sort::sort(values, sink).await,
            Algorithm::Merge => merge_sort::sort(values, sink).await,
        }
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| SortError::UnknownAlgorithm { name: s.to_string() })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Check that `sorted` holds exactly the values of `original`, in any order.
pub fn is_permutation(original: &[f64], sorted: &[f64]) -> bool {
    if original.len() != sorted.len() {
        return false;
    }
    let mut a = original.to_vec();
    let mut b = sorted.to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits())
}
