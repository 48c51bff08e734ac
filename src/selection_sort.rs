//! Instrumented Selection Sort
//!
//! For every position `i` the remaining suffix is scanned for its minimum,
//! which is then swapped into place. Each comparison is announced before it
//! happens, and every position is announced as swapped once its scan ends,
//! even when the minimum was already in place.
//!
//! Complexity: O(n²) comparisons, at most n - 1 swaps

use crate::error::Result;
use crate::step::{Element, SortStats, StepSink, Stepper};

/// Sort `values` in place, reporting every step to `sink`.
///
/// Only real swaps (minimum found away from `i`) count as mutations.
pub async fn sort<T: Element, S: StepSink<T>>(values: &mut [T], sink: &mut S) -> Result<SortStats> {
    let mut stepper = Stepper::new(values, sink);
    stepper.emit(&[], &[], &[]).await?;

    let n = stepper.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            stepper.emit(&[min_index], &[i, j], &[]).await?;
            if stepper.get(j) < stepper.get(min_index) {
                min_index = j;
            }
        }

        if min_index != i {
            stepper.swap(i, min_index);
        }
        stepper.emit(&[], &[], &[i, min_index]).await?;
    }

    Ok(stepper.stats())
}
