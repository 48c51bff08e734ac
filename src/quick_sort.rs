//! Instrumented Quick Sort (Lomuto partition)
//!
//! The last element of each range is the pivot. Smaller elements are swapped
//! to the front of the range as they are found, then the pivot is swapped
//! into the slot right after them.
//!
//! Sub-ranges are kept on an explicit work stack rather than the call stack,
//! so already sorted or reversed inputs (O(n) nesting) cannot exhaust it.
//! The left range is always finished before the right one is started.
//!
//! Complexity: O(n log n) average, O(n²) worst case comparisons

use crate::error::Result;
use crate::step::{Element, SortStats, StepSink, Stepper};

/// Sort `values` in place, reporting every step to `sink`.
pub async fn sort<T: Element, S: StepSink<T>>(values: &mut [T], sink: &mut S) -> Result<SortStats> {
    let mut stepper = Stepper::new(values, sink);
    stepper.emit(&[], &[], &[]).await?;

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    if stepper.len() > 1 {
        ranges.push((0, stepper.len() - 1));
    }

    while let Some((low, high)) = ranges.pop() {
        if low >= high {
            continue;
        }
        let pivot_index = partition(&mut stepper, low, high).await?;

        // Pushed right first so the left range is popped next.
        ranges.push((pivot_index + 1, high));
        if pivot_index > low {
            ranges.push((low, pivot_index - 1));
        }
    }

    Ok(stepper.stats())
}

/// Partition `low..=high` around the element at `high` and return the
/// pivot's final index.
pub(crate) async fn partition<T: Element, S: StepSink<T>>(
    stepper: &mut Stepper<'_, T, S>,
    low: usize,
    high: usize,
) -> Result<usize> {
    let pivot = stepper.get(high).clone();
    // First slot not yet known to hold an element below the pivot.
    let mut store = low;

    for j in low..high {
        stepper.emit(&[high], &[j], &[]).await?;
        if stepper.get(j) < &pivot {
            stepper.swap(store, j);
            stepper.emit(&[high], &[], &[store, j]).await?;
            store += 1;
        }
    }

    stepper.swap(store, high);
    stepper.emit(&[], &[], &[store, high]).await?;
    Ok(store)
}
