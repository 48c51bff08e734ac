//! Instrumented Heap Sort
//!
//! Two phases over the same slice:
//! 1. Build a max-heap by sifting down every parent, last parent first.
//! 2. Repeatedly move the root behind the shrinking heap and sift the new
//!    root down.
//!
//! The extraction swap is always counted and announced, including the final
//! `0 <-> 1` exchange of equal or already ordered elements.
//!
//! Complexity: O(n log n) comparisons

use crate::error::Result;
use crate::step::{Element, SortStats, StepSink, Stepper};

/// Sort `values` in place, reporting every step to `sink`.
pub async fn sort<T: Element, S: StepSink<T>>(values: &mut [T], sink: &mut S) -> Result<SortStats> {
    let mut stepper = Stepper::new(values, sink);
    stepper.emit(&[], &[], &[]).await?;

    build_max_heap(&mut stepper).await?;

    for i in (1..stepper.len()).rev() {
        stepper.swap(0, i);
        stepper.emit(&[i], &[], &[0, i]).await?;
        heapify(&mut stepper, i, 0).await?;
    }

    Ok(stepper.stats())
}

/// Turn the whole sequence into a max-heap.
pub(crate) async fn build_max_heap<T: Element, S: StepSink<T>>(
    stepper: &mut Stepper<'_, T, S>,
) -> Result<()> {
    let n = stepper.len();
    for i in (0..n / 2).rev() {
        heapify(stepper, n, i).await?;
    }
    Ok(())
}

/// Sift the element at `root` down within the first `heap_size` elements.
///
/// Each child comparison is announced with the largest-so-far as the saved
/// index; each exchange is announced and the sift continues in the subtree
/// that received the old root.
async fn heapify<T: Element, S: StepSink<T>>(
    stepper: &mut Stepper<'_, T, S>,
    heap_size: usize,
    mut root: usize,
) -> Result<()> {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_size {
            stepper.emit(&[largest], &[root, left], &[]).await?;
            if stepper.get(left) > stepper.get(largest) {
                largest = left;
            }
        }
        if right < heap_size {
            stepper.emit(&[largest], &[root, right], &[]).await?;
            if stepper.get(right) > stepper.get(largest) {
                largest = right;
            }
        }

        if largest == root {
            return Ok(());
        }

        stepper.swap(root, largest);
        stepper.emit(&[], &[], &[root, largest]).await?;
        root = largest;
    }
}
