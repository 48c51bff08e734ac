//! Instrumented Merge Sort (top-down)
//!
//! `[start, end)` is split at its midpoint, both halves are sorted
//! recursively (left first), and the halves are merged back from private
//! copies. The merge is stable: on ties the element from the left copy wins.
//!
//! Every placement during a merge is a write to the sequence and counts as a
//! mutation, whether or not the value at that position changes.
//!
//! Complexity: O(n log n) comparisons, O(n) scratch per merge

use crate::error::Result;
use crate::step::{Element, SortStats, StepFuture, StepSink, Stepper};

/// Sort `values` in place, reporting every step to `sink`.
pub async fn sort<T: Element, S: StepSink<T>>(values: &mut [T], sink: &mut S) -> Result<SortStats> {
    let mut stepper = Stepper::new(values, sink);
    stepper.emit(&[], &[], &[]).await?;

    let n = stepper.len();
    divide(&mut stepper, 0, n).await?;

    Ok(stepper.stats())
}

/// Recursively sort `[start, end)`. Spans of length 0 or 1 emit nothing.
fn divide<'s, 'a: 's, T, S>(
    stepper: &'s mut Stepper<'a, T, S>,
    start: usize,
    end: usize,
) -> StepFuture<'s>
where
    T: Element + 's,
    S: StepSink<T> + 's,
{
    Box::pin(async move {
        if end - start <= 1 {
            return Ok(());
        }

        let mid = start + (end - start) / 2;
        divide(stepper, start, mid).await?;
        divide(stepper, mid, end).await?;
        merge(stepper, start, mid, end).await
    })
}

/// Merge the sorted runs `[start, mid)` and `[mid, end)` in place.
///
/// While both runs have elements, each placement is announced twice: once
/// with the write index as compared and once as swapped, both carrying the
/// whole merge range as saved. Leftover elements are only announced as
/// swapped.
async fn merge<T: Element, S: StepSink<T>>(
    stepper: &mut Stepper<'_, T, S>,
    start: usize,
    mid: usize,
    end: usize,
) -> Result<()> {
    let left = stepper.copy_range(start, mid);
    let right = stepper.copy_range(mid, end);
    let scope: Vec<usize> = (start..end).collect();

    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        stepper.emit(&scope, &[k], &[]).await?;

        if left[i] <= right[j] {
            stepper.write(k, left[i].clone());
            i += 1;
        } else {
            stepper.write(k, right[j].clone());
            j += 1;
        }
        k += 1;

        stepper.emit(&scope, &[], &[k - 1]).await?;
    }

    for value in left[i..].iter().chain(&right[j..]) {
        stepper.write(k, value.clone());
        k += 1;
        stepper.emit(&[], &[], &[k - 1]).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{is_permutation, is_sorted};
    use crate::error::SortError;
    use crate::sink::{NullSink, RecordingSink};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Ordering;

    /// Value compared by `key` only; `label` records the original position.
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: u32,
        label: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    /// Number of placements a full top-down merge sort performs.
    fn expected_writes(start: usize, end: usize) -> usize {
        if end - start <= 1 {
            return 0;
        }
        let mid = start + (end - start) / 2;
        expected_writes(start, mid) + expected_writes(mid, end) + (end - start)
    }

    #[tokio::test]
    async fn test_sort_empty_and_single_emit_only_initial_frame() {
        let mut empty: Vec<f64> = vec![];
        let mut sink: RecordingSink = RecordingSink::new();
        let stats = sort(&mut empty, &mut sink).await.unwrap();
        assert_eq!(stats, SortStats { mutations: 0, steps: 1 });
        assert!(sink.steps()[0].is_plain());

        let mut single = vec![9.0];
        let mut sink: RecordingSink = RecordingSink::new();
        let stats = sort(&mut single, &mut sink).await.unwrap();
        assert_eq!(stats, SortStats { mutations: 0, steps: 1 });
        assert_eq!(single, vec![9.0]);
    }

    #[tokio::test]
    async fn test_sort_two_elements_trace() {
        let mut data = vec![2.0, 1.0];
        let mut sink: RecordingSink = RecordingSink::new();
        let stats = sort(&mut data, &mut sink).await.unwrap();

        assert_eq!(data, vec![1.0, 2.0]);
        assert_eq!(stats, SortStats { mutations: 2, steps: 4 });

        let steps = sink.steps();
        assert_eq!(steps[1].saved, vec![0, 1]);
        assert_eq!(steps[1].compared, vec![0]);
        assert_eq!(steps[2].saved, vec![0, 1]);
        assert_eq!(steps[2].swapped, vec![0]);
        assert_eq!(steps[2].values, vec![1.0, 1.0]);
        assert!(steps[3].saved.is_empty());
        assert_eq!(steps[3].swapped, vec![1]);
    }

    #[tokio::test]
    async fn test_mutations_equal_total_placements() {
        let mut rng = StdRng::seed_from_u64(17);
        for size in [2usize, 3, 5, 8, 50, 129] {
            let mut data: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..100.0)).collect();
            let mut sink: RecordingSink = RecordingSink::new();
            let stats = sort(&mut data, &mut sink).await.unwrap();

            let placements = sink.steps().iter().filter(|s| !s.swapped.is_empty()).count();
            assert_eq!(stats.mutations, placements);
            assert_eq!(stats.mutations, expected_writes(0, size));
        }
    }

    #[tokio::test]
    async fn test_sorted_input_still_rewrites() {
        let mut data: Vec<f64> = (0..8).map(f64::from).collect();
        let stats = sort(&mut data, &mut NullSink).await.unwrap();
        assert_eq!(stats.mutations, 24);
    }

    #[tokio::test]
    async fn test_sort_is_stable() {
        let mut rng = StdRng::seed_from_u64(29);
        let mut data: Vec<Tagged> = (0..200)
            .map(|label| Tagged {
                key: rng.gen_range(0..10),
                label,
            })
            .collect();
        sort(&mut data, &mut NullSink).await.unwrap();

        for pair in data.windows(2) {
            assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                assert!(pair[0].label < pair[1].label, "equal keys reordered: {:?}", pair);
            }
        }
    }

    #[tokio::test]
    async fn test_sort_random() {
        let mut rng = StdRng::seed_from_u64(1);
        let original: Vec<f64> = (0..1000).map(|_| rng.gen_range(0.0..100.0)).collect();
        let mut data = original.clone();
        sort(&mut data, &mut NullSink).await.unwrap();
        assert!(is_sorted(&data));
        assert!(is_permutation(&original, &data));
    }

    #[tokio::test]
    async fn test_cancel_stops_mutation() {
        let mut data: Vec<f64> = (0..16).rev().map(f64::from).collect();
        let mut sink: RecordingSink = RecordingSink::cancel_at(9);
        assert_eq!(sort(&mut data, &mut sink).await, Err(SortError::Cancelled));
        assert_eq!(sink.steps().len(), 9);
        assert_eq!(sink.steps().last().unwrap().values, data);
    }
}
