//! Comparison sorts over `i32` arrays.

use std::cmp::Ordering;

use super::Sorter;
use crate::core::AlgorithmDescriptor;
use crate::core::descriptor::{BUBBLE_SORT, INSERTION_SORT, MERGE_SORT, QUICK_SORT, SELECTION_SORT};

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Sorter for BubbleSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &BUBBLE_SORT
    }

    fn sort(&self, mut input: Vec<i32>) -> Vec<i32> {
        let len = input.len();
        for pass in 0..len {
            let mut swapped = false;
            for j in 0..len - pass - 1 {
                if input[j] > input[j + 1] {
                    input.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        input
    }
}

impl Sorter for InsertionSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &INSERTION_SORT
    }

    fn sort(&self, mut input: Vec<i32>) -> Vec<i32> {
        for i in 1..input.len() {
            let key = input[i];
            let mut j = i;
            while j > 0 && input[j - 1] > key {
                input[j] = input[j - 1];
                j -= 1;
            }
            input[j] = key;
        }
        input
    }
}

impl Sorter for SelectionSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &SELECTION_SORT
    }

    fn sort(&self, mut input: Vec<i32>) -> Vec<i32> {
        let len = input.len();
        for i in 0..len {
            let mut min = i;
            for j in (i + 1)..len {
                if input[j] < input[min] {
                    min = j;
                }
            }
            if min != i {
                input.swap(i, min);
            }
        }
        input
    }
}

impl Sorter for MergeSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &MERGE_SORT
    }

    fn sort(&self, mut input: Vec<i32>) -> Vec<i32> {
        merge_sort_by(&mut input, &i32::cmp);
        input
    }
}

impl Sorter for QuickSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &QUICK_SORT
    }

    fn sort(&self, mut input: Vec<i32>) -> Vec<i32> {
        quick_sort(&mut input);
        input
    }
}

/// Stable top-down merge sort. Equal elements keep their input order.
pub fn merge_sort_by<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    merge_sort_by(&mut items[..mid], compare);
    merge_sort_by(&mut items[mid..], compare);

    // Halves already in order.
    if compare(&items[mid - 1], &items[mid]) != Ordering::Greater {
        return;
    }

    let left = items[..mid].to_vec();
    let (mut i, mut j, mut k) = (0, mid, 0);
    // k < j holds throughout, so writes never overtake unread right-half elements.
    while i < left.len() && j < len {
        if compare(&items[j], &left[i]) == Ordering::Less {
            items[k] = items[j].clone();
            j += 1;
        } else {
            items[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }
    while i < left.len() {
        items[k] = left[i].clone();
        i += 1;
        k += 1;
    }
}

/// Three-way quick sort. Recurses into the smaller side and loops on the larger one,
/// so stack depth stays logarithmic.
fn quick_sort(mut items: &mut [i32]) {
    while items.len() > 1 {
        let (lt, gt) = partition(items);
        let slice = std::mem::take(&mut items);
        let (left, rest) = slice.split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            quick_sort(left);
            items = right;
        } else {
            quick_sort(right);
            items = left;
        }
    }
}

/// Partition into `< pivot`, `== pivot`, `> pivot` and return the bounds of the middle run.
fn partition(items: &mut [i32]) -> (usize, usize) {
    let len = items.len();
    let pivot = median_of_three(items[0], items[len / 2], items[len - 1]);
    let (mut lt, mut i, mut gt) = (0, 0, len);
    while i < gt {
        match items[i].cmp(&pivot) {
            Ordering::Less => {
                items.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                items.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

fn median_of_three(a: i32, b: i32, c: i32) -> i32 {
    a.max(b).min(a.min(b).max(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorters() -> Vec<Box<dyn Sorter>> {
        vec![
            Box::new(BubbleSort),
            Box::new(InsertionSort),
            Box::new(SelectionSort),
            Box::new(MergeSort),
            Box::new(QuickSort),
        ]
    }

    fn inputs() -> Vec<Vec<i32>> {
        vec![
            vec![],
            vec![7],
            vec![5, 3, 1, 4, 2],
            vec![1, 2, 3, 4, 5, 6],
            vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
            vec![4; 64],
            vec![3, -1, 3, 0, -1, 3, 2, i32::MAX, i32::MIN, 0],
            (0..500).map(|i| (i * 7919 % 211) - 100).collect(),
        ]
    }

    #[test]
    fn test_every_sorter_matches_std_sort() {
        for sorter in sorters() {
            for input in inputs() {
                let mut expected = input.clone();
                expected.sort();
                let actual = sorter.sort(input.clone());
                assert_eq!(actual, expected, "{} on {:?}", sorter.descriptor().name, input);
            }
        }
    }

    #[test]
    fn test_example_array() {
        for sorter in sorters() {
            assert_eq!(sorter.sort(vec![5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_sorting_sorted_input_is_identity() {
        let sorted: Vec<i32> = (-50..50).collect();
        for sorter in sorters() {
            assert_eq!(sorter.sort(sorted.clone()), sorted);
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let mut items = vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e'), (3, 'f')];
        merge_sort_by(&mut items, &|x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
        assert_eq!(
            items,
            vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c'), (3, 'f')]
        );
    }

    #[test]
    fn test_quick_sort_large_all_equal_and_sorted() {
        let equal = vec![42; 100_000];
        assert_eq!(QuickSort.sort(equal.clone()), equal);

        let ascending: Vec<i32> = (0..100_000).collect();
        assert_eq!(QuickSort.sort(ascending.clone()), ascending);

        let descending: Vec<i32> = (0..100_000).rev().collect();
        assert_eq!(QuickSort.sort(descending), ascending);
    }

    #[test]
    fn test_median_of_three() {
        assert_eq!(median_of_three(1, 2, 3), 2);
        assert_eq!(median_of_three(3, 1, 2), 2);
        assert_eq!(median_of_three(2, 3, 1), 2);
        assert_eq!(median_of_three(5, 5, 1), 5);
    }
}
