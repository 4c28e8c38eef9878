use super::Searcher;
use crate::core::AlgorithmDescriptor;
use crate::core::descriptor::{BINARY_SEARCH, LINEAR_SEARCH};

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

/// Binary search over ascending input.
///
/// Sortedness is a caller contract and is not validated: on unsorted input the result is
/// unspecified (possibly `None` for a present value, never a panic).
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl Searcher for LinearSearch {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &LINEAR_SEARCH
    }

    fn search(&self, input: &[i32], target: i32) -> Option<usize> {
        input.iter().position(|&v| v == target)
    }
}

impl Searcher for BinarySearch {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &BINARY_SEARCH
    }

    fn search(&self, input: &[i32], target: i32) -> Option<usize> {
        let (mut lo, mut hi) = (0, input.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if input[mid] == target {
                return Some(mid);
            }
            if input[mid] < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        None
    }

    fn requires_sorted_input(&self) -> bool {
        true
    }
}
