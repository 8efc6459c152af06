//! Stateless reference implementations
//!
//! Each function runs one of the seven algorithms to completion in a plain
//! loop and returns the [`SearchResult`]. The stateful engines must agree
//! with them on every input.
//!
//! The preprocessing tables live in [`tables`] and are shared with the
//! engines' table-construction phases as the expected final state.
//!
//! # Preconditions
//!
//! Binary, jump and exponential search assume ascending input. Unsorted
//! input does not fail, it just produces whatever the algorithm computes;
//! use [`is_sorted`] to check first.

pub mod tables;

pub use tables::{failure_function, BadCharacterTable};

use crate::model::SearchResult;

/// Scan left to right for the first element equal to `target`
pub fn linear_search(values: &[i32], target: i32) -> SearchResult {
    values.iter().position(|&v| v == target).into()
}

/// Classic iterative binary search over the whole array
pub fn binary_search(values: &[i32], target: i32) -> SearchResult {
    if values.is_empty() {
        return SearchResult::NotFound;
    }
    binary_search_range(values, target, 0, values.len() - 1)
}

/// Binary search restricted to the inclusive range `[left, right]`
fn binary_search_range(values: &[i32], target: i32, left: usize, right: usize) -> SearchResult {
    let mut left = left as isize;
    let mut right = right as isize;

    while left <= right {
        let mid = left + (right - left) / 2;
        let value = values[mid as usize];

        if value == target {
            return SearchResult::FoundAt(mid as usize);
        } else if value > target {
            right = mid - 1;
        } else {
            left = mid + 1;
        }
    }

    SearchResult::NotFound
}

/// Block size used by jump search: `floor(sqrt(n))`, at least 1
pub fn jump_size(len: usize) -> usize {
    let mut root = (len as f64).sqrt() as usize;
    // Correct float rounding at perfect squares
    while root * root > len {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= len {
        root += 1;
    }
    root.max(1)
}

/// Jump ahead `sqrt(n)` elements at a time, then scan the selected block
pub fn jump_search(values: &[i32], target: i32) -> SearchResult {
    let n = values.len();
    if n == 0 {
        return SearchResult::NotFound;
    }

    let step = jump_size(n);
    let mut start = 0;
    let mut end = step.min(n);

    while values[end - 1] < target {
        start = end;
        if start >= n {
            return SearchResult::NotFound;
        }
        end = (end + step).min(n);
    }

    while values[start] < target {
        start += 1;
        if start == end {
            return SearchResult::NotFound;
        }
    }

    if values[start] == target {
        SearchResult::FoundAt(start)
    } else {
        SearchResult::NotFound
    }
}

/// Double a bound until it passes the target, then binary search the last
/// doubling interval
pub fn exponential_search(values: &[i32], target: i32) -> SearchResult {
    let n = values.len();
    if n == 0 {
        return SearchResult::NotFound;
    }
    if values[0] == target {
        return SearchResult::FoundAt(0);
    }

    let mut bound = 1;
    while bound < n && values[bound] < target {
        bound *= 2;
    }

    binary_search_range(values, target, bound / 2, bound.min(n - 1))
}

/// Try every alignment, comparing left to right
pub fn naive_search(text: &[char], pattern: &[char]) -> SearchResult {
    if pattern.is_empty() {
        return SearchResult::FoundAt(0);
    }
    if pattern.len() > text.len() {
        return SearchResult::NotFound;
    }

    for start in 0..=text.len() - pattern.len() {
        let mut matched = 0;
        while matched < pattern.len() && text[start + matched] == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            return SearchResult::FoundAt(start);
        }
    }

    SearchResult::NotFound
}

/// Knuth-Morris-Pratt: never moves backwards in the text
pub fn kmp_search(text: &[char], pattern: &[char]) -> SearchResult {
    if pattern.is_empty() {
        return SearchResult::FoundAt(0);
    }

    let failure = failure_function(pattern);
    let mut text_index = 0;
    let mut pattern_index = 0;

    while text_index < text.len() {
        if text[text_index] == pattern[pattern_index] {
            text_index += 1;
            pattern_index += 1;
            if pattern_index == pattern.len() {
                return SearchResult::FoundAt(text_index - pattern.len());
            }
        } else if pattern_index != 0 {
            pattern_index = failure[pattern_index - 1];
        } else {
            text_index += 1;
        }
    }

    SearchResult::NotFound
}

/// Boyer-Moore with the bad-character rule, comparing right to left.
///
/// On a mismatch the shift is looked up for the text character aligned with
/// the last pattern position.
pub fn boyer_moore_search(text: &[char], pattern: &[char]) -> SearchResult {
    let m = pattern.len();
    if m == 0 {
        return SearchResult::FoundAt(0);
    }

    let table = BadCharacterTable::build(pattern);
    let mut text_index = m - 1;

    while text_index < text.len() {
        let start = text_index + 1 - m;
        let mut remaining = m;
        while remaining > 0 && text[start + remaining - 1] == pattern[remaining - 1] {
            remaining -= 1;
        }
        if remaining == 0 {
            return SearchResult::FoundAt(start);
        }
        text_index += table.shift(text[text_index]);
    }

    SearchResult::NotFound
}

/// Check whether `values` is in ascending order
pub fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Worst-case number of element comparisons binary search makes on `len`
/// elements
pub fn max_binary_comparisons(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (usize::BITS - len.leading_zeros()) as usize
    }
}
