//! # Selection Sort
//!
//! The ordering routine behind every sorted view of the register.
//!
//! Each pass scans the unsorted suffix for its minimum and swaps it into
//! place. Only a strictly smaller element replaces the current minimum, so
//! among equal elements the first one found wins. The sort is not stable:
//! a swap can carry an element past its equals. Ties must be broken by the
//! comparator, never by input position.

use std::cmp::Ordering;

/// Sorts `items` in place and returns the number of swaps performed.
pub fn selection_sort<T, F>(items: &mut [T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut swaps: usize = 0;

    for i in 0..items.len() {
        let smallest: usize = next_smallest(items, i, &mut compare);
        if smallest != i {
            items.swap(i, smallest);
            swaps += 1;
        }
    }

    swaps
}

/// Index of the minimum of `items[start..]`.
fn next_smallest<T, F>(items: &[T], start: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut smallest: usize = start;
    for j in start + 1..items.len() {
        if compare(&items[smallest], &items[j]) == Ordering::Greater {
            smallest = j;
        }
    }
    smallest
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
