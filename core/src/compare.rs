//! Comparators handed to [`crate::sorter::selection_sort`].
//!
//! Names compare with plain `str` ordering, so the comparison is
//! case-sensitive; stored names are title cased, which keeps it intuitive.

use std::cmp::Ordering;

use crate::animal::AnimalHandle;
use crate::registry::Registered;

pub fn by_name<T: Registered>(a: &T, b: &T) -> Ordering {
    a.name().cmp(&b.name())
}

pub fn by_tail_length(a: &AnimalHandle, b: &AnimalHandle) -> Ordering {
    a.tail_length().total_cmp(&b.tail_length())
}

/// Tail length first, name on ties.
pub fn by_tail_length_then_name(a: &AnimalHandle, b: &AnimalHandle) -> Ordering {
    by_tail_length(a, b).then_with(|| by_name(a, b))
}
