use std::cmp::Ordering;
use std::mem;

/// Merges the sorted runs `myslice[..mid]` and `myslice[mid..]` through a
/// buffer sized to the whole range. Ties take the left run first.
///
/// Every comparison runs before the first element moves, so a panicking
/// comparator leaves the slice untouched.
fn merge<T: Default, F: Fn(&T, &T) -> Ordering>(myslice: &mut [T], mid: usize, compare: &F) {
    let len = myslice.len();
    let mut order = Vec::with_capacity(len);
    let mut left_cursor = 0;
    let mut right_cursor = mid;
    while left_cursor < mid && right_cursor < len {
        if compare(&myslice[left_cursor], &myslice[right_cursor]) != Ordering::Greater {
            order.push(left_cursor);
            left_cursor += 1;
        } else {
            order.push(right_cursor);
            right_cursor += 1;
        }
    }

    order.extend(left_cursor .. mid);
    order.extend(right_cursor .. len);

    let buf: Vec<T> = order.into_iter().map(|i| mem::take(&mut myslice[i])).collect();
    for (slot, value) in myslice.iter_mut().zip(buf) {
        *slot = value;
    }
}

fn actual_mergesort<T: Default, F: Fn(&T, &T) -> Ordering>(myslice: &mut [T], compare: &F) {
    let len = myslice.len();
    if len < 2 {
        return;
    }

    // Left run is [low, low + (high - low) / 2] inclusive.
    let mid = (len - 1) / 2 + 1;
    actual_mergesort(&mut myslice[.. mid], compare);
    actual_mergesort(&mut myslice[mid ..], compare);
    merge(myslice, mid, compare);
}

/// Stable top-down mergesort. Allocates a fresh buffer on every merge.
pub fn mergesort<T: Default, F: Fn(&T, &T) -> Ordering>(myslice: &mut [T], compare: F) {
    actual_mergesort(myslice, &compare);
}
