use std::cmp::Ordering;
use std::mem;

/// Sorts `myslice` in place with a Lomuto partition around the last element.
///
/// Not stable. Already sorted (or reverse sorted) input degrades to O(n^2)
/// comparisons; the pivot choice is kept as is. Recursion always descends into
/// the shorter side, so stack depth stays logarithmic even then.
pub fn quicksort<T, F: Fn(&T, &T) -> Ordering>(myslice: &mut [T], compare: F) {
    actual_quicksort(myslice, &compare);
}

fn actual_quicksort<T, F: Fn(&T, &T) -> Ordering>(mut myslice: &mut [T], compare: &F) {
    while myslice.len() > 1 {
        let current = mem::take(&mut myslice);
        let pivot = partition(current, compare);
        let (left, right) = current.split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            actual_quicksort(left, compare);
            myslice = right;
        } else {
            actual_quicksort(right, compare);
            myslice = left;
        }
    }
}

/// Moves every element not greater than the pivot to the front and returns
/// the pivot's final position.
fn partition<T, F: Fn(&T, &T) -> Ordering>(myslice: &mut [T], compare: &F) -> usize {
    let high = myslice.len() - 1;
    let mut i = 0;
    for j in 0 .. high {
        if compare(&myslice[j], &myslice[high]) != Ordering::Greater {
            myslice.swap(i, j);
            i += 1;
        }
    }

    myslice.swap(i, high);
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::cell::Cell;

    fn is_sorted(v: &[u32]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn empty_and_single_element() {
        let mut v: Vec<u32> = vec![];
        quicksort(&mut v, |x, y| x.cmp(y));
        assert!(v.is_empty());

        let mut v = vec![4];
        quicksort(&mut v, |x, y| x.cmp(y));
        assert_eq!(v, vec![4]);
    }

    #[test]
    fn equal_elements_with_pivot_duplicate() {
        let mut v = vec![4, 4, 2, 1, 1, 8, 9, 4];
        quicksort(&mut v, |x, y| x.cmp(y));
        assert_eq!(v, vec![1, 1, 2, 4, 4, 4, 8, 9]);
    }

    #[test]
    fn reversed_comparator() {
        let mut v = vec![5, 3, 7];
        quicksort(&mut v, |x, y| y.cmp(x));
        assert_eq!(v, vec![7, 5, 3]);
    }

    #[test]
    fn partition_puts_pivot_in_place() {
        let mut v = vec![7, 2, 9, 1, 5];
        let p = partition(&mut v, &|x: &u32, y: &u32| x.cmp(y));
        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert!(v[..p].iter().all(|x| *x <= 5));
        assert!(v[p + 1..].iter().all(|x| *x > 5));
    }

    #[test]
    fn sorted_input_hits_quadratic_comparisons() {
        let n = 200u64;
        let mut v: Vec<u64> = (0 .. n).collect();
        let count = Cell::new(0u64);
        quicksort(&mut v, |x, y| {
            count.set(count.get() + 1);
            x.cmp(y)
        });
        assert_eq!(count.get(), n * (n - 1) / 2);
    }

    #[test]
    fn long_sorted_input_does_not_overflow_stack() {
        let mut v: Vec<u32> = (0 .. 5_000).rev().collect();
        quicksort(&mut v, |x, y| x.cmp(y));
        assert!(is_sorted(&v));
    }

    #[test]
    fn random_5000() {
        let mut v: Vec<u32> = (0 .. 5000).map(|_| rand::random()).collect();
        quicksort(&mut v, |x, y| x.cmp(y));
        assert!(is_sorted(&v));
    }

    #[quickcheck]
    fn matches_std_sort(v: Vec<u32>) -> bool {
        let mut expected = v.clone();
        expected.sort_unstable();
        let mut actual = v;
        quicksort(&mut actual, |x, y| x.cmp(y));
        actual == expected
    }

    #[quickcheck]
    fn sorts_reversed_input(v: Vec<u32>) -> bool {
        let mut expected = v.clone();
        expected.sort_unstable();
        let mut actual = expected.clone();
        actual.reverse();
        quicksort(&mut actual, |x, y| x.cmp(y));
        actual == expected
    }
}
