use std::cmp::Ordering;

/// Total ordering intrinsic to an element type.
///
/// Used by the list whenever a sort is requested without an explicit comparator.
/// Floats order by IEEE 754 `totalOrder`, so `-0.0 < 0.0` and NaN sorts after
/// positive infinity.
pub trait NaturalOrder {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

impl_natural_order!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, String, &str,
);

impl NaturalOrder for f32 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl NaturalOrder for f64 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: NaturalOrder> NaturalOrder for Option<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.natural_cmp(b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<A: NaturalOrder, B: NaturalOrder> NaturalOrder for (A, B) {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.0.natural_cmp(&other.0).then_with(|| self.1.natural_cmp(&other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_are_totally_ordered() {
        assert_eq!(1.0f64.natural_cmp(&2.0), Ordering::Less);
        assert_eq!((-0.0f64).natural_cmp(&0.0), Ordering::Less);
        assert_eq!(std::f64::NAN.natural_cmp(&std::f64::INFINITY), Ordering::Greater);
        assert_eq!(3.3f32.natural_cmp(&3.3), Ordering::Equal);
    }

    #[test]
    fn strings_follow_ord() {
        assert_eq!("apple".natural_cmp(&"banana"), Ordering::Less);
        assert_eq!(String::from("b").natural_cmp(&String::from("a")), Ordering::Greater);
    }

    #[test]
    fn tuples_compare_lexicographically() {
        assert_eq!((1, 'b').natural_cmp(&(1, 'a')), Ordering::Greater);
        assert_eq!((0, 'z').natural_cmp(&(1, 'a')), Ordering::Less);
    }
}
