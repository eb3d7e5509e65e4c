/// Implements `NaturalOrder` for types whose `Ord` already is the natural order.
#[macro_export]
macro_rules! impl_natural_order {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::order::NaturalOrder for $t {
                #[inline]
                fn natural_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                    ::std::cmp::Ord::cmp(self, other)
                }
            }
        )*
    };
}
