mod error;
mod method;

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::order::NaturalOrder;
use crate::utils::{mergesort, quicksort};

pub use self::error::{ListError, Result};
pub use self::method::SortMethod;

/// Slot count of a list created with `DynamicList::new`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Caller supplied ordering for `DynamicList::sort_with`.
pub type Comparator<'a, T> = &'a dyn Fn(&T, &T) -> Ordering;

/// Array backed list with explicit capacity.
///
/// Slots `[0, len)` always hold a value, slots `[len, capacity)` are `None`.
/// Storage grows by doubling and never shrinks.
///
/// # Examples
///
/// ```
/// use dynamic_list::{DynamicList, SortMethod};
///
/// let mut list = DynamicList::from(vec![3, 1, 2]);
/// list.add(0);
/// list.sort_with(SortMethod::MergeSort, None);
/// assert_eq!(list.get(0), Ok(&0));
/// assert_eq!(list.size(), 4);
/// ```
#[derive(Clone)]
pub struct DynamicList<T> {
    storage: Box<[Option<T>]>,
    len: usize,
}

fn empty_storage<T>(capacity: usize) -> Box<[Option<T>]> {
    (0 .. capacity).map(|_| None).collect()
}

impl<T> DynamicList<T> {
    pub fn new() -> Self {
        Self { storage: empty_storage(DEFAULT_CAPACITY), len: 0 }
    }

    /// Fails with `InvalidArgument` when `capacity` is negative.
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let slots = usize::try_from(capacity).map_err(|_| ListError::InvalidArgument { capacity })?;
        Ok(Self { storage: empty_storage(slots), len: 0 })
    }

    /// Copies every element of `source` in order. Capacity equals the number of
    /// elements copied. Fails with `NullInput` when there is no source.
    pub fn from_source<I>(source: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(ListError::NullInput)?;
        Ok(Self::from_iter(source))
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn add(&mut self, element: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.storage[self.len] = Some(element);
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.storage[.. self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ListError::IndexOutOfRange { index, len: self.len })
    }

    /// Places `element` at `index`, shifting the tail one slot right.
    /// `index == size()` appends.
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange { index, len: self.len });
        }

        if self.len == self.capacity() {
            self.grow();
        }

        // The slot at `len` is free, rotating brings it to `index`.
        self.storage[index ..= self.len].rotate_right(1);
        self.storage[index] = Some(element);
        self.len += 1;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let removed = self.storage[.. len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ListError::IndexOutOfRange { index, len })?;

        self.storage[index .. len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.storage[.. self.len].iter_mut() {
            *slot = None;
        }

        debug!(dropped = self.len, capacity = self.capacity(), "list cleared");
        self.len = 0;
    }

    /// Quicksort by the caller's ordering.
    pub fn sort_by<F>(&mut self, comparator: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.dispatch(SortMethod::default(), comparator);
    }

    fn grow(&mut self) {
        let capacity = self.capacity();
        let new_capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity.saturating_mul(2)
        };

        trace!(capacity, new_capacity, "growing list storage");
        let mut storage = mem::take(&mut self.storage).into_vec();
        storage.resize_with(new_capacity, || None);
        self.storage = storage.into_boxed_slice();
    }

    fn dispatch<F>(&mut self, method: SortMethod, comparator: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        debug!(%method, len = self.len, "sorting list");
        let compare = |a: &Option<T>, b: &Option<T>| match (a, b) {
            (Some(a), Some(b)) => comparator(a, b),
            // Live slots are always occupied; both sorts finish comparing
            // before they move anything.
            _ => Ordering::Equal,
        };

        let live = &mut self.storage[.. self.len];
        match method {
            SortMethod::QuickSort => quicksort(live, compare),
            SortMethod::MergeSort => mergesort(live, compare),
        }
    }

    fn live(&self) -> impl Iterator<Item = &T> + '_ {
        self.storage[.. self.len].iter().flatten()
    }
}

impl<T: NaturalOrder> DynamicList<T> {
    /// Quicksort by the element's natural order.
    pub fn sort(&mut self) {
        self.sort_with(SortMethod::default(), None);
    }

    /// Sorts with `method`, by `comparator` when given and by the natural
    /// order otherwise.
    pub fn sort_with(&mut self, method: SortMethod, comparator: Option<Comparator<'_, T>>) {
        match comparator {
            Some(comparator) => self.dispatch(method, comparator),
            None => self.dispatch(method, T::natural_cmp),
        }
    }
}

impl<T> Default for DynamicList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynamicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let storage: Box<[Option<T>]> = iter.into_iter().map(Some).collect();
        Self { len: storage.len(), storage }
    }
}

impl<T> From<Vec<T>> for DynamicList<T> {
    fn from(source: Vec<T>) -> Self {
        source.into_iter().collect()
    }
}

/// Only the first `size()` slots take part; capacity is ignored.
impl<T: PartialEq> PartialEq for DynamicList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.storage[.. self.len] == other.storage[.. other.len]
    }
}

impl<T: Eq> Eq for DynamicList<T> {}

impl<T: Hash> Hash for DynamicList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for element in self.live() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for DynamicList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicList{{elements=[")?;
        for (i, element) in self.live().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "], size={}}}", self.len)
    }
}

struct Elements<'a, T>(&'a DynamicList<T>);

impl<'a, T: fmt::Debug> fmt::Debug for Elements<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.live()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicList")
            .field("elements", &Elements(self))
            .field("size", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
