//! Array backed list with manual capacity management and a choice of two
//! in-place sorts.

#[macro_use]
mod macros;

pub mod list;
pub mod order;
pub mod utils;

pub use list::{Comparator, DynamicList, ListError, SortMethod, DEFAULT_CAPACITY};
pub use order::NaturalOrder;
