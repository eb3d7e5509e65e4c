pub mod quicksort;
pub mod mergesort;

pub use quicksort::quicksort;
pub use mergesort::mergesort;
