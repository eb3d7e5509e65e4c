use std::fmt;
use std::str::FromStr;

use super::error::ListError;

/// Algorithm used by `DynamicList::sort_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMethod {
    QuickSort,
    MergeSort,
}

impl Default for SortMethod {
    fn default() -> Self {
        SortMethod::QuickSort
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMethod::QuickSort => write!(f, "QUICK_SORT"),
            SortMethod::MergeSort => write!(f, "MERGE_SORT"),
        }
    }
}

/// Accepts `QUICK_SORT`, `quick-sort`, `quicksort`, `quick` and the merge
/// equivalents, ignoring case.
impl FromStr for SortMethod {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "quicksort" | "quick" => Ok(SortMethod::QuickSort),
            "mergesort" | "merge" => Ok(SortMethod::MergeSort),
            _ => Err(ListError::UnsupportedMethod(s.to_owned())),
        }
    }
}
