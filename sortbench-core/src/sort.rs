//! Instrumented Sorters
//!
//! Both algorithms sort in place and count every comparison and every element
//! movement. Comparisons are strict (`<` / `>`), so ties are never counted as
//! inversions and the counts match a textbook implementation exactly.
//!
//! Counting conventions:
//! - Selection sort: one comparison per scan step, one movement per exchange.
//! - Insertion sort: one comparison per element examined (including the one
//!   that stops the shift), one movement per shift. Placing `key` into the
//!   gap is not a movement.

use std::cmp::Ordering;

/// Operation counts from a single sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Number of strict-ordering predicate evaluations
    pub comparisons: u64,
    /// Number of element relocations (exchanges or shifts)
    pub movements: u64,
}

/// Sorted output plus its operation counts
#[derive(Debug, Clone, PartialEq)]
pub struct SortResult<T> {
    /// The input, now in non-descending order
    pub sorted: Vec<T>,
    /// Number of comparisons performed
    pub comparisons: u64,
    /// Number of movements performed
    pub movements: u64,
}

/// Errors raised while sorting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// Two elements had no ordering (e.g. a NaN)
    #[error("elements at positions {left} and {right} are not comparable")]
    Incomparable {
        /// Position of the left operand
        left: usize,
        /// Position of the right operand (or of the held key)
        right: usize,
    },
}

/// An in-place comparison sort that reports its operation counts.
///
/// Implementors plug into [`TrialRunner`](crate::TrialRunner) directly.
pub trait Sorter {
    /// Display name used in reports and file names
    fn name(&self) -> &'static str;

    /// Sort `data` in place, returning comparison and movement counts.
    fn sort_in_place<T: PartialOrd>(&self, data: &mut [T]) -> Result<OpCounts, SortError>;

    /// Sort an owned array and hand it back together with its counts.
    fn sort<T: PartialOrd>(&self, mut data: Vec<T>) -> Result<SortResult<T>, SortError> {
        let counts = self.sort_in_place(&mut data)?;
        Ok(SortResult {
            sorted: data,
            comparisons: counts.comparisons,
            movements: counts.movements,
        })
    }
}

/// Order `data[left]` against `data[right]`, failing on incomparable operands.
#[inline(always)]
fn order_at<T: PartialOrd>(
    data: &[T],
    left: usize,
    right: usize,
) -> Result<Ordering, SortError> {
    data[left]
        .partial_cmp(&data[right])
        .ok_or(SortError::Incomparable { left, right })
}

/// Selection sort: `n(n-1)/2` comparisons for every input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn sort_in_place<T: PartialOrd>(&self, data: &mut [T]) -> Result<OpCounts, SortError> {
        let mut counts = OpCounts::default();
        let n = data.len();

        for i in 0..n {
            let mut min_idx = i;
            for j in (i + 1)..n {
                counts.comparisons += 1;
                if order_at(data, j, min_idx)? == Ordering::Less {
                    min_idx = j;
                }
            }
            if min_idx != i {
                data.swap(i, min_idx);
                counts.movements += 1;
            }
        }

        Ok(counts)
    }
}

/// Insertion sort: `n-1` comparisons on sorted input, `n(n-1)/2` on reversed.
///
/// Equal elements are never shifted past each other, so the sort is stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn sort_in_place<T: PartialOrd>(&self, data: &mut [T]) -> Result<OpCounts, SortError> {
        let mut counts = OpCounts::default();

        for i in 1..data.len() {
            // `data[i]` is the key. Nothing moves until its gap is known, so
            // the key can be compared in place.
            let mut j = i;
            while j > 0 {
                counts.comparisons += 1;
                if order_at(data, j - 1, i)? == Ordering::Greater {
                    counts.movements += 1;
                    j -= 1;
                } else {
                    break;
                }
            }
            // Shift data[j..i] right by one and drop the key into the gap.
            if j < i {
                data[j..=i].rotate_right(1);
            }
        }

        Ok(counts)
    }
}

/// The two algorithms under comparison, selectable at run time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// [`SelectionSort`]
    Selection,
    /// [`InsertionSort`]
    Insertion,
}

impl Algorithm {
    /// Both algorithms, in the order they are run and reported
    pub const ALL: [Algorithm; 2] = [Algorithm::Selection, Algorithm::Insertion];

    /// File-name friendly identifier (`selection_sort`, `insertion_sort`)
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection_sort",
            Algorithm::Insertion => "insertion_sort",
        }
    }
}

impl Sorter for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => SelectionSort.name(),
            Algorithm::Insertion => InsertionSort.name(),
        }
    }

    fn sort_in_place<T: PartialOrd>(&self, data: &mut [T]) -> Result<OpCounts, SortError> {
        match self {
            Algorithm::Selection => SelectionSort.sort_in_place(data),
            Algorithm::Insertion => InsertionSort.sort_in_place(data),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
