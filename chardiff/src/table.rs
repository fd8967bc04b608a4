//! Longest-common-subsequence table over all suffix pairs.

use core::ops::Index;

use crate::tracing_macros::trace;

/// Dense table of LCS lengths for every pair of suffixes of two sequences.
///
/// Cell `(i, j)` holds the length of the longest common subsequence of
/// `a[i..]` and `b[j..]`, so `(0, 0)` is the LCS length of the whole inputs
/// and the last row and last column are all zero.
///
/// The table is `(a.len() + 1) × (b.len() + 1)` cells, stored row-major in
/// one allocation. Building it is O(n·m) in time and space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Build the table for `a` and `b`, filling from the last cell back to
    /// `(0, 0)`.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in (0..a.len()).rev() {
            for j in (0..b.len()).rev() {
                let mut length = cells[i * cols + j + 1].max(cells[(i + 1) * cols + j]);
                if a[i] == b[j] {
                    length = length.max(1 + cells[(i + 1) * cols + j + 1]);
                }
                cells[i * cols + j] = length;
            }
        }

        trace!(rows, cols, lcs = cells[0], "built LCS table");
        Self { rows, cols, cells }
    }

    /// LCS length of the suffixes starting at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i > a.len()` or `j > b.len()` for the inputs the table was
    /// built from.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self[(i, j)]
    }

    /// Number of rows, one more than the length of the first input.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, one more than the length of the second input.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.cells[0]
    }

    /// Whether this table was sized for inputs of length `a_len` and `b_len`.
    pub const fn matches(&self, a_len: usize, b_len: usize) -> bool {
        self.rows == a_len + 1 && self.cols == b_len + 1
    }

    /// One row of the table.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

impl Index<(usize, usize)> for LcsTable {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) out of bounds for a {}x{} LCS table",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}
