//! Walking an [`LcsTable`] to classify every unit of both inputs.

use chardiff_core::{ChangeKind, Segment};

use crate::LcsTable;
use crate::tracing_macros::trace;

/// Classify every unit of `a` and `b` as unchanged, added, or removed.
///
/// Returns one sequence per input. The first only holds `Unchanged` and
/// `Removed` segments and reproduces `a`; the second only holds `Unchanged`
/// and `Added` segments and reproduces `b`.
///
/// Both inputs are walked front to back. Equal units are always taken as
/// unchanged. Otherwise the walk skips the unit of `b` (marking it added)
/// whenever that keeps at least as long a common subsequence as skipping the
/// unit of `a`; on a tie, additions are emitted before removals. This order
/// is fixed so the same inputs always produce the same output.
///
/// # Panics
///
/// Panics if `table` was not built from inputs of the same lengths as `a`
/// and `b`. Use [`SequenceDiff`] to keep the table and its inputs together.
pub fn classify<T: Copy + PartialEq>(
    a: &[T],
    b: &[T],
    table: &LcsTable,
) -> (Vec<Segment<T>>, Vec<Segment<T>>) {
    assert!(
        table.matches(a.len(), b.len()),
        "LCS table is {}x{} but the inputs need {}x{}",
        table.rows(),
        table.cols(),
        a.len() + 1,
        b.len() + 1
    );

    let (n, m) = (a.len(), b.len());
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(m);
    let (mut i, mut j) = (0, 0);

    while i < n || j < m {
        if i < n && j < m && a[i] == b[j] {
            left.push(Segment::new(a[i], ChangeKind::Unchanged));
            right.push(Segment::new(b[j], ChangeKind::Unchanged));
            i += 1;
            j += 1;
        } else if j < m && (i == n || table[(i, j + 1)] >= table[(i + 1, j)]) {
            trace!(i, j, "added");
            right.push(Segment::new(b[j], ChangeKind::Added));
            j += 1;
        } else {
            // i < n here: either j == m, or skipping a[i] keeps a longer LCS
            trace!(i, j, "removed");
            left.push(Segment::new(a[i], ChangeKind::Removed));
            i += 1;
        }
    }

    (left, right)
}

/// Two sequences together with the LCS table built from them.
///
/// Keeping the three together means [`classify`] can never be handed a
/// table of the wrong size.
#[derive(Debug, Clone)]
pub struct SequenceDiff<'a, T> {
    a: &'a [T],
    b: &'a [T],
    table: LcsTable,
}

impl<'a, T: Copy + PartialEq> SequenceDiff<'a, T> {
    /// Build the LCS table for `a` and `b`.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let table = LcsTable::build(a, b);
        Self { a, b, table }
    }

    /// The first input.
    pub const fn a(&self) -> &'a [T] {
        self.a
    }

    /// The second input.
    pub const fn b(&self) -> &'a [T] {
        self.b
    }

    /// The table built from both inputs.
    pub const fn table(&self) -> &LcsTable {
        &self.table
    }

    /// Length of the longest common subsequence.
    pub fn lcs_len(&self) -> usize {
        self.table.lcs_len()
    }

    /// Classify both inputs. See [`classify`].
    pub fn classify(&self) -> (Vec<Segment<T>>, Vec<Segment<T>>) {
        classify(self.a, self.b, &self.table)
    }
}
