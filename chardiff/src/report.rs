//! Text diff report with multi-format rendering capabilities.
//!
//! This module provides [`DiffReport`], which splits two texts into units,
//! classifies them, and keeps the result around so it can be rendered as
//! plain text, ANSI-colored text, or HTML without recomputing anything.

use chardiff_core::{
    AnsiBackend, ColorBackend, DiffStats, Run, RenderOptions, TextUnit, coalesce,
    render_to_string,
};

use crate::tracing_macros::debug;
use crate::unit::{Unit, code_points, code_units, graphemes};
use crate::SequenceDiff;

/// Which of the two compared texts to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first text; holds unchanged and removed runs.
    Left,
    /// The second text; holds unchanged and added runs.
    Right,
}

/// A classified pair of texts, ready to be rendered.
///
/// # Example
///
/// ```
/// use chardiff::{DiffReport, Side, Unit};
///
/// let report = DiffReport::new("abc", "axc", Unit::CodePoint);
///
/// assert_eq!(report.lcs_len(), 2);
/// assert_eq!(report.render_plain(Side::Left), "a[-b-]c");
/// assert_eq!(report.render_plain(Side::Right), "a{+x+}c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    unit: Unit,
    lcs_len: usize,
    left: Vec<Run>,
    right: Vec<Run>,
    stats: DiffStats,
}

impl DiffReport {
    /// Diff `text1` against `text2`, comparing them unit by unit.
    ///
    /// Either text may be empty. Runs in O(n·m) time and space in the number
    /// of units, so callers facing untrusted input should bound its size.
    pub fn new(text1: &str, text2: &str, unit: Unit) -> Self {
        match unit {
            Unit::CodeUnit => Self::from_units(unit, &code_units(text1), &code_units(text2)),
            Unit::CodePoint => Self::from_units(unit, &code_points(text1), &code_points(text2)),
            Unit::Grapheme => Self::from_units(unit, &graphemes(text1), &graphemes(text2)),
        }
    }

    fn from_units<T: TextUnit>(unit: Unit, a: &[T], b: &[T]) -> Self {
        let diff = SequenceDiff::new(a, b);
        let (left, right) = diff.classify();
        let stats = DiffStats::from_sides(&left, &right);

        debug!(
            %unit,
            left_len = a.len(),
            right_len = b.len(),
            lcs = diff.lcs_len(),
            "classified texts"
        );

        Self {
            unit,
            lcs_len: diff.lcs_len(),
            left: coalesce(&left),
            right: coalesce(&right),
            stats,
        }
    }

    /// The unit both texts were split into.
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Length of the longest common subsequence, in units.
    pub const fn lcs_len(&self) -> usize {
        self.lcs_len
    }

    /// Unit counts per classification.
    pub const fn stats(&self) -> DiffStats {
        self.stats
    }

    /// The classified runs of one side.
    pub fn runs(&self, side: Side) -> &[Run] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Render one side with custom options.
    pub fn render_with<B: ColorBackend>(&self, side: Side, opts: &RenderOptions<B>) -> String {
        render_to_string(self.runs(side), opts)
    }

    /// Render one side without colors, using `wdiff`-style markers.
    pub fn render_plain(&self, side: Side) -> String {
        self.render_with(side, &RenderOptions::plain())
    }

    /// Render one side with ANSI colors from the default theme.
    pub fn render_ansi(&self, side: Side) -> String {
        self.render_with(side, &RenderOptions::<AnsiBackend>::default())
    }

    /// Render one side as a sequence of `<span class="...">` elements.
    pub fn render_html(&self, side: Side) -> String {
        self.render_with(side, &RenderOptions::html())
    }
}
