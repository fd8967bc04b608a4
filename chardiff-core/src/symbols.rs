//! Symbols used for diff rendering.

/// Markers wrapped around changed runs when rendering without colors.
///
/// The defaults follow the `wdiff` convention, so `abc` against `axc`
/// renders as `a[-b-]c` on the left and `a{+x+}c` on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSymbols {
    /// Opening marker for removed content (default: "[-")
    pub removed_open: &'static str,

    /// Closing marker for removed content (default: "-]")
    pub removed_close: &'static str,

    /// Opening marker for added content (default: "{+")
    pub added_open: &'static str,

    /// Closing marker for added content (default: "+}")
    pub added_close: &'static str,
}

impl Default for DiffSymbols {
    fn default() -> Self {
        Self::WDIFF
    }
}

impl DiffSymbols {
    /// `wdiff`-style markers: `[-removed-]` and `{+added+}`
    pub const WDIFF: Self = Self {
        removed_open: "[-",
        removed_close: "-]",
        added_open: "{+",
        added_close: "+}",
    };

    /// No markers at all; the rendering is just the text of the side.
    pub const NONE: Self = Self {
        removed_open: "",
        removed_close: "",
        added_open: "",
        added_close: "",
    };

    /// Opening and closing markers for a change kind, if it has any.
    pub const fn markers(&self, kind: ChangeKind) -> Option<(&'static str, &'static str)> {
        match kind {
            ChangeKind::Unchanged => None,
            ChangeKind::Removed => Some((self.removed_open, self.removed_close)),
            ChangeKind::Added => Some((self.added_open, self.added_close)),
        }
    }
}

/// How a single unit of text was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Part of the longest common subsequence; present on both sides
    Unchanged,
    /// Only in the second text
    Added,
    /// Only in the first text
    Removed,
}

impl ChangeKind {
    /// CSS class name used for this kind in HTML output.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }

    /// Returns true if this change should be highlighted (not unchanged).
    pub const fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl core::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.css_class())
    }
}
