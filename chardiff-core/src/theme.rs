//! Color themes for diff rendering.

use owo_colors::Rgb;

use crate::ChangeKind;

/// Color theme for diff rendering.
///
/// The default uses Tokyo Night colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTheme {
    /// Color for removed content (default: red)
    pub removed: Rgb,

    /// Color for added content (default: green)
    pub added: Rgb,

    /// Color for unchanged content (default: white)
    pub unchanged: Rgb,
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self::TOKYO_NIGHT
    }
}

impl DiffTheme {
    /// Tokyo Night color theme (default).
    pub const TOKYO_NIGHT: Self = Self {
        removed: Rgb(247, 118, 142),   // red
        added: Rgb(158, 206, 106),     // green
        unchanged: Rgb(192, 202, 245), // white
    };

    /// Get the color for a change kind.
    pub const fn color_for(&self, kind: ChangeKind) -> Rgb {
        match kind {
            ChangeKind::Unchanged => self.unchanged,
            ChangeKind::Added => self.added,
            ChangeKind::Removed => self.removed,
        }
    }
}
