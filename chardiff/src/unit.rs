//! Atomic comparison units.
//!
//! Two texts are compared unit-for-unit. Which unit is used is an explicit
//! choice: the browser front-end this crate grew out of compared UTF-16
//! code units, which is why [`Unit::CodeUnit`] is the default.

use core::fmt;
use core::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

/// The atomic unit two texts are split into before diffing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// UTF-16 code units. Characters outside the BMP are two units, so a
    /// surrogate pair can be split between two classifications.
    #[default]
    CodeUnit,
    /// Unicode scalar values (`char`). Combining marks are separate units.
    CodePoint,
    /// Extended grapheme clusters, i.e. user-perceived characters.
    Grapheme,
}

impl Unit {
    /// Every unit, in order of increasing granularity.
    pub const ALL: [Unit; 3] = [Unit::CodeUnit, Unit::CodePoint, Unit::Grapheme];

    /// The name used on the command line and in `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::CodeUnit => "code-unit",
            Unit::CodePoint => "code-point",
            Unit::Grapheme => "grapheme",
        }
    }

    /// How many units of this kind `text` is made of.
    pub fn count(self, text: &str) -> usize {
        match self {
            Unit::CodeUnit => text.encode_utf16().count(),
            Unit::CodePoint => text.chars().count(),
            Unit::Grapheme => text.graphemes(true).count(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a [`Unit`] from an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comparison unit `{0}` (expected code-unit, code-point or grapheme)")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| UnknownUnit(s.to_owned()))
    }
}

/// Split a text into UTF-16 code units.
pub fn code_units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Split a text into Unicode scalar values.
pub fn code_points(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Split a text into extended grapheme clusters.
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}
