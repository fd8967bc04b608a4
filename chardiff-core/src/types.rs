//! Core diff types.
//!
//! These types represent the result of classifying two texts and are what
//! the renderers consume.

use crate::ChangeKind;

/// An atomic unit of text that can be compared and turned back into text.
///
/// Implemented for UTF-16 code units (`u16`), Unicode scalar values
/// (`char`) and grapheme clusters (`&str`).
pub trait TextUnit: PartialEq + Copy {
    /// Decode a contiguous run of units back into a string.
    fn decode(units: &[Self]) -> String;
}

impl TextUnit for u16 {
    /// Unpaired surrogates decode to U+FFFD.
    fn decode(units: &[Self]) -> String {
        String::from_utf16_lossy(units)
    }
}

impl TextUnit for char {
    fn decode(units: &[Self]) -> String {
        units.iter().collect()
    }
}

impl TextUnit for &str {
    fn decode(units: &[Self]) -> String {
        units.concat()
    }
}

/// A single unit of one input together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<T> {
    /// The unit taken from the input
    pub unit: T,
    /// How it was classified
    pub kind: ChangeKind,
}

impl<T> Segment<T> {
    /// Create a new segment.
    pub const fn new(unit: T, kind: ChangeKind) -> Self {
        Self { unit, kind }
    }
}

/// A maximal stretch of adjacent segments sharing one classification,
/// decoded back to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// The decoded text of the stretch
    pub text: String,
    /// Classification shared by every unit in the stretch
    pub kind: ChangeKind,
}

impl Run {
    /// Create a new run.
    pub fn new(text: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Group adjacent segments of equal kind into runs.
///
/// Concatenating the text of the returned runs reproduces the input the
/// segments were classified from (modulo lossy decoding of unpaired UTF-16
/// surrogates).
pub fn coalesce<T: TextUnit>(segments: &[Segment<T>]) -> Vec<Run> {
    segments
        .chunk_by(|a, b| a.kind == b.kind)
        .map(|chunk| {
            let units: Vec<T> = chunk.iter().map(|s| s.unit).collect();
            Run::new(T::decode(&units), chunk[0].kind)
        })
        .collect()
}

/// Unit counts for a classified pair of texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Units present in both texts (the LCS length)
    pub unchanged: usize,
    /// Units only in the second text
    pub added: usize,
    /// Units only in the first text
    pub removed: usize,
}

impl DiffStats {
    /// Count classifications over both sides of a diff.
    ///
    /// Unchanged units are counted once, from the left side.
    pub fn from_sides<T>(left: &[Segment<T>], right: &[Segment<T>]) -> Self {
        let mut stats = Self::default();
        for segment in left {
            match segment.kind {
                ChangeKind::Unchanged => stats.unchanged += 1,
                ChangeKind::Removed => stats.removed += 1,
                ChangeKind::Added => {}
            }
        }
        stats.added = right
            .iter()
            .filter(|s| s.kind == ChangeKind::Added)
            .count();
        stats
    }

    /// Returns true if both texts were identical.
    pub const fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

impl core::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} unchanged, {} added, {} removed",
            self.unchanged, self.added, self.removed
        )
    }
}
