//! Color backends for diff rendering.
//!
//! The render code only knows about change kinds (unchanged, added,
//! removed), and the backend decides how to actually style the text.

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::{ChangeKind, DiffTheme};

/// A backend that decides how to render classified text.
pub trait ColorBackend {
    /// Write styled text to the output.
    fn write_styled<W: Write>(&self, w: &mut W, text: &str, kind: ChangeKind)
    -> std::fmt::Result;

    /// Whether changed runs need textual markers around them because the
    /// styling alone cannot tell kinds apart.
    fn wants_markers(&self) -> bool {
        false
    }
}

/// Plain backend - no styling, just plain text.
///
/// Use this for tests and non-terminal output. Changed runs are told apart
/// by the markers in [`DiffSymbols`](crate::DiffSymbols).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl ColorBackend for PlainBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        _kind: ChangeKind,
    ) -> std::fmt::Result {
        w.write_str(text)
    }

    fn wants_markers(&self) -> bool {
        true
    }
}

/// ANSI backend - emits ANSI escape codes for terminal colors.
///
/// Removed text is also struck through so the left side still reads as
/// a deletion on terminals that drop 24-bit colors.
#[derive(Debug, Clone, Default)]
pub struct AnsiBackend {
    theme: DiffTheme,
}

impl AnsiBackend {
    /// Create a new ANSI backend with the given theme.
    pub const fn new(theme: DiffTheme) -> Self {
        Self { theme }
    }

    /// The theme colors are taken from.
    pub const fn theme(&self) -> &DiffTheme {
        &self.theme
    }
}

impl ColorBackend for AnsiBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        kind: ChangeKind,
    ) -> std::fmt::Result {
        let rgb = self.theme.color_for(kind);
        match kind {
            ChangeKind::Removed => write!(w, "{}", text.color(rgb).strikethrough()),
            ChangeKind::Added => write!(w, "{}", text.color(rgb).bold()),
            ChangeKind::Unchanged => write!(w, "{}", text.color(rgb)),
        }
    }
}

/// HTML backend - wraps every run in a `<span>` whose class names its kind.
///
/// Produces `<span class="unchanged">a</span><span class="removed">b</span>`,
/// the markup the browser front-end styles. Text content is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend;

impl ColorBackend for HtmlBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        kind: ChangeKind,
    ) -> std::fmt::Result {
        write!(w, "<span class=\"{}\">", kind.css_class())?;
        write_escaped(w, text)?;
        w.write_str("</span>")
    }
}

/// Escape special characters in HTML text content.
fn write_escaped<W: Write>(w: &mut W, s: &str) -> std::fmt::Result {
    for c in s.chars() {
        match c {
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '&' => w.write_str("&amp;")?,
            '"' => w.write_str("&quot;")?,
            '\'' => w.write_str("&#39;")?,
            _ => w.write_char(c)?,
        }
    }
    Ok(())
}
