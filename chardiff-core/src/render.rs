//! Rendering classified runs to output.

use std::fmt::{self, Write};

use crate::backend::{AnsiBackend, ColorBackend, HtmlBackend, PlainBackend};
use crate::{DiffSymbols, Run};

/// Options for rendering runs.
#[derive(Clone, Debug)]
pub struct RenderOptions<B: ColorBackend> {
    /// Markers to use around changed runs, for backends that want them.
    pub symbols: DiffSymbols,
    /// Color backend for styling output.
    pub backend: B,
}

impl Default for RenderOptions<AnsiBackend> {
    fn default() -> Self {
        Self::with_backend(AnsiBackend::default())
    }
}

impl RenderOptions<PlainBackend> {
    /// Create options with plain backend (no colors).
    pub fn plain() -> Self {
        Self::with_backend(PlainBackend)
    }
}

impl RenderOptions<HtmlBackend> {
    /// Create options producing `<span>` markup.
    pub fn html() -> Self {
        Self::with_backend(HtmlBackend)
    }
}

impl<B: ColorBackend> RenderOptions<B> {
    /// Create options with a custom backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            symbols: DiffSymbols::default(),
            backend,
        }
    }

    /// Replace the markers used around changed runs.
    pub fn with_symbols(mut self, symbols: DiffSymbols) -> Self {
        self.symbols = symbols;
        self
    }
}

/// Render one side of a diff to a writer.
pub fn render<W: Write, B: ColorBackend>(
    runs: &[Run],
    w: &mut W,
    opts: &RenderOptions<B>,
) -> fmt::Result {
    let markers = opts.backend.wants_markers();
    for run in runs {
        match opts.symbols.markers(run.kind).filter(|_| markers) {
            Some((open, close)) => {
                w.write_str(open)?;
                opts.backend.write_styled(w, &run.text, run.kind)?;
                w.write_str(close)?;
            }
            None => opts.backend.write_styled(w, &run.text, run.kind)?,
        }
    }
    Ok(())
}

/// Render one side of a diff to a String.
pub fn render_to_string<B: ColorBackend>(runs: &[Run], opts: &RenderOptions<B>) -> String {
    let mut out = String::new();
    render(runs, &mut out, opts).expect("writing to String cannot fail");
    out
}
