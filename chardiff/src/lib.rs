#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod classify;
mod report;
mod table;
mod tracing_macros;
pub mod unit;

pub use classify::{SequenceDiff, classify};
pub use report::{DiffReport, Side};
pub use table::LcsTable;
pub use unit::{Unit, UnknownUnit};

// Re-export core types from chardiff-core
pub use chardiff_core::{
    AnsiBackend, ChangeKind, ColorBackend, DiffStats, DiffSymbols, DiffTheme, HtmlBackend,
    PlainBackend, RenderOptions, Run, Segment, TextUnit,
};
