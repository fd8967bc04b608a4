#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod backend;
mod render;
mod symbols;
mod theme;
mod types;

pub use backend::{AnsiBackend, ColorBackend, HtmlBackend, PlainBackend};
pub use render::{RenderOptions, render, render_to_string};
pub use symbols::*;
pub use theme::*;
pub use types::*;
