use chardiff::Unit;
use clap::{Parser, ValueEnum};

use crate::input::Limits;

/// Show a character-level diff between two texts.
///
/// Units only in the first text are marked removed, units only in the
/// second text are marked added, and everything else is unchanged.
#[derive(Debug, Parser)]
#[command(name = "chardiff", version, about, after_help = EXIT_STATUS_HELP)]
pub struct Args {
    /// First text, or a path to read it from with --files ("-" for stdin)
    pub left: String,

    /// Second text, or a path to read it from with --files ("-" for stdin)
    pub right: String,

    /// Treat LEFT and RIGHT as file paths instead of literal text
    #[arg(long)]
    pub files: bool,

    /// Unit the texts are compared by: code-unit, code-point or grapheme
    #[arg(long, default_value_t = Unit::CodeUnit)]
    pub unit: Unit,

    /// Output format [default: ansi on a terminal, plain otherwise]
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Refuse texts longer than this many units (0 for no limit)
    #[arg(long, default_value_t = 20_000)]
    pub max_units: usize,

    /// Refuse texts whose LCS table would exceed this many cells, 8 bytes
    /// each (0 for no limit)
    #[arg(long, default_value_t = 16_000_000)]
    pub max_cells: usize,

    /// Print a summary line with unit counts after the diff
    #[arg(long)]
    pub stat: bool,
}

const EXIT_STATUS_HELP: &str = "\
Exit status:
  0  the diff was written
  1  a file could not be read or a size limit was exceeded
  2  the command line could not be parsed
  3  one of the texts is empty";

/// How the two classified texts are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// 24-bit terminal colors
    Ansi,
    /// No colors; changes wrapped in [-removed-] and {+added+}
    Plain,
    /// `<span class="...">` markup, one `<div>` per text
    Html,
}

impl Args {
    /// The requested format, or the one that fits where stdout goes.
    pub fn format(&self, stdout_is_terminal: bool) -> Format {
        self.format.unwrap_or_else(|| {
            let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
            if stdout_is_terminal && !no_color {
                Format::Ansi
            } else {
                Format::Plain
            }
        })
    }

    /// The size limits; `0` turns a limit off.
    pub fn limits(&self) -> Limits {
        Limits {
            units: (self.max_units > 0).then_some(self.max_units),
            cells: (self.max_cells > 0).then_some(self.max_cells),
        }
    }
}
