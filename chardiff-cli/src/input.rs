//! Acquiring and validating the two texts before any diffing happens.

use std::io::Read;
use std::path::PathBuf;

use chardiff::Unit;
use tracing::debug;

/// Message shown when either text is empty.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter text in both fields for comparison.";

/// Why the texts could not be handed to the diff.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// One of the texts is empty. The user can fix this, so it is reported
    /// as a short message rather than an error report.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    Empty,

    /// A text is larger than the configured limit.
    #[error(
        "the {side} text is {units} {unit} units long, over the limit of {limit} (raise it with --max-units)"
    )]
    TooLarge {
        /// `first` or `second`
        side: &'static str,
        /// Unit the length was measured in
        unit: Unit,
        /// Length of the text
        units: usize,
        /// Configured limit
        limit: usize,
    },

    /// The LCS table for the two texts would be larger than the configured
    /// budget, even though each text is within the per-text limit.
    #[error(
        "comparing {left_units} by {right_units} {unit} units needs a table of {cells} cells, over the limit of {limit} (raise it with --max-cells)"
    )]
    TableTooLarge {
        /// Unit the lengths were measured in
        unit: Unit,
        /// Length of the first text
        left_units: usize,
        /// Length of the second text
        right_units: usize,
        /// Cells the table would need, saturating at `usize::MAX`
        cells: usize,
        /// Configured limit
        limit: usize,
    },

    /// A file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// The path given on the command line
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Both sides asked for stdin.
    #[error("only one of the two texts can be read from stdin")]
    StdinTwice,
}

impl InputError {
    /// Whether this is the user-correctable empty-input case.
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The two texts to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texts {
    /// First text
    pub left: String,
    /// Second text
    pub right: String,
}

/// Where the texts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The arguments are the texts themselves.
    Literal,
    /// The arguments are paths; `-` is stdin.
    Files,
}

/// Collect both texts from their source.
pub fn acquire(left: &str, right: &str, source: Source) -> Result<Texts, InputError> {
    match source {
        Source::Literal => Ok(Texts {
            left: left.to_owned(),
            right: right.to_owned(),
        }),
        Source::Files => {
            if left == "-" && right == "-" {
                return Err(InputError::StdinTwice);
            }
            Ok(Texts {
                left: read_path(left)?,
                right: read_path(right)?,
            })
        }
    }
}

fn read_path(path: &str) -> Result<String, InputError> {
    let result = if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    let text = result.map_err(|source| InputError::Read {
        path: PathBuf::from(path),
        source,
    })?;
    debug!(path, bytes = text.len(), "read input");
    Ok(text)
}

/// Size policy applied before any table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limits {
    /// Longest accepted text, in units.
    pub units: Option<usize>,
    /// Largest accepted LCS table, in cells.
    pub cells: Option<usize>,
}

/// Cells in the LCS table for texts of `n` and `m` units.
pub fn table_cells(n: usize, m: usize) -> usize {
    n.saturating_add(1).saturating_mul(m.saturating_add(1))
}

/// Check that both texts can be diffed under the size policy.
///
/// Empty texts are rejected first, before any measuring. `limits.units`
/// bounds the length of each text in `unit`s; `limits.cells` bounds the
/// `(n + 1) × (m + 1)` table the two lengths need together, since that is
/// what gets allocated.
pub fn validate(texts: &Texts, unit: Unit, limits: Limits) -> Result<(), InputError> {
    if texts.left.is_empty() || texts.right.is_empty() {
        return Err(InputError::Empty);
    }

    let left_units = unit.count(&texts.left);
    let right_units = unit.count(&texts.right);

    if let Some(limit) = limits.units {
        for (side, units) in [("first", left_units), ("second", right_units)] {
            if units > limit {
                return Err(InputError::TooLarge {
                    side,
                    unit,
                    units,
                    limit,
                });
            }
        }
    }

    if let Some(limit) = limits.cells {
        let cells = table_cells(left_units, right_units);
        if cells > limit {
            return Err(InputError::TableTooLarge {
                unit,
                left_units,
                right_units,
                cells,
                limit,
            });
        }
    }

    Ok(())
}
