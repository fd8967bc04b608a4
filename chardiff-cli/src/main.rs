use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use chardiff::DiffReport;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

mod cli;
mod input;
mod logging;
mod output;

use cli::Args;
use input::Source;

/// Exit status for input the user has to correct (an empty text). Kept apart
/// from clap's usage-error status 2.
const EXIT_INVALID_INPUT: u8 = 3;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    logging::init_standard_tracing();

    let args = Args::parse();
    let source = if args.files {
        Source::Files
    } else {
        Source::Literal
    };

    let texts = input::acquire(&args.left, &args.right, source).and_then(|texts| {
        input::validate(&texts, args.unit, args.limits())?;
        Ok(texts)
    });
    let texts = match texts {
        Ok(texts) => texts,
        Err(err) if err.is_empty_input() => {
            eprintln!("{err}");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
        Err(err) => return Err(err.into()),
    };

    let report = DiffReport::new(&texts.left, &texts.right, args.unit);
    info!(
        unit = %report.unit(),
        lcs = report.lcs_len(),
        added = report.stats().added,
        removed = report.stats().removed,
        "diff computed"
    );

    let stdout = std::io::stdout();
    let format = args.format(stdout.is_terminal());
    let mut out = stdout.lock();
    output::write_report(&mut out, &report, format, args.stat)
        .and_then(|()| out.flush())
        .wrap_err("failed to write the diff to stdout")?;

    Ok(ExitCode::SUCCESS)
}
