#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Test helpers shared by the chardiff crates.
//!
//! Annotate tests with `#[chardiff_testhelpers::test]` (or import it as
//! `test` and keep writing `#[test]`) to get a tracing subscriber and
//! readable panic backtraces in every test. The log filter is read from
//! `CHARDIFF_LOG` using `tracing_subscriber` target syntax, and defaults to
//! everything at `TRACE`.

pub use chardiff_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter for tests.
pub const LOG_ENV: &str = "CHARDIFF_LOG";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Timestamps log lines with the time since the first test started.
struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Frames that never help when reading a test failure.
fn is_harness_frame(name: &str) -> bool {
    const NOISE: &[&str] = &[
        "test::run_test",
        "test::__rust_begin_short_backtrace",
        "std::panicking::",
        "std::panic::",
        "core::panicking::",
        "std::sys::",
        "std::thread::Builder::spawn_unchecked_",
        "core::ops::function::FnOnce::call_once",
        "<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once",
        "__pthread",
    ];
    NOISE.iter().any(|prefix| name.starts_with(prefix))
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Full)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| frame.name.as_deref().is_none_or(|name| !is_harness_frame(name)));
        }))
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::AlwaysAnsi,
        )));

    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(Uptime)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_test_writer()
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Set up tracing and backtraces for the current test process.
///
/// Safe to call from every test: initialization happens exactly once per
/// process, whether tests run under `cargo test` or `cargo nextest run`.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}
