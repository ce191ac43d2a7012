//! Logging setup for the CLI
//!
//! Library crates log through the `log` facade. The subscriber installed
//! here bridges those records into `tracing` and prints them to stderr as
//! plain lines: info messages as-is, other levels behind a short prefix.
//! Extra filter directives can be given in `SX_LOG`.

use anyhow::Result;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable read for filter directives
pub const LOG_ENV_VAR: &str = "SX_LOG";

/// Level used when `SX_LOG` does not say otherwise
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Install the global subscriber and the `log` bridge.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(PlainFormat)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

/// One line per event, prefixed by level
struct PlainFormat;

impl<S, N> FormatEvent<S, N> for PlainFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        match *event.metadata().level() {
            Level::ERROR => write!(writer, "error: ")?,
            Level::WARN => write!(writer, "warning: ")?,
            Level::INFO => {}
            _ => write!(writer, "[verbose] ")?,
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
