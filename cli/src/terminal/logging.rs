use std::io;

use colored::*;
use kennel_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct KennelFormatter;

impl<S, N> FormatEvent<S, N> for KennelFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so they never
/// interleave with the prompts on stdout.
///
/// `RUST_LOG` takes precedence over the level derived from `-v`.
pub fn init_logging(cfg: &Config) {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(cfg.log_level()).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .event_format(KennelFormatter)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
