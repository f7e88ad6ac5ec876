use colored::*;
use greeter_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Bracketed tag printed in front of every log line.
pub fn level_tag(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        Level::DEBUG => "[?]".blue(),
        Level::TRACE => "[ ]".dimmed(),
    }
}

/// `<tag> <target> <fields>` on a single line.
pub struct GreeterFormatter;

impl<S, N> FormatEvent<S, N> for GreeterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(writer, "{} {} ", level_tag(meta.level()), meta.target().dimmed())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Builds the diagnostic subscriber. The filter comes from `cfg` alone.
pub fn subscriber<W>(cfg: &Config, make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_filter))
        .with_writer(make_writer)
        .event_format(GreeterFormatter)
        .finish()
}

/// Installs the stderr logger. Stdout is reserved for the greeting.
pub fn init_logging(cfg: &Config) {
    let _ = tracing::subscriber::set_global_default(subscriber(cfg, std::io::stderr));
}
