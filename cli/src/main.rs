mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use greeter_common::config::Config;
use greeter_core::greeter::Greeter;
use terminal::logging;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config::default();
    logging::init_logging(&cfg);

    debug!(count = commands.ignored.len(), "ignoring command-line arguments");

    Greeter::new(io::stdout().lock()).run()?;
    Ok(())
}
