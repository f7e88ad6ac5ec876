use std::ffi::OsString;

use clap::Parser;

/// The greeter recognizes no flags: `--help` and `--version` are switched off
/// and every argument, hyphenated or not, lands in `ignored`.
#[derive(Parser, Default, Debug)]
#[command(name = "greeter")]
#[command(about = "Prints a greeting.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CommandLine {
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub ignored: Vec<OsString>,
}

impl CommandLine {
    /// Never fails. Input clap refuses is treated like no input at all.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    pub fn parse_args_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }
}
