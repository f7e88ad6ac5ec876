pub const DEFAULT_LOG_FILTER: &str = "warn";

pub struct Config {
    /// `tracing-subscriber` filter directive for diagnostic logs.
    ///
    /// Fixed at build time. Nothing in the process environment overrides it.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
