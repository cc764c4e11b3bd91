use tracing::Level;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the welcome banner printed when the session starts.
    pub no_banner: bool,
    /// Each level suppresses more decoration.
    ///
    /// `1` hides the banner and section headers, `2` also hides the
    /// command table printed on start.
    pub quiet: u8,
    /// Raises the log level above the default `WARN`.
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn show_banner(&self) -> bool {
        !self.no_banner && self.quiet == 0
    }
}
