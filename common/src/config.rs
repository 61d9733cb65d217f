use std::net::Ipv4Addr;

use thiserror::Error;

/// Hours of journal history covered when no argument is given.
pub const DEFAULT_WINDOW_HOURS: u64 = 24;

/// Firewall blocks originating from this address are local noise and are
/// never reported.
pub const DEFAULT_TRUSTED_SRC: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 254);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the look-back window must cover at least one hour")]
    EmptyWindow,
}

/// How far back the journal queries reach, in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogWindow {
    hours: u64,
}

impl LogWindow {
    pub fn new(hours: u64) -> Result<Self, ConfigError> {
        if hours == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(Self { hours })
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }
}

impl Default for LogWindow {
    fn default() -> Self {
        Self {
            hours: DEFAULT_WINDOW_HOURS,
        }
    }
}

pub struct Config {
    /// How many hours of journal history each scan covers.
    pub window: LogWindow,
    /// LAN address whose firewall blocks are excluded from the report.
    pub trusted_src: Ipv4Addr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: LogWindow::default(),
            trusted_src: DEFAULT_TRUSTED_SRC,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
