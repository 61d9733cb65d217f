//! # Journal Access
//!
//! The only place banwatch touches the running system. [`LogSource`] is the
//! seam between the pipeline and `journalctl`: one method per query, typed
//! failures, and no opinion about how the text gets produced. Everything
//! downstream can run against canned text instead.

use std::net::Ipv4Addr;
use std::process::{ExitStatus, Stdio};
use std::sync::OnceLock;

use async_trait::async_trait;
use banwatch_common::config::LogWindow;
use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::firewall;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to run journalctl: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("journalctl exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// One method per journal query the pipeline needs.
#[async_trait]
pub trait LogSource {
    /// Journal lines from the window that mention anything address-shaped.
    async fn system_logs(&self, window: LogWindow) -> Result<String, JournalError>;

    /// Deduplicated, sorted source addresses the firewall blocked in the
    /// window, one per line.
    async fn firewall_logs(&self, window: LogWindow) -> Result<String, JournalError>;
}

/// The real source: queries the local systemd journal.
pub struct Journalctl {
    trusted_src: Ipv4Addr,
}

impl Journalctl {
    pub fn new(trusted_src: Ipv4Addr) -> Self {
        Self { trusted_src }
    }
}

#[async_trait]
impl LogSource for Journalctl {
    async fn system_logs(&self, window: LogWindow) -> Result<String, JournalError> {
        let since = format!("{}h ago", window.hours());
        let raw = run_journalctl(&["-o", "cat", "--since", &since]).await?;
        Ok(addr_bearing_lines(&raw))
    }

    async fn firewall_logs(&self, window: LogWindow) -> Result<String, JournalError> {
        let since = format!("{} hours ago", window.hours());
        let raw = run_journalctl(&["--since", &since]).await?;
        Ok(firewall::blocked_sources(&raw, self.trusted_src))
    }
}

async fn run_journalctl(args: &[&str]) -> Result<String, JournalError> {
    debug!("running journalctl {}", args.join(" "));

    let output = Command::new("journalctl")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await?;

    if !output.status.success() {
        return Err(JournalError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

static COARSE_ADDR: OnceLock<Regex> = OnceLock::new();

/// Coarser than the classifier's shape on purpose: unbounded digit runs,
/// matching the pre-filter the scan has always used.
fn coarse_addr() -> &'static Regex {
    COARSE_ADDR.get_or_init(|| {
        Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+").expect("invalid coarse address pattern")
    })
}

/// Keeps only lines that mention something address-shaped, trimmed as one
/// blob. Empty output means the window had nothing for us.
fn addr_bearing_lines(raw: &str) -> String {
    raw.lines()
        .filter(|line| coarse_addr().is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
