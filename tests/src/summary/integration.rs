#![cfg(test)]
use async_trait::async_trait;
use banwatch_common::config::LogWindow;
use banwatch_core::journal::{JournalError, LogSource};
use banwatch_core::summary;

/// Canned journal content standing in for `journalctl`.
enum Canned {
    Text(String),
    Failure,
}

impl Canned {
    fn text(content: &str) -> Self {
        Canned::Text(content.to_string())
    }

    fn resolve(&self) -> Result<String, JournalError> {
        match self {
            Canned::Text(text) => Ok(text.clone()),
            Canned::Failure => Err(JournalError::Spawn(std::io::Error::other(
                "journalctl unavailable",
            ))),
        }
    }
}

struct FixtureSource {
    system: Canned,
    firewall: Canned,
}

#[async_trait]
impl LogSource for FixtureSource {
    async fn system_logs(&self, _window: LogWindow) -> Result<String, JournalError> {
        self.system.resolve()
    }

    async fn firewall_logs(&self, _window: LogWindow) -> Result<String, JournalError> {
        self.firewall.resolve()
    }
}

const BUSY_WINDOW: &str = "\
2025-08-22 14:03:11,482 fail2ban.filter [711]: INFO [sshd] Found 203.0.113.7 - 2025-08-22 14:03:11
2025-08-22 14:03:19,006 fail2ban.filter [711]: INFO [sshd] Ignore 192.168.1.77 by pi
2025-08-22 14:05:02,193 fail2ban.filter [711]: WARNING [sshd] 203.0.113.7 already banned
2025-08-22 14:07:48,551 fail2ban.filter [711]: DEBUG [sshd] Processing 198.51.100.23";

/// A scan window with journal traffic but no fail2ban decisions.
const QUIET_WINDOW: &str = "\
2025-08-22 02:11:09,114 fail2ban.filter [711]: DEBUG [sshd] Processing 198.51.100.23
Aug 22 02:14:51 gateway sshd[881]: Connection closed by 198.51.100.24 port 40022";

#[tokio::test]
async fn busy_window_renders_every_section() -> anyhow::Result<()> {
    let source = FixtureSource {
        system: Canned::text(BUSY_WINDOW),
        firewall: Canned::text("198.51.100.9\n"),
    };

    let report = summary::summarize(&source, LogWindow::default())
        .await?
        .expect("a busy window must produce a report");

    assert!(report.starts_with('\n'));
    assert!(report.contains("\nIgnored IPs:\n- 192.168.1.77:"));
    assert!(report.contains("\nFound IPs:\n- 203.0.113.7:"));
    assert!(report.contains("\nBanned IPs:\n- 203.0.113.7:"));
    assert!(report.contains("\nIP recap:"));
    assert!(report.contains("\nElse IPs:\n198.51.100.23"));
    assert!(report.ends_with("\nBanned by ufw:\n198.51.100.9\n"));
    Ok(())
}

#[tokio::test]
async fn quiet_window_reports_nothing() -> anyhow::Result<()> {
    let source = FixtureSource {
        system: Canned::text(QUIET_WINDOW),
        firewall: Canned::text(""),
    };

    let report = summary::summarize(&source, LogWindow::default()).await?;

    assert!(report.is_none(), "quiet windows must stay silent");
    Ok(())
}

#[tokio::test]
async fn chatter_without_decisions_stays_silent() {
    // 198.51.100.23 only ever reaches the Other bucket; on its own that is
    // not worth a notification.
    let source = FixtureSource {
        system: Canned::text(
            "2025-08-22 02:11:09,114 fail2ban.filter [711]: DEBUG [sshd] Processing 198.51.100.23",
        ),
        firewall: Canned::text(""),
    };

    let report = summary::summarize(&source, LogWindow::default()).await.unwrap();

    assert!(report.is_none());
}

#[tokio::test]
async fn firewall_blocks_alone_still_notify() {
    let source = FixtureSource {
        system: Canned::text(QUIET_WINDOW),
        firewall: Canned::text("203.0.113.66\n"),
    };

    let report = summary::summarize(&source, LogWindow::default())
        .await
        .unwrap()
        .expect("firewall blocks must produce a report");

    assert!(report.contains("Banned by ufw:"));
    assert!(report.contains("203.0.113.66"));
    assert!(!report.contains("Found IPs:"));
}

#[tokio::test]
async fn failed_scan_degrades_to_the_notice() {
    // The firewall fixture would fail too; the degraded path must never
    // reach it.
    let source = FixtureSource {
        system: Canned::Failure,
        firewall: Canned::Failure,
    };

    let report = summary::summarize(&source, LogWindow::default()).await.unwrap();

    assert_eq!(report.as_deref(), Some("\nFailed to retrieve logs."));
}

#[tokio::test]
async fn empty_scan_degrades_like_a_failure() {
    let source = FixtureSource {
        system: Canned::text(""),
        firewall: Canned::Failure,
    };

    let report = summary::summarize(&source, LogWindow::default()).await.unwrap();

    assert_eq!(report.as_deref(), Some("\nFailed to retrieve logs."));
}

#[tokio::test]
async fn firewall_failure_aborts_the_run() {
    let source = FixtureSource {
        system: Canned::text(BUSY_WINDOW),
        firewall: Canned::Failure,
    };

    let result = summary::summarize(&source, LogWindow::default()).await;

    assert!(result.is_err(), "firewall scan failures must propagate");
}

#[tokio::test]
async fn repeated_sightings_collapse_to_one_entry() {
    let line =
        "2025-08-22 14:03:11,482 fail2ban.filter [711]: INFO [sshd] Found 203.0.113.7 - retry";
    let source = FixtureSource {
        system: Canned::Text(format!("{line}\n{line}")),
        firewall: Canned::text(""),
    };

    let report = summary::summarize(&source, LogWindow::default())
        .await
        .unwrap()
        .expect("a Found decision must produce a report");

    assert_eq!(report.matches("- 203.0.113.7:").count(), 1);
}
