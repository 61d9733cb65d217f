mod commands;
mod terminal;

use banwatch_common::config::{Config, DEFAULT_TRUSTED_SRC, LogWindow};
use banwatch_core::journal::Journalctl;
use banwatch_core::notify::{self, NtfyClient};
use banwatch_core::summary;
use commands::CommandLine;
use terminal::logging;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        window: LogWindow::new(commands.hours)?,
        trusted_src: DEFAULT_TRUSTED_SRC,
    };

    let source = Journalctl::new(cfg.trusted_src);
    let Some(report) = summary::summarize(&source, cfg.window).await? else {
        info!(
            "nothing to report for the last {} hour(s)",
            cfg.window.hours()
        );
        return Ok(());
    };

    let client = NtfyClient::from_env()?;
    client.send(notify::TITLE, &report).await?;
    info!("notification sent ({} bytes)", report.len());

    Ok(())
}
