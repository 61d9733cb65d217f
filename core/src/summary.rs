//! One full reporting pass: scan, classify, gate, render.

use banwatch_common::config::LogWindow;
use tracing::{debug, warn};

use crate::classifier;
use crate::journal::{JournalError, LogSource};
use crate::report;

/// Runs one pass over `window` and renders the report to deliver.
///
/// Returns `Ok(None)` when there is nothing worth notifying: no
/// Ignored/Found/Banned addresses and no firewall blocks. A failed or empty
/// general scan short-circuits to the degraded report without touching the
/// firewall scan; a firewall scan failure aborts the run.
pub async fn summarize<S>(source: &S, window: LogWindow) -> Result<Option<String>, JournalError>
where
    S: LogSource,
{
    let logs = match source.system_logs(window).await {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => {
            warn!(
                "journal scan returned nothing for the last {} hour(s)",
                window.hours()
            );
            return Ok(Some(report::render_unavailable()));
        }
        Err(err) => {
            warn!("journal scan failed: {err}");
            return Ok(Some(report::render_unavailable()));
        }
    };

    let firewall_blocks = source.firewall_logs(window).await?;

    let classification = classifier::classify(&logs);
    debug!(
        "classified {} ignored, {} found, {} banned, {} other",
        classification.ignored.len(),
        classification.found.len(),
        classification.banned.len(),
        classification.other.len()
    );

    if !classification.has_decisions() && firewall_blocks.is_empty() {
        return Ok(None);
    }

    Ok(Some(report::render(&classification, &firewall_blocks)))
}
