//! Renders one run's findings into the notification body.
//!
//! The report is an ordered list of line fragments joined at the very end;
//! each fragment starts a fresh line, so the text never renders flush with
//! whatever precedes it in a notification client.

use banwatch_common::buckets::{AddrLines, Bucket, Classification};

/// Body sent when the journal could not be read at all.
const UNAVAILABLE_MESSAGE: &str = "Failed to retrieve logs.";

const RECAP_HEADER: &str = "IP recap:";
const FIREWALL_HEADER: &str = "Banned by ufw:";

/// Buckets shown with their stored lines, in report order.
const DETAIL_BUCKETS: &[Bucket] = &[Bucket::Ignored, Bucket::Found, Bucket::Banned];

/// Buckets recapped as bare address lists, in report order.
const RECAP_BUCKETS: &[Bucket] = &[
    Bucket::Ignored,
    Bucket::Found,
    Bucket::Banned,
    Bucket::Other,
];

/// Renders the full report: detail sections, recap, firewall section.
pub fn render(classification: &Classification, firewall_blocks: &str) -> String {
    let mut fragments: Vec<String> = Vec::new();

    for &bucket in DETAIL_BUCKETS {
        detail_section(&mut fragments, bucket.label(), classification.bucket(bucket));
    }

    fragments.push(RECAP_HEADER.to_string());
    for &bucket in RECAP_BUCKETS {
        recap_section(&mut fragments, bucket.label(), classification.bucket(bucket));
    }

    fragments.push(String::new());
    fragments.push(FIREWALL_HEADER.to_string());
    fragments.push(firewall_blocks.to_string());

    join_fragments(&fragments)
}

/// Renders the degraded report for a run whose journal scan came back empty
/// or failed outright.
pub fn render_unavailable() -> String {
    join_fragments(&[UNAVAILABLE_MESSAGE.to_string()])
}

/// Header plus every stored line per address, indented underneath it.
fn detail_section(fragments: &mut Vec<String>, label: &str, bucket: &AddrLines) {
    if bucket.is_empty() {
        return;
    }

    fragments.push(String::new());
    fragments.push(format!("{label}:"));
    for (addr, lines) in bucket.iter() {
        fragments.push(format!("- {addr}:"));
        for line in lines {
            fragments.push(format!("    - {line}"));
        }
    }
}

/// Header plus a flat, comma-separated address list.
fn recap_section(fragments: &mut Vec<String>, label: &str, bucket: &AddrLines) {
    if bucket.is_empty() {
        return;
    }

    fragments.push(String::new());
    fragments.push(format!("{label}:"));
    fragments.push(bucket.addrs().collect::<Vec<_>>().join(", "));
}

fn join_fragments(fragments: &[String]) -> String {
    let mut report = String::new();
    for fragment in fragments {
        report.push('\n');
        report.push_str(fragment);
    }
    report
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
