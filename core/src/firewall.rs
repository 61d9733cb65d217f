//! ufw block post-processing: the grep/cut/uniq/sort stage of the report.

use std::net::Ipv4Addr;

/// Kernel log marker for a packet the firewall dropped.
const BLOCK_MARKER: &str = "UFW BLOCK";

/// Position of the `SRC=` tag in ufw's kernel line when split on single
/// spaces: 1-based and counting empty fields, exactly like `cut -d' '`.
const SRC_FIELD: usize = 11;

/// Length of the `SRC=` tag dropped from the front of the extracted field.
const SRC_TAG_LEN: usize = 4;

/// Distills raw journal text into the blocked-source list for the report.
///
/// Keeps `UFW BLOCK` lines, drops those naming `trusted_src`, extracts the
/// source field positionally, then collapses adjacent duplicates, sorts, and
/// collapses again. Non-empty output keeps a trailing newline; no matches
/// yields the empty string.
pub fn blocked_sources(raw: &str, trusted_src: Ipv4Addr) -> String {
    let trusted_tag = format!("SRC={trusted_src}");

    let mut sources: Vec<String> = raw
        .lines()
        .filter(|line| line.contains(BLOCK_MARKER))
        .filter(|line| !line.contains(&trusted_tag))
        .filter_map(src_field)
        .map(strip_src_tag)
        .collect();

    sources.dedup();
    sources.sort();
    sources.dedup();

    if sources.is_empty() {
        return String::new();
    }

    let mut text = sources.join("\n");
    text.push('\n');
    text
}

/// `cut -d' ' -f 11` equivalent.
fn src_field(line: &str) -> Option<&str> {
    line.split(' ').nth(SRC_FIELD - 1)
}

/// `cut -c 5-` equivalent; positional, not prefix-aware.
fn strip_src_tag(field: &str) -> String {
    field.chars().skip(SRC_TAG_LEN).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
