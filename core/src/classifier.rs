//! # Filter Line Classification
//!
//! The heart of banwatch: turns the raw journal scan into per-address
//! buckets by reading fail2ban's filter chatter line by line.
//!
//! Classification is a fixed, ordered rule table. The first rule whose
//! predicate matches a line decides the bucket for every address extracted
//! from that line; lines matching no rule fall through to [`Bucket::Other`].

use std::sync::OnceLock;

use banwatch_common::buckets::{Bucket, Classification};
use regex::Regex;
use tracing::warn;

/// Only lines from the fail2ban filter component are classified; matched
/// case-insensitively because the journal casing varies across versions.
const FILTER_MARKER: &str = "fail2ban.filter";

/// fail2ban emits this clock warning with address-shaped tokens in it; it is
/// never about a real host.
const TIMEZONE_MARKER: &str = "timezone issue";

/// fail2ban's version string looks like a dotted quad and would otherwise be
/// reported as an address.
const VERSION_SENTINEL: &str = "28.0.6.1";

const IGNORE_MARKER: &str = "Ignore ";
const IGNORE_ACTOR_MARKER: &str = " by pi";
const FOUND_MARKER: &str = " Found ";
const BANNED_MARKER: &str = "banned";

/// Ordered rule table; the first predicate that matches decides the bucket.
const RULES: &[(fn(&str) -> bool, Bucket)] = &[
    (is_ignore_decision, Bucket::Ignored),
    (is_found_decision, Bucket::Found),
    (is_ban_decision, Bucket::Banned),
];

fn is_ignore_decision(line: &str) -> bool {
    line.contains(IGNORE_MARKER) && line.contains(IGNORE_ACTOR_MARKER)
}

/// Space-padded on both sides so "NotFound" and friends never match.
fn is_found_decision(line: &str) -> bool {
    line.contains(FOUND_MARKER)
}

fn is_ban_decision(line: &str) -> bool {
    line.to_lowercase().contains(BANNED_MARKER)
}

static ADDR_SHAPE: OnceLock<Regex> = OnceLock::new();

/// Dotted-quad shape only: `999.999.999.999` matches. The journal is free
/// text and octet range checking buys nothing here.
fn addr_shape() -> &'static Regex {
    ADDR_SHAPE.get_or_init(|| {
        Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("invalid address pattern")
    })
}

/// Buckets every fail2ban filter line in `logs` by the decision it reports.
///
/// Lines are processed in input order. Each extracted address is recorded
/// under the bucket its line classified into; Ignored/Found/Banned keep the
/// first line per address, Other keeps them all.
pub fn classify(logs: &str) -> Classification {
    let mut classification = Classification::new();

    for line in logs.lines() {
        if !line.to_lowercase().contains(FILTER_MARKER) {
            continue;
        }
        if line.contains(TIMEZONE_MARKER) {
            continue;
        }

        let addrs: Vec<&str> = addr_shape().find_iter(line).map(|m| m.as_str()).collect();
        if addrs.is_empty() {
            continue;
        }
        if addrs.len() > 1 {
            warn!("multiple addresses on one line: {line}");
        }

        let bucket = classify_line(line);
        for addr in addrs {
            if addr == VERSION_SENTINEL {
                continue;
            }
            classification.record(bucket, addr, line);
        }
    }

    classification
}

/// Applies the rule table to a single line.
fn classify_line(line: &str) -> Bucket {
    RULES
        .iter()
        .find(|(applies, _)| applies(line))
        .map(|(_, bucket)| *bucket)
        .unwrap_or(Bucket::Other)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
