//! # Classification Buckets
//!
//! The shared outcome model for one reporting pass: which addresses the
//! filter logs mentioned, which bucket each line put them in, and the lines
//! themselves.
//!
//! Bucket membership is decided per line, never per address. Two lines about
//! the same address can legitimately land it in two different buckets; the
//! only dedup rule lives inside a single bucket (see [`AddrLines`]).

/// Classification outcome for a single filter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// fail2ban saw the address and deliberately ignored it.
    Ignored,
    /// A filter matched the address in incoming log traffic.
    Found,
    /// The address was (or already is) banned.
    Banned,
    /// Filter chatter that fits no known decision.
    Other,
}

impl Bucket {
    /// Section header used for this bucket in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Ignored => "Ignored IPs",
            Bucket::Found => "Found IPs",
            Bucket::Banned => "Banned IPs",
            Bucket::Other => "Else IPs",
        }
    }
}

/// Address keys mapped to the log lines that put them there, kept in
/// first-seen order so reports are stable for a given input.
#[derive(Debug, Default, Clone)]
pub struct AddrLines {
    entries: Vec<(String, Vec<String>)>,
}

impl AddrLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, addr: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == addr)
    }

    /// Records only the first line ever seen for `addr`; later calls for the
    /// same address are no-ops.
    pub fn insert_once(&mut self, addr: &str, line: &str) {
        if self.contains(addr) {
            return;
        }
        self.entries.push((addr.to_string(), vec![line.to_string()]));
    }

    /// Accumulates every line seen for `addr`, in encounter order.
    pub fn append(&mut self, addr: &str, line: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == addr) {
            Some((_, lines)) => lines.push(line.to_string()),
            None => self.entries.push((addr.to_string(), vec![line.to_string()])),
        }
    }

    pub fn lines(&self, addr: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == addr)
            .map(|(_, lines)| lines.as_slice())
    }

    /// Address keys in first-seen order.
    pub fn addrs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, lines)| (key.as_str(), lines.as_slice()))
    }
}

/// Everything one classifier pass produced, one [`AddrLines`] per bucket.
#[derive(Debug, Default)]
pub struct Classification {
    pub ignored: AddrLines,
    pub found: AddrLines,
    pub banned: AddrLines,
    pub other: AddrLines,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one (address, line) observation under `bucket`.
    ///
    /// Ignored/Found/Banned keep only the first line per address; Other
    /// accumulates them all.
    pub fn record(&mut self, bucket: Bucket, addr: &str, line: &str) {
        match bucket {
            Bucket::Ignored => self.ignored.insert_once(addr, line),
            Bucket::Found => self.found.insert_once(addr, line),
            Bucket::Banned => self.banned.insert_once(addr, line),
            Bucket::Other => self.other.append(addr, line),
        }
    }

    pub fn bucket(&self, bucket: Bucket) -> &AddrLines {
        match bucket {
            Bucket::Ignored => &self.ignored,
            Bucket::Found => &self.found,
            Bucket::Banned => &self.banned,
            Bucket::Other => &self.other,
        }
    }

    /// True when the filter logs carried at least one actual decision.
    ///
    /// Lines that only reached [`Bucket::Other`] do not count; on their own
    /// they are not worth a notification.
    pub fn has_decisions(&self) -> bool {
        !self.ignored.is_empty() || !self.found.is_empty() || !self.banned.is_empty()
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
