//! Scanning, classification, rendering and delivery for banwatch.

pub mod classifier;
pub mod firewall;
pub mod journal;
pub mod notify;
pub mod report;
pub mod summary;
