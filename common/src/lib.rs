//! Data model and configuration shared by the banwatch crates.

pub mod buckets;
pub mod config;
