//! Character-wrapped monospace layout of the text the ink becomes.

pub mod engine;
pub mod metrics;
