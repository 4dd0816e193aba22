//! Cassettes: recorded port interactions, written in record mode and served
//! back in replay mode so runs are reproducible without network access.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
