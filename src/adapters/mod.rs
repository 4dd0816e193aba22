//! Adapter implementations for port traits.
//!
//! - `live/` — Real HTTP implementations
//! - `recording/` — Record interactions to cassettes
//! - `replaying/` — Replay interactions from cassettes

pub mod live;
pub mod recording;
pub mod replaying;

/// Cassette port name for the image generator.
pub(crate) const GENERATOR_PORT: &str = "image_generator";
/// Cassette port name for the image downloader.
pub(crate) const DOWNLOADER_PORT: &str = "image_downloader";
