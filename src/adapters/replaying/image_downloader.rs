//! Replaying adapter for the `ImageDownloader` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::adapters::DOWNLOADER_PORT;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::image_downloader::{DownloadedImage, FetchFuture, ImageDownloader};

/// Serves recorded downloads from a cassette.
pub struct ReplayingImageDownloader {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageDownloader {
    /// Create a replaying downloader backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ImageDownloader for ReplayingImageDownloader {
    fn fetch(&self, _url: &str) -> FetchFuture<'_> {
        let output = next_output(&self.replayer, DOWNLOADER_PORT, "fetch");
        Box::pin(async move { replay_result::<DownloadedImage>(output?) })
    }
}
