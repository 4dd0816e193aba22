//! Live adapter that fetches images with a plain HTTP GET.

use std::time::Duration;

use reqwest::Client;

use crate::error::DemoError;
use crate::ports::image_downloader::{DownloadedImage, FetchFuture, ImageDownloader};

/// Default per-download timeout.
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Live downloader backed by `reqwest`.
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    /// Create a downloader whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, DemoError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl ImageDownloader for HttpDownloader {
    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        let url = url.to_string();
        Box::pin(async move {
            let response = self.client.get(&url).send().await?.error_for_status()?;
            let data = response.bytes().await?.to_vec();
            tracing::debug!(%url, bytes = data.len(), "downloaded image");
            Ok(DownloadedImage { data })
        })
    }
}
