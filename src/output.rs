//! File naming, saving, and the download step.

use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::DemoError;
use crate::ports::ImageDownloader;

/// Extension given to every saved image.
pub const IMAGE_EXTENSION: &str = "png";

/// Default file name: `generated_image_<YYYYMMDD_HHMMSS>.png` in local time.
///
/// Second precision only; two calls within the same second yield the same
/// name and the later download overwrites the earlier one.
#[must_use]
pub fn timestamped_filename() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("generated_image_{timestamp}.{IMAGE_EXTENSION}")
}

/// File name for the `index`-th (1-based) image of a run.
#[must_use]
pub fn indexed_filename(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index}.{IMAGE_EXTENSION}")
}

/// Write `data` to `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_image(data: &[u8], path: &Path) -> Result<(), DemoError> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

/// Fetch `url` and save the body to `filename` (or a timestamped name).
///
/// Returns the file name on success. Any failure is reported on the console
/// and yields `None`; a failed fetch never creates a file.
pub async fn download_image(
    downloader: &dyn ImageDownloader,
    url: &str,
    filename: Option<&str>,
) -> Option<String> {
    let filename = filename.map_or_else(timestamped_filename, str::to_string);

    let result = match downloader.fetch(url).await {
        Ok(image) => save_image(&image.data, Path::new(&filename)).map(|()| image.data.len()),
        Err(e) => Err(e),
    };

    match result {
        Ok(bytes) => {
            tracing::debug!(%filename, bytes, "image written");
            println!("✓ Image saved to: {filename}");
            Some(filename)
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "download failed");
            println!("✗ Error downloading image: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::image_downloader::{DownloadedImage, FetchFuture};

    struct CannedDownloader(Result<Vec<u8>, u16>);

    impl ImageDownloader for CannedDownloader {
        fn fetch(&self, url: &str) -> FetchFuture<'_> {
            let result = match &self.0 {
                Ok(data) => Ok(DownloadedImage { data: data.clone() }),
                Err(status) => Err(DemoError::Api {
                    status: *status,
                    message: format!("GET {url} failed"),
                }),
            };
            Box::pin(async move { result })
        }
    }

    fn scratch(name: &str) -> String {
        let dir = std::env::temp_dir().join("dalle_demo_output_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = std::fs::remove_file(&path);
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn timestamped_name_shape() {
        let name = timestamped_filename();
        let stamp = name
            .strip_prefix("generated_image_")
            .and_then(|s| s.strip_suffix(".png"))
            .unwrap();
        assert_eq!(stamp.len(), 15);
        assert_eq!(&stamp[8..9], "_");
        assert!(stamp.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn timestamped_names_collide_within_a_second() {
        for _ in 0..5 {
            let before = Local::now().format("%Y%m%d_%H%M%S").to_string();
            let first = timestamped_filename();
            let second = timestamped_filename();
            let after = Local::now().format("%Y%m%d_%H%M%S").to_string();
            if before == after {
                assert_eq!(first, second);
                assert_eq!(first, format!("generated_image_{before}.png"));
                return;
            }
        }
        panic!("clock crossed a second boundary on every attempt");
    }

    #[test]
    fn indexed_names() {
        assert_eq!(indexed_filename("cybersecurity_demo", 1), "cybersecurity_demo_1.png");
        assert_eq!(indexed_filename("poster", 10), "poster_10.png");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let path = scratch("overwrite.png");
        save_image(b"first version, longer", Path::new(&path)).unwrap();
        save_image(b"second", Path::new(&path)).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn download_writes_exact_bytes() {
        let body: Vec<u8> = (0..=255).collect();
        let path = scratch("exact.png");

        let saved = download_image(&CannedDownloader(Ok(body.clone())), "http://x/a.png", Some(&path))
            .await;

        assert_eq!(saved.as_deref(), Some(path.as_str()));
        assert_eq!(std::fs::read(&path).unwrap(), body);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn failed_download_creates_no_file() {
        for status in [404, 500] {
            let path = scratch(&format!("failed_{status}.png"));

            let saved =
                download_image(&CannedDownloader(Err(status)), "http://x/a.png", Some(&path)).await;

            assert!(saved.is_none());
            assert!(!Path::new(&path).exists());
        }
    }

    #[tokio::test]
    async fn http_error_status_creates_no_file() {
        use crate::adapters::live::http::{HttpDownloader, DEFAULT_DOWNLOAD_TIMEOUT};
        use crate::adapters::live::test_server::serve_once;

        let (base, server) = serve_once(404, "text/plain", b"not found".to_vec()).await;
        let path = scratch("http_404.png");
        let downloader = HttpDownloader::new(DEFAULT_DOWNLOAD_TIMEOUT).unwrap();

        let saved = download_image(&downloader, &format!("{base}/a.png"), Some(&path)).await;

        assert!(saved.is_none());
        assert!(!Path::new(&path).exists());
        let _ = server.await;
    }
}
