//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::http::HttpDownloader;
use crate::adapters::live::openai::OpenAiGenerator;
use crate::adapters::recording::image_downloader::RecordingImageDownloader;
use crate::adapters::recording::image_generator::RecordingImageGenerator;
use crate::adapters::replaying::image_downloader::ReplayingImageDownloader;
use crate::adapters::replaying::image_generator::ReplayingImageGenerator;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::{Config, API_KEY_ENV};
use crate::error::DemoError;
use crate::ports::{ImageDownloader, ImageGenerator};

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Image generator port.
    pub generator: Box<dyn ImageGenerator>,
    /// Image downloader port.
    pub downloader: Box<dyn ImageDownloader>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette to disk.
    ///
    /// The owning [`ServiceContext`] must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context.
    ///
    /// The credential is checked here, before any adapter can issue a request.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::MissingApiKey`] if the API key is not set, or a
    /// network error if the HTTP client cannot be built.
    pub fn live(config: &Config) -> Result<Self, DemoError> {
        let key =
            Config::api_key().ok_or(DemoError::MissingApiKey { env_var: API_KEY_ENV.into() })?;
        let generator = Box::new(OpenAiGenerator::new(key, &config.api.base_url));
        let downloader = Box::new(HttpDownloader::new(config.download.timeout())?);
        Ok(Self { generator, downloader })
    }

    /// Create a recording context that wraps the live adapters with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context cannot be created.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), DemoError> {
        let live = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".dalle-demo/cassettes").join(&timestamp).join("demo.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-demo"),
            get_commit_hash(),
        )));

        let ctx = Self {
            generator: Box::new(RecordingImageGenerator::new(live.generator, Arc::clone(&recorder))),
            downloader: Box::new(RecordingImageDownloader::new(
                live.downloader,
                Arc::clone(&recorder),
            )),
        };
        Ok((ctx, RecordingSession { recorder }))
    }

    /// Create a replaying context from a cassette file. No credential is needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, DemoError> {
        let replayer = load_cassette(path)
            .map_err(|e| DemoError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        Ok(Self {
            generator: Box::new(ReplayingImageGenerator::new(Arc::clone(&replayer))),
            downloader: Box::new(ReplayingImageDownloader::new(replayer)),
        })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
