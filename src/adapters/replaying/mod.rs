//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_downloader;
pub mod image_generator;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::DemoError;

/// Retrieve the next recorded output for a given port and method.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the port/method pair.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, DemoError> {
    let mut guard =
        replayer.lock().map_err(|e| DemoError::Replay(format!("replayer lock poisoned: {e}")))?;
    Ok(guard.next_interaction(port, method).output.clone())
}

/// Deserialize a replayed output as `Result<T, DemoError>`.
///
/// Recorded `Err` strings come back as [`DemoError::Replay`] carrying the
/// original message.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, DemoError> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        let msg = err_val.as_str().unwrap_or("replayed error").to_string();
        return Err(DemoError::Replay(msg));
    }
    let value = output.get("Ok").or_else(|| output.get("ok")).cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| DemoError::Replay(format!("malformed recorded output: {e}")))
}
