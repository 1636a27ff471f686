use crate::counter::now_millis;
use crate::errors::StorageError;
use crate::models::CounterState;
use std::{ffi::OsString, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Reads the stored document, falling back to a fresh zero state when it is
/// missing or unreadable.
pub async fn load_state(path: &Path) -> CounterState {
    match read_state(path).await {
        Ok(state) => state,
        Err(StorageError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            CounterState::zero(now_millis())
        }
        Err(err) => {
            error!(path = %path.display(), "failed to load data file: {err}");
            CounterState::zero(now_millis())
        }
    }
}

async fn read_state(path: &Path) -> Result<CounterState, StorageError> {
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Replaces the stored document with `state`. The previous document stays
/// intact unless the rename succeeds.
pub async fn persist_state(path: &Path, state: &CounterState) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(state)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    if let Err(err) = fs::write(&tmp, payload).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(err.into());
    }
    if let Err(err) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(err.into());
    }
    Ok(())
}

/// Best-effort save: failures are logged and swallowed.
pub async fn save_state(path: &Path, state: &CounterState) -> bool {
    match persist_state(path, state).await {
        Ok(()) => true,
        Err(err) => {
            error!(path = %path.display(), "failed to save data file: {err}");
            false
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("state"));
    name.push(".tmp");
    path.with_file_name(name)
}
