use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const FALLBACK_FILE_NAME: &str = "audio";

/// Scoped ownership of a staged audio file. The file is removed when the guard drops.
#[derive(Debug)]
pub struct TempAudioFile {
    path: PathBuf,
    file_name: String,
}

impl TempAudioFile {
    pub async fn create(dir: &Path, original_name: &str, contents: &[u8]) -> io::Result<Self> {
        let file_name = base_name(original_name);
        let path = dir.join(scratch_file_name(&file_name, Utc::now(), Uuid::new_v4()));

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        let guard = Self { path, file_name };

        let written = write_all(&mut file, contents).await;
        drop(file);
        written.map(|()| guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Caller-supplied name stripped of any directory components.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drop for TempAudioFile {
    // Blocking unlink of a single small file; runs on every exit path.
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Temporary audio file cleaned up"),
            Err(e) => tracing::warn!(
                error = %e,
                path = %self.path.display(),
                "Failed to clean up temporary audio file"
            ),
        }
    }
}

async fn write_all(file: &mut File, contents: &[u8]) -> io::Result<()> {
    file.write_all(contents).await?;
    file.flush().await
}

/// `whisper_<unix millis>_<nonce>_<file name>`. The nonce keeps concurrent
/// uploads of the same name in the same millisecond apart.
pub fn scratch_file_name(file_name: &str, now: DateTime<Utc>, nonce: Uuid) -> String {
    format!(
        "whisper_{}_{}_{}",
        now.timestamp_millis(),
        nonce.simple(),
        file_name
    )
}

fn base_name(original_name: &str) -> String {
    match original_name.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name.to_string(),
        _ => FALLBACK_FILE_NAME.to_string(),
    }
}

