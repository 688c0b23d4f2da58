//! File upload storage

use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct UploadService {
    directory: PathBuf,
}

impl UploadService {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Write `contents` under the final component of `filename`, replacing any
    /// existing file. Returns the stored name.
    pub async fn save(&self, filename: &str, contents: &[u8]) -> AppResult<String> {
        let name = sanitize_filename(filename)?;

        tokio::fs::create_dir_all(&self.directory).await?;
        let target = self.directory.join(&name);
        tokio::fs::write(&target, contents).await?;

        tracing::info!(file = %target.display(), bytes = contents.len(), "Stored upload");
        Ok(name)
    }
}

/// Keep only the last normal path component of a client-supplied name
fn sanitize_filename(filename: &str) -> AppResult<String> {
    // Windows clients may send backslash-separated paths
    let normalized = filename.replace('\\', "/");
    match Path::new(&normalized).components().next_back() {
        Some(Component::Normal(name)) => Ok(name.to_string_lossy().into_owned()),
        _ => Err(AppError::BadRequest(format!("Invalid file name: {:?}", filename))),
    }
}
