//! File-backed store for raw waypoint files.
//!
//! Files are addressed by bare name inside a single root directory. Names that are
//! empty, contain a path separator or contain `..` are rejected so nothing is read or
//! written outside the root.

use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::server::{
    error::{validation::ValidationError, AppError},
    model::waypoint::MissionFile,
};

/// Extension of waypoint files offered for loading.
pub const WAYPOINT_EXTENSION: &str = "waypoints";

/// Directory holding uploaded and pre-provisioned waypoint files.
#[derive(Debug, Clone)]
pub struct MissionFileStore {
    root: PathBuf,
}

impl MissionFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).await?;

        Ok(())
    }

    /// Checks that `filename` names a file directly inside the root.
    ///
    /// # Returns
    /// - `Ok(())` - Name is usable
    /// - `Err(ValidationError::InvalidFileName)` - Empty, contains a separator or `..`
    pub fn validate_file_name(filename: &str) -> Result<(), ValidationError> {
        let invalid = filename.trim().is_empty()
            || filename.contains(['/', '\\', '\0'])
            || filename.contains("..");

        if invalid {
            return Err(ValidationError::InvalidFileName(filename.to_string()));
        }

        Ok(())
    }

    /// Writes `content` under `filename`, replacing any existing file.
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(AppError::ValidationErr)` - Invalid file name
    /// - `Err(AppError::IoErr)` - Write failed
    pub async fn write(&self, filename: &str, content: &[u8]) -> Result<(), AppError> {
        let path = self.path_for(filename)?;
        fs::write(path, content).await?;

        Ok(())
    }

    /// Reads a stored file.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - File content
    /// - `Ok(None)` - No such file
    /// - `Err(AppError::ValidationErr)` - Invalid file name
    /// - `Err(AppError::IoErr)` - Read failed for another reason
    pub async fn read(&self, filename: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.path_for(filename)?;

        match fs::read(path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Checks whether a regular file with this name exists.
    pub async fn exists(&self, filename: &str) -> Result<bool, AppError> {
        let path = self.path_for(filename)?;

        match fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Lists regular files with the given extension, sorted by name.
    ///
    /// A missing root directory yields an empty list.
    pub async fn list(&self, extension: &str) -> Result<Vec<MissionFile>, AppError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
                continue;
            }

            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let modified: DateTime<Utc> = metadata.modified()?.into();
            files.push(MissionFile {
                filename: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                modified,
            });
        }

        files.sort_by(|a, b| a.filename.cmp(&b.filename));

        Ok(files)
    }

    fn path_for(&self, filename: &str) -> Result<PathBuf, ValidationError> {
        Self::validate_file_name(filename)?;

        Ok(self.root.join(filename))
    }
}
