//! FileSystem trait definition

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Read-only view of a workspace for the detectors.
///
/// Paths are workspace-relative (`"package.json"`, `"src"`). Absence is never
/// an error: a missing file is `Ok(false)` from [`exists`](Self::exists) or
/// `Ok(None)` from [`read`](Self::read). `Err` is reserved for genuine
/// capability failures (permissions, IO), which the inferrer catches per
/// detector.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Resolve a workspace-relative path to an absolute path
    async fn full_path(&self, path: &str) -> Result<PathBuf>;

    /// Check if a path exists
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Read file contents as text; `None` if the file is absent
    async fn read(&self, path: &str) -> Result<Option<String>>;

    /// List entry names of a directory
    async fn list(&self, dir: &str) -> Result<Vec<String>>;
}
