use super::FileSystem;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors from resolving paths against a real workspace directory.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("path {0:?} escapes the workspace root")]
    OutsideWorkspace(PathBuf),

    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// [`FileSystem`] over a real directory, with all paths resolved against the
/// workspace root. Path traversal out of the root is rejected.
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FsError> {
        let relative = Path::new(path);
        let mut depth: usize = 0;

        for component in relative.components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::CurDir => {}
                Component::ParentDir if depth > 0 => depth -= 1,
                _ => return Err(FsError::OutsideWorkspace(relative.to_path_buf())),
            }
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn full_path(&self, path: &str) -> Result<PathBuf> {
        Ok(self.resolve(path)?)
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let full = self.resolve(path)?;
        let exists = tokio::fs::try_exists(&full)
            .await
            .map_err(|source| FsError::Io { path: full, source })?;
        Ok(exists)
    }

    async fn read(&self, path: &str) -> Result<Option<String>> {
        let full = self.resolve(path)?;
        match tokio::fs::read_to_string(&full).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FsError::Io { path: full, source }.into()),
        }
    }

    async fn list(&self, dir: &str) -> Result<Vec<String>> {
        let full = self.resolve(dir)?;
        let mut entries = tokio::fs::read_dir(&full)
            .await
            .map_err(|source| FsError::Io {
                path: full.clone(),
                source,
            })?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("failed to read directory entry")?
        {
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_workspace() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir(base.join("src")).unwrap();
        fs::File::create(base.join("Cargo.toml"))
            .unwrap()
            .write_all(b"[package]\nname = \"demo\"")
            .unwrap();
        fs::File::create(base.join("src/main.rs"))
            .unwrap()
            .write_all(b"fn main() {}")
            .unwrap();

        dir
    }

    #[tokio::test]
    async fn test_exists() {
        let temp = create_test_workspace();
        let fs = LocalFileSystem::new(temp.path());

        assert!(fs.exists("Cargo.toml").await.unwrap());
        assert!(fs.exists("src/main.rs").await.unwrap());
        assert!(!fs.exists("go.mod").await.unwrap());
    }

    #[tokio::test]
    async fn test_read_present_file() {
        let temp = create_test_workspace();
        let fs = LocalFileSystem::new(temp.path());

        let content = fs.read("src/main.rs").await.unwrap();
        assert_eq!(content.as_deref(), Some("fn main() {}"));
    }

    #[tokio::test]
    async fn test_read_absent_file_is_none() {
        let temp = create_test_workspace();
        let fs = LocalFileSystem::new(temp.path());

        assert_eq!(fs.read("package.json").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list() {
        let temp = create_test_workspace();
        let fs = LocalFileSystem::new(temp.path());

        let names = fs.list(".").await.unwrap();
        assert!(names.contains(&"Cargo.toml".to_string()));
        assert!(names.contains(&"src".to_string()));
    }

    #[tokio::test]
    async fn test_full_path_is_rooted() {
        let temp = create_test_workspace();
        let fs = LocalFileSystem::new(temp.path());

        let full = fs.full_path("Cargo.toml").await.unwrap();
        assert_eq!(full, temp.path().join("Cargo.toml"));
    }

    #[tokio::test]
    async fn test_rejects_escape_from_root() {
        let temp = create_test_workspace();
        let fs = LocalFileSystem::new(temp.path());

        assert!(fs.exists("../outside").await.is_err());
        assert!(fs.read("src/../../outside").await.is_err());
        assert!(fs.full_path("/etc/passwd").await.is_err());
    }

    #[tokio::test]
    async fn test_traversal_inside_root_is_allowed() {
        let temp = create_test_workspace();
        let fs = LocalFileSystem::new(temp.path());

        assert!(fs.exists("src/../Cargo.toml").await.unwrap());
        assert!(fs.exists("./Cargo.toml").await.unwrap());
    }
}
