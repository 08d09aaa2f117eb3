use super::FileSystem;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
enum MockEntry {
    File(String),
    Dir,
}

/// In-memory [`FileSystem`] for tests.
///
/// Entries are keyed by workspace-relative paths. Paths registered with
/// [`fail_on`](Self::fail_on) make every operation touching them return an
/// error, which exercises the inferrer's per-detector fault isolation.
pub struct MockFileSystem {
    entries: RwLock<HashMap<PathBuf, MockEntry>>,
    failing: RwLock<HashSet<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashSet::new()),
            root: PathBuf::from("/workspace"),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }

        entries.insert(path, MockEntry::File(content.to_string()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.write().unwrap();

        Self::ensure_parents(&mut entries, &path);
        entries.insert(path, MockEntry::Dir);
    }

    /// Make every operation on `path` fail.
    pub fn fail_on(&self, path: impl AsRef<Path>) {
        self.failing
            .write()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    fn ensure_parents(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            entries.entry(current.clone()).or_insert(MockEntry::Dir);
        }
    }

    fn check_failure(&self, path: &Path) -> Result<()> {
        if self.failing.read().unwrap().contains(path) {
            Err(anyhow!("injected failure for {:?}", path))
        } else {
            Ok(())
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn full_path(&self, path: &str) -> Result<PathBuf> {
        self.check_failure(Path::new(path))?;
        Ok(self.root.join(path))
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let path = Path::new(path);
        self.check_failure(path)?;
        Ok(self.entries.read().unwrap().contains_key(path))
    }

    async fn read(&self, path: &str) -> Result<Option<String>> {
        let path = Path::new(path);
        self.check_failure(path)?;
        match self.entries.read().unwrap().get(path) {
            Some(MockEntry::File(content)) => Ok(Some(content.clone())),
            Some(MockEntry::Dir) => Err(anyhow!("not a file: {:?}", path)),
            None => Ok(None),
        }
    }

    async fn list(&self, dir: &str) -> Result<Vec<String>> {
        let dir = Path::new(dir);
        self.check_failure(dir)?;
        let entries = self.entries.read().unwrap();

        // "." lists the workspace root, i.e. entries without a parent dir.
        let mut names = Vec::new();
        for path in entries.keys() {
            let in_dir = match path.parent() {
                Some(parent) if parent.as_os_str().is_empty() => dir == Path::new("."),
                Some(parent) => parent == dir,
                None => false,
            };
            if in_dir {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}
