//! Helpers shared between detectors

use crate::fs::FileSystem;
use anyhow::Result;
use std::fmt;

/// True if the workspace is driven by Make (either filename casing).
///
/// Shared by the Python and Make detectors: Python projects that carry a
/// Makefile conventionally wrap their pip invocations inside it, so the
/// Python detector stands down and lets `make` handle the bootstrap.
pub async fn is_make_workspace(fs: &dyn FileSystem) -> Result<bool> {
    Ok(fs.exists("Makefile").await? || fs.exists("makefile").await?)
}

/// Node package manager the workspace is set up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Picks yarn when a yarn.lock is present, npm otherwise.
    pub async fn for_workspace(fs: &dyn FileSystem) -> Result<Self> {
        if fs.exists("yarn.lock").await? {
            Ok(PackageManager::Yarn)
        } else {
            Ok(PackageManager::Npm)
        }
    }

    pub fn install(&self) -> String {
        format!("{} install", self)
    }

    pub fn run(&self, script: &str) -> String {
        format!("{} run {}", self, script)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageManager::Npm => write!(f, "npm"),
            PackageManager::Yarn => write!(f, "yarn"),
        }
    }
}
