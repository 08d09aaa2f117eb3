//! Python detector (pip)

use super::common::is_make_workspace;
use super::Detector;
use crate::config::Command;
use crate::fs::FileSystem;
use anyhow::Result;
use async_trait::async_trait;

pub struct PythonDetector;

#[async_trait]
impl Detector for PythonDetector {
    fn name(&self) -> &'static str {
        "python"
    }

    async fn detect(&self, fs: &dyn FileSystem) -> Result<Vec<Command>> {
        // Python projects with a Makefile wrap pip inside it; the make
        // detector picks those up instead.
        // https://docs.python-guide.org/writing/structure/#makefile
        if is_make_workspace(fs).await? {
            return Ok(Vec::new());
        }

        if fs.exists("requirements.txt").await? {
            return Ok(vec![Command::init("pip install -r ./requirements.txt")]);
        }

        if fs.exists("setup.py").await? {
            return Ok(vec![Command::init("pip install .")]);
        }

        Ok(Vec::new())
    }
}
