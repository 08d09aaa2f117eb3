//! Make/CMake detector

use super::common::is_make_workspace;
use super::Detector;
use crate::config::Command;
use crate::fs::FileSystem;
use anyhow::Result;
use async_trait::async_trait;

pub struct MakeDetector;

#[async_trait]
impl Detector for MakeDetector {
    fn name(&self) -> &'static str {
        "make"
    }

    async fn detect(&self, fs: &dyn FileSystem) -> Result<Vec<Command>> {
        if fs.exists("CMakeLists.txt").await? {
            return Ok(vec![Command::init("cmake .")]);
        }

        if is_make_workspace(fs).await? {
            return Ok(vec![Command::init("make")]);
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[tokio::test]
    async fn test_cmake_lists() {
        let fs = MockFileSystem::new();
        fs.add_file("CMakeLists.txt", "project(demo)");

        let commands = MakeDetector.detect(&fs).await.unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].line, "cmake .");
    }

    #[tokio::test]
    async fn test_makefile_either_casing() {
        let fs = MockFileSystem::new();
        fs.add_file("Makefile", "all:");
        assert_eq!(MakeDetector.detect(&fs).await.unwrap()[0].line, "make");

        let fs = MockFileSystem::new();
        fs.add_file("makefile", "all:");
        assert_eq!(MakeDetector.detect(&fs).await.unwrap()[0].line, "make");
    }

    #[tokio::test]
    async fn test_cmake_beats_makefile() {
        let fs = MockFileSystem::new();
        fs.add_file("CMakeLists.txt", "project(demo)");
        fs.add_file("Makefile", "all:");

        let commands = MakeDetector.detect(&fs).await.unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].line, "cmake .");
    }

    #[tokio::test]
    async fn test_no_markers_no_commands() {
        let fs = MockFileSystem::new();
        assert!(MakeDetector.detect(&fs).await.unwrap().is_empty());
    }
}
