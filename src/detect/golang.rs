//! Go detector (go modules)

use super::Detector;
use crate::config::Command;
use crate::fs::FileSystem;
use anyhow::Result;
use async_trait::async_trait;

pub struct GoDetector;

#[async_trait]
impl Detector for GoDetector {
    fn name(&self) -> &'static str {
        "go"
    }

    async fn detect(&self, fs: &dyn FileSystem) -> Result<Vec<Command>> {
        if !fs.exists("go.mod").await? {
            return Ok(Vec::new());
        }

        Ok(vec![
            Command::init("go get"),
            Command::init("go build ./..."),
            Command::init("go test ./..."),
            Command::run("go run"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Phase;
    use crate::fs::MockFileSystem;

    #[tokio::test]
    async fn test_go_mod_proposes_full_sequence() {
        let fs = MockFileSystem::new();
        fs.add_file("go.mod", "module example.com/demo");

        let commands = GoDetector.detect(&fs).await.unwrap();
        let lines: Vec<(&str, Phase)> = commands
            .iter()
            .map(|c| (c.line.as_str(), c.phase))
            .collect();

        assert_eq!(
            lines,
            vec![
                ("go get", Phase::Init),
                ("go build ./...", Phase::Init),
                ("go test ./...", Phase::Init),
                ("go run", Phase::Command),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_go_mod_no_commands() {
        let fs = MockFileSystem::new();
        fs.add_file("main.go", "package main");

        assert!(GoDetector.detect(&fs).await.unwrap().is_empty());
    }
}
