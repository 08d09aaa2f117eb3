//! Rust detector (cargo)

use super::Detector;
use crate::config::Command;
use crate::fs::FileSystem;
use anyhow::Result;
use async_trait::async_trait;

pub struct RustDetector;

#[async_trait]
impl Detector for RustDetector {
    fn name(&self) -> &'static str {
        "rust"
    }

    async fn detect(&self, fs: &dyn FileSystem) -> Result<Vec<Command>> {
        if !fs.exists("Cargo.toml").await? {
            return Ok(Vec::new());
        }

        Ok(vec![
            Command::init("cargo build"),
            Command::run("cargo watch -x run"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Phase;
    use crate::fs::MockFileSystem;

    #[tokio::test]
    async fn test_cargo_toml_detected() {
        let fs = MockFileSystem::new();
        fs.add_file("Cargo.toml", "[package]\nname = \"demo\"");

        let commands = RustDetector.detect(&fs).await.unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].line, "cargo build");
        assert_eq!(commands[0].phase, Phase::Init);
        assert_eq!(commands[1].line, "cargo watch -x run");
        assert_eq!(commands[1].phase, Phase::Command);
    }

    #[tokio::test]
    async fn test_no_cargo_toml_no_commands() {
        let fs = MockFileSystem::new();
        assert!(RustDetector.detect(&fs).await.unwrap().is_empty());
    }
}
