//! Node detector (npm/yarn)

use super::common::PackageManager;
use super::Detector;
use crate::config::Command;
use crate::fs::FileSystem;
use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

pub struct NodeDetector;

#[async_trait]
impl Detector for NodeDetector {
    fn name(&self) -> &'static str {
        "node"
    }

    async fn detect(&self, fs: &dyn FileSystem) -> Result<Vec<Command>> {
        let Some(manifest) = fs.read("package.json").await? else {
            return Ok(Vec::new());
        };

        let pm = PackageManager::for_workspace(fs).await?;
        let mut commands = vec![Command::init(pm.install())];

        // A malformed manifest only costs us the script commands; the install
        // step proposed above stands.
        match serde_json::from_str::<serde_json::Value>(&manifest) {
            Ok(package) => {
                let scripts = &package["scripts"];
                if scripts["build"].is_string() {
                    commands.push(Command::init(pm.run("build")));
                }
                if scripts["start"].is_string() {
                    commands.push(Command::run(pm.run("start")));
                } else if scripts["dev"].is_string() {
                    commands.push(Command::run(pm.run("dev")));
                } else if scripts["watch"].is_string() {
                    commands.push(Command::run(pm.run("watch")));
                }
            }
            Err(err) => {
                warn!(error = %err, "package.json is not valid JSON, skipping script detection");
            }
        }

        Ok(commands)
    }
}
