//! Java detector (Gradle/Maven)

use super::Detector;
use crate::config::Command;
use crate::fs::FileSystem;
use anyhow::Result;
use async_trait::async_trait;

pub struct JavaDetector;

#[async_trait]
impl Detector for JavaDetector {
    fn name(&self) -> &'static str {
        "java"
    }

    async fn detect(&self, fs: &dyn FileSystem) -> Result<Vec<Command>> {
        // Gradle wins over Maven when both build files are present.
        if fs.exists("build.gradle").await? {
            let gradle = if fs.exists("gradlew").await? {
                "./gradlew"
            } else {
                "gradle"
            };
            return Ok(vec![Command::init(format!("{} build", gradle))]);
        }

        if fs.exists("pom.xml").await? {
            let mvn = if fs.exists("mvnw").await? {
                "./mvnw"
            } else {
                "mvn"
            };
            return Ok(vec![Command::init(format!(
                "{} install -DskipTests=false",
                mvn
            ))]);
        }

        Ok(Vec::new())
    }
}
