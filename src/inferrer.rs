//! Inference driver

use crate::config::WorkspaceConfig;
use crate::detect::{default_detectors, Detector};
use crate::fs::FileSystem;
use tracing::{debug, warn};

/// Runs every registered detector against a workspace and folds their
/// proposals into one [`WorkspaceConfig`].
///
/// Detectors run strictly sequentially in registration order. A failing
/// detector is logged and skipped; `infer` itself never fails.
pub struct Inferrer {
    detectors: Vec<Box<dyn Detector>>,
}

impl Inferrer {
    pub fn new() -> Self {
        Self::with_detectors(default_detectors())
    }

    /// Custom detector set, mainly for tests. Order is preserved.
    pub fn with_detectors(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { detectors }
    }

    pub async fn infer(&self, fs: &dyn FileSystem) -> WorkspaceConfig {
        let mut config = WorkspaceConfig::new();

        for detector in &self.detectors {
            match detector.detect(fs).await {
                Ok(commands) => {
                    if !commands.is_empty() {
                        debug!(
                            detector = detector.name(),
                            count = commands.len(),
                            "detector matched"
                        );
                    }
                    for command in commands {
                        config.push(command);
                    }
                }
                Err(err) => {
                    warn!(
                        detector = detector.name(),
                        error = %err,
                        "detector failed, skipping"
                    );
                }
            }
        }

        config
    }
}

impl Default for Inferrer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Command;
    use crate::fs::MockFileSystem;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    struct FailingDetector;

    #[async_trait]
    impl Detector for FailingDetector {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn detect(&self, _fs: &dyn FileSystem) -> Result<Vec<Command>> {
            Err(anyhow!("probe blew up"))
        }
    }

    struct FixedDetector(&'static str);

    #[async_trait]
    impl Detector for FixedDetector {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn detect(&self, _fs: &dyn FileSystem) -> Result<Vec<Command>> {
            Ok(vec![Command::init(self.0)])
        }
    }

    #[tokio::test]
    async fn test_empty_workspace_yields_empty_config() {
        let fs = MockFileSystem::new();
        let config = Inferrer::new().infer(&fs).await;
        assert!(config.is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_later_detectors() {
        let inferrer = Inferrer::with_detectors(vec![
            Box::new(FailingDetector),
            Box::new(FixedDetector("echo ok")),
        ]);

        let fs = MockFileSystem::new();
        let config = inferrer.infer(&fs).await;
        assert_eq!(config.tasks[0].init.as_deref(), Some("echo ok"));
    }

    #[tokio::test]
    async fn test_proposals_fold_in_registration_order() {
        let inferrer = Inferrer::with_detectors(vec![
            Box::new(FixedDetector("first")),
            Box::new(FailingDetector),
            Box::new(FixedDetector("second")),
        ]);

        let fs = MockFileSystem::new();
        let config = inferrer.infer(&fs).await;
        assert_eq!(config.tasks[0].init.as_deref(), Some("first && second"));
    }
}
