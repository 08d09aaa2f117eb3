//! Ecosystem detectors
//!
//! One module per ecosystem. Each detector is an independent rule: it probes
//! the workspace for its marker files and proposes the commands that would
//! bootstrap that ecosystem. Detectors never see the accumulated result; the
//! inferrer folds their proposals in registration order.

use crate::config::Command;
use crate::fs::FileSystem;
use anyhow::Result;
use async_trait::async_trait;

pub mod common;

pub mod golang;
pub mod java;
pub mod make;
pub mod node;
pub mod python;
pub mod rust;

pub use golang::GoDetector;
pub use java::JavaDetector;
pub use make::MakeDetector;
pub use node::NodeDetector;
pub use python::PythonDetector;
pub use rust::RustDetector;

/// A single ecosystem rule.
#[async_trait]
pub trait Detector: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Probe the workspace and propose bootstrap commands.
    ///
    /// An empty proposal means "not this ecosystem". `Err` means the probe
    /// itself failed (capability fault); the inferrer logs it and moves on.
    async fn detect(&self, fs: &dyn FileSystem) -> Result<Vec<Command>>;
}

/// The detectors in their fixed registration order.
///
/// Order is load-bearing: it determines command ordering when several
/// ecosystems match at once, and Python's deference to Make assumes Make
/// still runs later.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(NodeDetector),
        Box::new(JavaDetector),
        Box::new(PythonDetector),
        Box::new(GoDetector),
        Box::new(RustDetector),
        Box::new(MakeDetector),
    ]
}
