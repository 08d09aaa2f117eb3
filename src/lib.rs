//! stackstrap - heuristic workspace tooling detection
//!
//! This library inspects a project workspace's file tree to infer which
//! build/run tooling it uses (Node, Java, Python, Go, Rust, Make/CMake) and
//! assembles the shell commands needed to bootstrap that workspace: install
//! and build steps grouped into an `init` phase, and an ongoing run command.
//!
//! # Core Concepts
//!
//! - **Detectors**: independent per-ecosystem rules that inspect marker files
//!   (`package.json`, `build.gradle`, `go.mod`, ...) and propose commands
//! - **Inferrer**: runs every detector in a fixed order and folds their
//!   proposals into a single result; a failing detector is logged and skipped
//! - **FileSystem**: read-only capability the detectors see; backed by a real
//!   workspace directory in production and by an in-memory map in tests
//!
//! # Example Usage
//!
//! ```ignore
//! use stackstrap::{Inferrer, LocalFileSystem};
//!
//! async fn bootstrap_commands(workspace: std::path::PathBuf) {
//!     let fs = LocalFileSystem::new(workspace);
//!     let config = Inferrer::new().infer(&fs).await;
//!
//!     for task in &config.tasks {
//!         if let Some(init) = &task.init {
//!             println!("init: {}", init);
//!         }
//!         if let Some(command) = &task.command {
//!             println!("command: {}", command);
//!         }
//!     }
//! }
//! ```
//!
//! The inferrer never fails: filesystem faults and malformed manifests degrade
//! to "that detector contributes nothing" and the worst-case result is an
//! empty [`WorkspaceConfig`].

pub mod cli;
pub mod config;
pub mod detect;
pub mod fs;
pub mod inferrer;

pub use config::{Command, Phase, TaskSpec, WorkspaceConfig};
pub use detect::Detector;
pub use fs::{FileSystem, FsError, LocalFileSystem, MockFileSystem};
pub use inferrer::Inferrer;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
