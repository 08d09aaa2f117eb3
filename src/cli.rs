//! Command-line surface
//!
//! The binary is a thin shell around the library: it points a
//! [`LocalFileSystem`] at the requested workspace, runs the [`Inferrer`], and
//! renders the result.

use crate::config::{TaskSpec, WorkspaceConfig};
use crate::fs::LocalFileSystem;
use crate::inferrer::Inferrer;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "stackstrap",
    about = "Heuristic workspace tooling detection and bootstrap command generation",
    version,
    long_about = "stackstrap inspects a workspace's file tree for tooling marker files \
                  (package.json, build.gradle, go.mod, Cargo.toml, ...) and assembles \
                  the shell commands needed to bootstrap it: install/build steps and a \
                  run command. It only reads the workspace; nothing is executed."
)]
pub struct CliArgs {
    #[arg(
        value_name = "PATH",
        default_value = ".",
        help = "Path to the workspace (defaults to current directory)"
    )]
    pub workspace: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormat,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
}

/// Runs the inference and prints the result; returns the process exit code.
///
/// An empty result is not an error: the workspace simply uses no tooling we
/// recognize.
pub async fn run(args: &CliArgs) -> i32 {
    let fs = LocalFileSystem::new(args.workspace.clone());
    let config = Inferrer::new().infer(&fs).await;

    if config.is_empty() {
        info!(workspace = ?args.workspace, "no recognized tooling");
    }

    match render(&config, args.format) {
        Ok(rendered) => {
            print!("{}", rendered);
            0
        }
        Err(err) => {
            eprintln!("Error: failed to render result: {}", err);
            1
        }
    }
}

fn render(config: &WorkspaceConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(config)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(config)?),
        OutputFormat::Human => Ok(render_human(config)),
    }
}

fn render_human(config: &WorkspaceConfig) -> String {
    if config.is_empty() {
        return "No recognized tooling in this workspace.\n".to_string();
    }

    let mut out = String::new();
    for task in &config.tasks {
        let TaskSpec {
            before,
            init,
            command,
        } = task;
        for (label, value) in [("before", before), ("init", init), ("command", command)] {
            if let Some(value) = value {
                out.push_str(&format!("{:<8} {}\n", format!("{}:", label), value));
            }
        }
    }
    out
}
