//! Inference result model
//!
//! A [`WorkspaceConfig`] holds the bootstrap commands inferred for one
//! workspace, grouped into execution phases. Detectors propose [`Command`]s;
//! the inferrer folds them in with [`WorkspaceConfig::push`], which joins
//! commands landing in the same phase with `" && "`.

use serde::{Deserialize, Serialize};

/// Execution phase a command belongs to.
///
/// Phases order the generated commands: `before` runs ahead of everything,
/// `init` holds one-time setup (installs, builds), `command` is the ongoing
/// run command for the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    Init,
    Command,
}

/// A single proposed shell command fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub line: String,
    pub phase: Phase,
    /// Skip the fold if the target phase already contains this substring.
    pub unless: Option<String>,
}

impl Command {
    pub fn new(phase: Phase, line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            phase,
            unless: None,
        }
    }

    /// One-time setup command (`init` phase).
    pub fn init(line: impl Into<String>) -> Self {
        Self::new(Phase::Init, line)
    }

    /// Ongoing run command (`command` phase).
    pub fn run(line: impl Into<String>) -> Self {
        Self::new(Phase::Command, line)
    }

    /// Command for the `before` phase.
    pub fn before(line: impl Into<String>) -> Self {
        Self::new(Phase::Before, line)
    }

    /// Suppress the fold when the phase string already contains `substring`.
    pub fn unless(mut self, substring: impl Into<String>) -> Self {
        self.unless = Some(substring.into());
        self
    }
}

/// Per-phase accumulated command strings for one workspace task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl TaskSpec {
    pub fn phase(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Before => self.before.as_deref(),
            Phase::Init => self.init.as_deref(),
            Phase::Command => self.command.as_deref(),
        }
    }

    fn phase_mut(&mut self, phase: Phase) -> &mut Option<String> {
        match phase {
            Phase::Before => &mut self.before,
            Phase::Init => &mut self.init,
            Phase::Command => &mut self.command,
        }
    }
}

/// The complete inference result: currently a single [`TaskSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskSpec>,
}

impl WorkspaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no detector contributed anything.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Folds a proposed command into the sole task.
    ///
    /// Phase strings only ever grow: an existing string is extended with
    /// `" && " + line`, never rewritten. A command carrying an `unless`
    /// substring that already occurs in the phase string is dropped.
    pub fn push(&mut self, command: Command) {
        if self.tasks.is_empty() {
            self.tasks.push(TaskSpec::default());
        }
        let slot = self.tasks[0].phase_mut(command.phase);

        if let (Some(unless), Some(existing)) = (&command.unless, slot.as_deref()) {
            if existing.contains(unless.as_str()) {
                return;
            }
        }

        *slot = Some(match slot.take() {
            Some(existing) => format!("{} && {}", existing, command.line),
            None => command.line,
        });
    }
}
