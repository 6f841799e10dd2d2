//! Data types for the generation workflow.
//!
//! This module defines the data structures used across the pipeline:
//!
//! 1. **Design plan** - Structured output of the planning agent
//! 2. **Task items** - Work items derived from the plan
//! 3. **Phase reports** - Per-task outcomes aggregated per phase
//! 4. **Run result** - Final three-way classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// File name of the generated front-end entry point.
pub const FRONTEND_ENTRY: &str = "app.py";

/// Module file extensions accepted by plan validation. The generation
/// pipeline produces Python, so only `.py` module names are valid.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[".py"];

// ============================================================================
// Design Plan Types
// ============================================================================

/// Complete design plan returned by the planning agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPlan {
    /// Name of the system being generated
    pub system_name: String,

    /// Ordered list of backend modules to generate
    pub modules: Vec<ModuleSpec>,
}

/// One backend source unit to be generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// File name of the module (must end in a recognized source extension)
    pub module_name: String,

    /// Classes the module should contain
    pub classes: Vec<ClassSpec>,

    /// Free-text design notes for this module
    #[serde(default)]
    pub notes: String,
}

/// Single class within a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Class name
    pub class_name: String,

    /// Short summary of the class's responsibility
    pub summary: String,
}

impl ModuleSpec {
    /// File name of the unit-test file generated for this module
    pub fn test_file_name(&self) -> String {
        format!("test_{}", self.module_name)
    }
}

impl DesignPlan {
    /// Check the plan invariants: non-empty system name, at least one
    /// module, unique module names, recognized source extensions, and bare
    /// file names (no path separators).
    pub fn validate(&self) -> Result<(), String> {
        if self.system_name.trim().is_empty() {
            return Err("system_name must not be empty".to_string());
        }
        if self.modules.is_empty() {
            return Err("plan must contain at least one module".to_string());
        }

        let mut seen = HashSet::new();
        for module in &self.modules {
            let name = module.module_name.as_str();
            if name.trim().is_empty() {
                return Err("module_name must not be empty".to_string());
            }
            if name.contains('/') || name.contains('\\') {
                return Err(format!(
                    "module_name '{}' must be a bare file name, not a path",
                    name
                ));
            }
            if !RECOGNIZED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
                return Err(format!(
                    "module_name '{}' does not end in a recognized source extension ({})",
                    name,
                    RECOGNIZED_EXTENSIONS.join(", ")
                ));
            }
            if !seen.insert(name) {
                return Err(format!("duplicate module_name '{}'", name));
            }
        }

        Ok(())
    }

    /// Module names in plan order
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.module_name.as_str()).collect()
    }
}

// ============================================================================
// Task Types
// ============================================================================

/// Agent persona a task is delegated to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRole {
    /// Produces the design plan
    EngineeringLead,
    /// Writes backend module code
    BackendEngineer,
    /// Writes the demo front-end
    FrontendEngineer,
    /// Writes unit tests
    TestEngineer,
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentRole::EngineeringLead => "engineering lead",
            AgentRole::BackendEngineer => "backend engineer",
            AgentRole::FrontendEngineer => "frontend engineer",
            AgentRole::TestEngineer => "test engineer",
        };
        write!(f, "{}", name)
    }
}

/// Kind of generation task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Code,
    Frontend,
    Test,
}

impl TaskKind {
    /// Blocking policy table: code and front-end tasks are blocking, test
    /// tasks are best-effort.
    pub fn blocking(self) -> bool {
        match self {
            TaskKind::Code | TaskKind::Frontend => true,
            TaskKind::Test => false,
        }
    }
}

/// One unit of delegated work, derived from the plan at the start of a run
/// and discarded at the end
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItem {
    /// What this task produces
    pub kind: TaskKind,

    /// Agent persona the task is sent to
    pub agent: AgentRole,

    /// Module this task targets (None for the front-end task)
    pub target_module: Option<String>,

    /// Prompt context assembled from the plan
    pub prompt: String,

    /// File name the task's output is written to, relative to the output
    /// directory
    pub output_file: String,

    /// Whether a failure of this task terminates the run
    pub blocking: bool,
}

/// The three task groups produced by the task builder
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTasks {
    /// One code task per module, plan order preserved
    pub code_tasks: Vec<TaskItem>,

    /// Exactly one front-end task referencing every module
    pub frontend_task: TaskItem,

    /// One best-effort test task per module, plan order preserved
    pub test_tasks: Vec<TaskItem>,
}

impl GenerationTasks {
    /// Total number of task items across all groups
    pub fn total(&self) -> usize {
        self.code_tasks.len() + 1 + self.test_tasks.len()
    }
}

// ============================================================================
// Phase / Outcome Types
// ============================================================================

/// One of the three sequential stages of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Code,
    Frontend,
    Tests,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Code => "code",
            Phase::Frontend => "front-end",
            Phase::Tests => "tests",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a single task
#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatus {
    Succeeded,
    Failed { error: String },
    /// Not executed because an earlier blocking phase failed
    Skipped,
}

impl TaskStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, TaskStatus::Failed { .. })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, TaskStatus::Succeeded)
    }
}

/// Outcome of a single task, tagged with what it was producing
#[derive(Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub kind: TaskKind,
    pub output_file: String,
    pub status: TaskStatus,
}

/// Per-phase aggregation of task outcomes
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseReport {
    pub phase: Phase,
    pub tasks: Vec<TaskReport>,
}

impl PhaseReport {
    /// First failed task in this phase, if any
    pub fn first_failure(&self) -> Option<&TaskReport> {
        self.tasks.iter().find(|t| t.status.is_failed())
    }

    pub fn all_succeeded(&self) -> bool {
        self.tasks.iter().all(|t| t.status.is_succeeded())
    }

    /// True if no task in this phase was executed
    pub fn skipped(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.status == TaskStatus::Skipped)
    }
}

// ============================================================================
// Run Types
// ============================================================================

/// Final classification of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Partial,
    Failure,
}

/// Final result handed to the reporting layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub status: RunStatus,

    /// Expected files absent from the output directory, plan order preserved
    pub missing_files: Vec<String>,

    /// Best-effort diagnostic; full detail goes to the tracing layer
    pub diagnostic: Option<String>,
}

impl RunResult {
    /// One of the three user-facing status lines
    pub fn status_line(&self) -> String {
        match self.status {
            RunStatus::Success => "✅ The system has been generated successfully.".to_string(),
            RunStatus::Partial => format!(
                "⚠️ Generation finished, but missing files: {}",
                self.missing_files.join(", ")
            ),
            RunStatus::Failure => format!(
                "❌ Generation failed: {}",
                self.diagnostic.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

/// Per-run context: explicit construction at the start of a run, dropped at
/// the end. Holds the immutable plan and the tasks derived from it.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub plan: DesignPlan,
    pub tasks: GenerationTasks,
    pub output_dir: PathBuf,
}

impl RunContext {
    pub fn new(plan: DesignPlan, tasks: GenerationTasks, output_dir: PathBuf) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            plan,
            tasks,
            output_dir,
        }
    }
}
