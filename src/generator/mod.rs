//! Generation workflow orchestration.
//!
//! This module implements the plan-driven generation pipeline: a planning
//! agent produces a design plan, the task builder derives code / front-end /
//! test tasks from it, the phase runner executes them in three sequential
//! phases, and the reporter classifies the outcome.
//!
//! ## Module Structure
//!
//! - `types` - Plan schema, task items, phase reports, run result
//! - `error` - Error taxonomy
//! - `prompts` - Prompt assembly per agent persona
//! - `plan` - Plan requester (agent call + validation)
//! - `tasks` - Task builder (pure plan -> task set transformation)
//! - `runner` - Phase runner (code, front-end, tests)
//! - `report` - Result reporter (file inspection + classification)
//! - `utils` - Response extraction and file helpers
//! - `workflow` - End-to-end orchestration

pub mod error;
pub mod plan;
pub mod prompts;
pub mod report;
pub mod runner;
pub mod tasks;
pub mod types;
pub mod utils;
pub mod workflow;

// Re-export commonly used items
pub use error::GeneratorError;
pub use types::{DesignPlan, RunResult, RunStatus};
pub use workflow::{run_generation_workflow, GeneratorConfig};
