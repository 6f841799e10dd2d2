//! Result reporter: read-only inspection of the output directory and the
//! three-way classification.
//!
//! Policy:
//! - any failed blocking task => failure, regardless of what is on disk;
//!   the output directory is reused across runs, so files left by an
//!   earlier run must not mask a failed phase
//! - front-end and all code files present => success, regardless of test
//!   file presence or test task outcomes
//! - front-end present but code files missing => partial, missing files
//!   listed in plan order
//! - front-end absent => failure, diagnostic drawn from the phase that
//!   failed

use std::path::Path;

use crate::generator::error::GeneratorError;
use crate::generator::types::{
    DesignPlan, Phase, PhaseReport, RunResult, RunStatus, TaskStatus, FRONTEND_ENTRY,
};

/// Classify a finished run from the plan, the phase outcomes, and the files
/// actually on disk. Does not retry anything.
pub fn report(plan: &DesignPlan, phases: &[PhaseReport], output_dir: &Path) -> RunResult {
    let frontend_present = output_dir.join(FRONTEND_ENTRY).exists();

    let missing_code: Vec<String> = plan
        .modules
        .iter()
        .filter(|m| !output_dir.join(&m.module_name).exists())
        .map(|m| m.module_name.clone())
        .collect();

    // Phase outcomes trump disk state.
    let blocking_failed = phases
        .iter()
        .flat_map(|p| &p.tasks)
        .any(|t| t.kind.blocking() && t.status.is_failed());

    if blocking_failed || !frontend_present {
        return RunResult {
            status: RunStatus::Failure,
            missing_files: missing_code,
            diagnostic: Some(failure_diagnostic(phases)),
        };
    }

    if !missing_code.is_empty() {
        return RunResult {
            status: RunStatus::Partial,
            diagnostic: Some(format!(
                "{} expected file(s) missing from {} despite the run finishing",
                missing_code.len(),
                output_dir.display()
            )),
            missing_files: missing_code,
        };
    }

    RunResult {
        status: RunStatus::Success,
        missing_files: Vec::new(),
        diagnostic: test_diagnostic(plan, phases, output_dir),
    }
}

/// Diagnostic for a failed run, distinguishing code-phase from front-end
/// failures.
fn failure_diagnostic(phases: &[PhaseReport]) -> String {
    for phase in phases {
        if phase.phase == Phase::Tests {
            continue;
        }
        for task in &phase.tasks {
            if let TaskStatus::Failed { error } = &task.status {
                let err = match phase.phase {
                    Phase::Code => GeneratorError::CodePhase {
                        module: task.output_file.clone(),
                        message: error.clone(),
                    },
                    _ => GeneratorError::FrontendPhase {
                        message: error.clone(),
                    },
                };
                return err.to_string();
            }
        }
    }
    format!("front-end entry {} was not produced", FRONTEND_ENTRY)
}

/// Best-effort note about tests; never changes the classification.
fn test_diagnostic(plan: &DesignPlan, phases: &[PhaseReport], output_dir: &Path) -> Option<String> {
    let mut notes = Vec::new();

    if let Some(tests) = phases.iter().find(|p| p.phase == Phase::Tests) {
        let failed: Vec<&str> = tests
            .tasks
            .iter()
            .filter(|t| t.status.is_failed())
            .map(|t| t.output_file.as_str())
            .collect();
        if !failed.is_empty() {
            notes.push(format!(
                "{} test task(s) failed: {}",
                failed.len(),
                failed.join(", ")
            ));
        }
    }

    let absent: Vec<String> = plan
        .modules
        .iter()
        .map(|m| m.test_file_name())
        .filter(|f| !output_dir.join(f).exists())
        .collect();
    if !absent.is_empty() {
        notes.push(format!("test files not produced: {}", absent.join(", ")));
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.join("; "))
    }
}
