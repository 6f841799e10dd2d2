//! Phase runner: three sequential phases, no re-entry.
//!
//! 1. Code (blocking) - any failure ends the run; later phases are skipped.
//! 2. Front-end (blocking) - runs only after the code phase succeeds.
//! 3. Tests (non-blocking) - failures are recorded but never terminal; the
//!    test tasks have no ordering dependency and run concurrently.
//!
//! Whether a failure propagates is read from each task's `blocking` flag;
//! the task builder sets it from the `TaskKind` policy table.
//!
//! The runner owns the task items for the duration of the run and reports
//! one outcome per task; classification happens in the reporter.

use futures::future::join_all;
use std::path::Path;

use crate::agent::AgentBackend;
use crate::generator::types::{
    Phase, PhaseReport, RunContext, TaskItem, TaskReport, TaskStatus,
};
use crate::generator::utils::{extract_code, save_source};

/// Execute all three phases and return one report per phase, in order.
pub async fn run_phases(ctx: &RunContext, backend: &dyn AgentBackend) -> Vec<PhaseReport> {
    // Phase 1: code (blocking)
    println!("\n{}", "=".repeat(80));
    println!("PHASE 1: Backend code ({} modules)", ctx.tasks.code_tasks.len());
    println!("{}", "=".repeat(80));

    let mut code_tasks = Vec::new();
    let mut code_failed = false;

    for task in &ctx.tasks.code_tasks {
        let status = if code_failed {
            TaskStatus::Skipped
        } else {
            execute_task(backend, task, &ctx.output_dir).await
        };

        match &status {
            TaskStatus::Succeeded => println!("✓ {}", task.output_file),
            TaskStatus::Failed { error } => {
                println!("✗ {}: {}", task.output_file, error);
                if task.blocking {
                    code_failed = true;
                }
            }
            TaskStatus::Skipped => println!("- {} (skipped)", task.output_file),
        }

        code_tasks.push(report_for(task, status));
    }

    // Phase 2: front-end (blocking, conditional on code success)
    println!("\n{}", "=".repeat(80));
    println!("PHASE 2: Front-end demo");
    println!("{}", "=".repeat(80));

    let frontend = &ctx.tasks.frontend_task;
    let frontend_status = if code_failed {
        println!("- {} (skipped)", frontend.output_file);
        TaskStatus::Skipped
    } else {
        let status = execute_task(backend, frontend, &ctx.output_dir).await;
        match &status {
            TaskStatus::Succeeded => println!("✓ {}", frontend.output_file),
            TaskStatus::Failed { error } => println!("✗ {}: {}", frontend.output_file, error),
            TaskStatus::Skipped => {}
        }
        status
    };
    let frontend_failed = frontend_status.is_failed() && frontend.blocking;
    let frontend_tasks = vec![report_for(frontend, frontend_status)];

    // Phase 3: tests (non-blocking, best-effort)
    println!("\n{}", "=".repeat(80));
    println!("PHASE 3: Unit tests ({} modules, best-effort)", ctx.tasks.test_tasks.len());
    println!("{}", "=".repeat(80));

    let test_tasks = if code_failed || frontend_failed {
        ctx.tasks
            .test_tasks
            .iter()
            .map(|task| {
                println!("- {} (skipped)", task.output_file);
                report_for(task, TaskStatus::Skipped)
            })
            .collect()
    } else {
        let futures: Vec<_> = ctx
            .tasks
            .test_tasks
            .iter()
            .map(|task| execute_task(backend, task, &ctx.output_dir))
            .collect();
        let statuses = join_all(futures).await;

        ctx.tasks
            .test_tasks
            .iter()
            .zip(statuses)
            .map(|(task, status)| {
                match &status {
                    TaskStatus::Succeeded => println!("✓ {}", task.output_file),
                    TaskStatus::Failed { error } => {
                        println!("⚠ Warning: {} failed: {}", task.output_file, error);
                    }
                    TaskStatus::Skipped => {}
                }
                report_for(task, status)
            })
            .collect()
    };

    vec![
        PhaseReport { phase: Phase::Code, tasks: code_tasks },
        PhaseReport { phase: Phase::Frontend, tasks: frontend_tasks },
        PhaseReport { phase: Phase::Tests, tasks: test_tasks },
    ]
}

fn report_for(task: &TaskItem, status: TaskStatus) -> TaskReport {
    TaskReport {
        kind: task.kind,
        output_file: task.output_file.clone(),
        status,
    }
}

/// Run one task: delegate to the agent, extract source from the response,
/// write it to the output directory.
async fn execute_task(backend: &dyn AgentBackend, task: &TaskItem, output_dir: &Path) -> TaskStatus {
    let raw = match backend.complete(task.agent, &task.prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(file = %task.output_file, error = %format!("{:#}", e), "task delegation failed");
            return TaskStatus::Failed { error: format!("{:#}", e) };
        }
    };

    let code = extract_code(&raw);
    if code.trim().is_empty() {
        tracing::debug!(file = %task.output_file, payload = %raw, "agent returned no code");
        return TaskStatus::Failed {
            error: "agent returned no code".to_string(),
        };
    }

    match save_source(&output_dir.join(&task.output_file), &code) {
        Ok(()) => TaskStatus::Succeeded,
        Err(e) => TaskStatus::Failed { error: format!("{:#}", e) },
    }
}
