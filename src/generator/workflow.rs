//! End-to-end generation workflow: requirements -> plan -> tasks -> phases
//! -> classified result.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

use crate::agent::AgentBackend;
use crate::generator::error::GeneratorError;
use crate::generator::plan::request_plan;
use crate::generator::report::report;
use crate::generator::runner::run_phases;
use crate::generator::tasks::build_tasks;
use crate::generator::types::{RunContext, RunResult, RunStatus};

/// Workflow configuration for one generator instance
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the generated files are written to
    pub output_dir: PathBuf,

    /// Enable debug output
    pub debug: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            debug: false,
        }
    }
}

/// Run one complete generation. Always yields one of the three classified
/// outcomes; plan and phase errors become a `failure` result rather than a
/// Rust error, so callers only see `Err` on local I/O problems.
pub async fn run_generation_workflow(
    backend: &dyn AgentBackend,
    requirements: &str,
    config: &GeneratorConfig,
) -> Result<RunResult> {
    println!("{}", "=".repeat(80));
    println!("PHASE 0: System design");
    println!("{}", "=".repeat(80));

    let plan = match request_plan(backend, requirements).await {
        Ok(plan) => plan,
        Err(e) => {
            if let GeneratorError::PlanValidation { raw, .. } = &e {
                tracing::debug!(payload = %raw, "rejected design plan payload");
            }
            return Ok(RunResult {
                status: RunStatus::Failure,
                missing_files: Vec::new(),
                diagnostic: Some(e.to_string()),
            });
        }
    };

    println!(
        "Plan: \"{}\" with {} module(s): {}",
        plan.system_name,
        plan.modules.len(),
        plan.module_names().join(", ")
    );

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory {}", config.output_dir.display())
    })?;

    // Keep the validated plan next to the generated files for inspection.
    let plan_path = config.output_dir.join("design_plan.json");
    let plan_json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
    std::fs::write(&plan_path, plan_json)
        .with_context(|| format!("Failed to write {}", plan_path.display()))?;
    println!("✓ Saved: {}", plan_path.display());

    let tasks = build_tasks(&plan);
    if config.debug {
        println!("[DEBUG] {} task(s) built", tasks.total());
    }

    let ctx = RunContext::new(plan, tasks, config.output_dir.clone());
    tracing::debug!(run_id = %ctx.run_id, "generation run started");

    let phase_reports = run_phases(&ctx, backend).await;
    let result = report(&ctx.plan, &phase_reports, &ctx.output_dir);

    let elapsed = (Utc::now() - ctx.started_at).num_seconds();
    println!("\n{}", "=".repeat(80));
    println!("Run {} finished in {}s", ctx.run_id, elapsed);
    println!("{}", result.status_line());
    if let Some(diagnostic) = &result.diagnostic {
        println!("  {}", diagnostic);
    }

    Ok(result)
}
