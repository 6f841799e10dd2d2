//! Tests for the phase runner's execution and skip semantics

use super::common::*;
use devcrew::generator::runner::run_phases;
use devcrew::generator::tasks::build_tasks;
use devcrew::generator::types::*;

fn context(output_dir: std::path::PathBuf) -> RunContext {
    let plan = sample_plan();
    let tasks = build_tasks(&plan);
    RunContext::new(plan, tasks, output_dir)
}

#[tokio::test]
async fn test_successful_run_writes_all_files() {
    let dir = create_temp_dir("runner_success");
    let ctx = context(dir.clone());
    let backend = ScriptedBackend::with_plan(String::new());

    let phases = run_phases(&ctx, &backend).await;

    assert_eq!(phases.len(), 3);
    assert!(phases.iter().all(|p| p.all_succeeded()));
    for file in ["accounts.py", "reports.py", "app.py", "test_accounts.py", "test_reports.py"] {
        assert!(dir.join(file).exists(), "expected {} to exist", file);
    }

    cleanup_temp_dir(&dir);
}

#[tokio::test]
async fn test_code_failure_skips_later_code_frontend_and_tests() {
    let dir = create_temp_dir("runner_code_failure");
    let ctx = context(dir.clone());
    let backend = ScriptedBackend {
        fail_code_modules: vec!["accounts.py".to_string()],
        ..Default::default()
    };

    let phases = run_phases(&ctx, &backend).await;

    let code = &phases[0];
    assert!(code.tasks[0].status.is_failed());
    assert_eq!(code.tasks[1].status, TaskStatus::Skipped);

    assert!(phases[1].skipped());
    assert!(phases[2].skipped());

    // Only the first code task ever reached the backend.
    assert_eq!(backend.calls(), vec![AgentRole::BackendEngineer]);
    assert!(!dir.join("app.py").exists());

    cleanup_temp_dir(&dir);
}

#[tokio::test]
async fn test_frontend_failure_skips_tests_only() {
    let dir = create_temp_dir("runner_frontend_failure");
    let ctx = context(dir.clone());
    let backend = ScriptedBackend {
        fail_frontend: true,
        ..Default::default()
    };

    let phases = run_phases(&ctx, &backend).await;

    assert!(phases[0].all_succeeded());
    assert!(phases[1].tasks[0].status.is_failed());
    assert!(phases[2].skipped());

    assert!(dir.join("accounts.py").exists());
    assert!(!dir.join("app.py").exists());
    assert!(!dir.join("test_accounts.py").exists());

    cleanup_temp_dir(&dir);
}

#[tokio::test]
async fn test_test_failure_is_recorded_but_not_terminal() {
    let dir = create_temp_dir("runner_test_failure");
    let ctx = context(dir.clone());
    let backend = ScriptedBackend {
        fail_test_modules: vec!["reports.py".to_string()],
        ..Default::default()
    };

    let phases = run_phases(&ctx, &backend).await;

    assert!(phases[0].all_succeeded());
    assert!(phases[1].all_succeeded());

    let tests = &phases[2];
    assert!(tests.tasks[0].status.is_succeeded());
    assert!(tests.tasks[1].status.is_failed());

    // Blocking outputs are all present regardless of the test failure.
    assert!(dir.join("app.py").exists());
    assert!(dir.join("test_accounts.py").exists());
    assert!(!dir.join("test_reports.py").exists());

    cleanup_temp_dir(&dir);
}

#[tokio::test]
async fn test_skip_decisions_key_on_the_blocking_flag() {
    let dir = create_temp_dir("runner_blocking_flag");
    let plan = sample_plan();
    let mut tasks = build_tasks(&plan);
    // Downgrade the first code task; its failure must no longer propagate.
    tasks.code_tasks[0].blocking = false;
    let ctx = RunContext::new(plan, tasks, dir.clone());

    let backend = ScriptedBackend {
        fail_code_modules: vec!["accounts.py".to_string()],
        ..Default::default()
    };

    let phases = run_phases(&ctx, &backend).await;

    assert!(phases[0].tasks[0].status.is_failed());
    assert!(phases[0].tasks[1].status.is_succeeded());
    assert!(phases[1].all_succeeded());
    assert!(phases[2].all_succeeded());
    assert!(backend.calls().contains(&AgentRole::FrontendEngineer));

    cleanup_temp_dir(&dir);
}

#[tokio::test]
async fn test_phase_reports_cover_every_task() {
    let dir = create_temp_dir("runner_report_shape");
    let ctx = context(dir.clone());
    let backend = ScriptedBackend::with_plan(String::new());

    let phases = run_phases(&ctx, &backend).await;

    assert_eq!(phases[0].tasks.len(), 2);
    assert_eq!(phases[1].tasks.len(), 1);
    assert_eq!(phases[2].tasks.len(), 2);
    assert_eq!(phases[0].phase, Phase::Code);
    assert_eq!(phases[1].phase, Phase::Frontend);
    assert_eq!(phases[2].phase, Phase::Tests);

    cleanup_temp_dir(&dir);
}
