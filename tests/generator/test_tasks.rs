//! Tests for the task builder

use super::common::*;
use devcrew::generator::tasks::build_tasks;
use devcrew::generator::types::*;

#[test]
fn test_task_counts_follow_module_count() {
    let plan = sample_plan();
    let tasks = build_tasks(&plan);
    assert_eq!(tasks.code_tasks.len(), plan.modules.len());
    assert_eq!(tasks.test_tasks.len(), plan.modules.len());
    assert_eq!(tasks.total(), plan.modules.len() * 2 + 1);
}

#[test]
fn test_code_tasks_preserve_plan_order() {
    let tasks = build_tasks(&sample_plan());
    let outputs: Vec<&str> = tasks.code_tasks.iter().map(|t| t.output_file.as_str()).collect();
    assert_eq!(outputs, vec!["accounts.py", "reports.py"]);
}

#[test]
fn test_task_personas() {
    let tasks = build_tasks(&sample_plan());
    assert!(tasks.code_tasks.iter().all(|t| t.agent == AgentRole::BackendEngineer));
    assert_eq!(tasks.frontend_task.agent, AgentRole::FrontendEngineer);
    assert!(tasks.test_tasks.iter().all(|t| t.agent == AgentRole::TestEngineer));
}

#[test]
fn test_blocking_flags_follow_kind() {
    let tasks = build_tasks(&sample_plan());
    assert!(tasks.code_tasks.iter().all(|t| t.blocking));
    assert!(tasks.frontend_task.blocking);
    assert!(tasks.test_tasks.iter().all(|t| !t.blocking));
}

#[test]
fn test_frontend_task_targets_entry_file() {
    let tasks = build_tasks(&sample_plan());
    assert_eq!(tasks.frontend_task.output_file, FRONTEND_ENTRY);
    assert_eq!(tasks.frontend_task.target_module, None);
}

#[test]
fn test_frontend_prompt_references_each_module_once_in_order() {
    let tasks = build_tasks(&sample_plan());
    let prompt = &tasks.frontend_task.prompt;
    assert_eq!(prompt.matches("accounts.py").count(), 1);
    assert_eq!(prompt.matches("reports.py").count(), 1);
    assert!(prompt.find("accounts.py").unwrap() < prompt.find("reports.py").unwrap());
}

#[test]
fn test_test_task_outputs_use_test_prefix() {
    let tasks = build_tasks(&sample_plan());
    let outputs: Vec<&str> = tasks.test_tasks.iter().map(|t| t.output_file.as_str()).collect();
    assert_eq!(outputs, vec!["test_accounts.py", "test_reports.py"]);
}

#[test]
fn test_identical_plans_yield_identical_tasks() {
    let plan = sample_plan();
    assert_eq!(build_tasks(&plan), build_tasks(&plan));
}
