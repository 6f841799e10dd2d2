//! Task builder: derive the three task groups from a validated plan.
//!
//! Pure transformation, no side effects. Identical plans yield identical
//! task sets, with module ordering preserved from the plan.

use crate::generator::prompts::{code_prompt, frontend_prompt, test_prompt};
use crate::generator::types::{
    AgentRole, DesignPlan, GenerationTasks, TaskItem, TaskKind, FRONTEND_ENTRY,
};

/// Build the task set for one generation run: one code task per module, one
/// front-end task referencing every module, one best-effort test task per
/// module.
pub fn build_tasks(plan: &DesignPlan) -> GenerationTasks {
    let code_tasks = plan
        .modules
        .iter()
        .map(|module| TaskItem {
            kind: TaskKind::Code,
            agent: AgentRole::BackendEngineer,
            target_module: Some(module.module_name.clone()),
            prompt: code_prompt(module, plan),
            output_file: module.module_name.clone(),
            blocking: TaskKind::Code.blocking(),
        })
        .collect();

    let frontend_task = TaskItem {
        kind: TaskKind::Frontend,
        agent: AgentRole::FrontendEngineer,
        target_module: None,
        prompt: frontend_prompt(plan),
        output_file: FRONTEND_ENTRY.to_string(),
        blocking: TaskKind::Frontend.blocking(),
    };

    let test_tasks = plan
        .modules
        .iter()
        .map(|module| TaskItem {
            kind: TaskKind::Test,
            agent: AgentRole::TestEngineer,
            target_module: Some(module.module_name.clone()),
            prompt: test_prompt(module),
            output_file: module.test_file_name(),
            blocking: TaskKind::Test.blocking(),
        })
        .collect();

    GenerationTasks {
        code_tasks,
        frontend_task,
        test_tasks,
    }
}
