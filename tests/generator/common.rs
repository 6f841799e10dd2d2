//! Common test utilities for generator tests

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

use devcrew::agent::AgentBackend;
use devcrew::generator::types::*;

/// Create a temporary directory for testing
pub fn create_temp_dir(name: &str) -> PathBuf {
    let temp_dir = std::env::temp_dir().join(format!("generator_test_{}", name));
    std::fs::create_dir_all(&temp_dir).unwrap();
    temp_dir
}

/// Clean up temporary directory
pub fn cleanup_temp_dir(path: &PathBuf) {
    if path.exists() {
        std::fs::remove_dir_all(path).ok();
    }
}

/// Create a two-module sample plan for testing
pub fn sample_plan() -> DesignPlan {
    DesignPlan {
        system_name: "ledger".to_string(),
        modules: vec![
            ModuleSpec {
                module_name: "accounts.py".to_string(),
                classes: vec![ClassSpec {
                    class_name: "Account".to_string(),
                    summary: "Tracks a balance and its transactions".to_string(),
                }],
                notes: "Keep all state in memory".to_string(),
            },
            ModuleSpec {
                module_name: "reports.py".to_string(),
                classes: vec![ClassSpec {
                    class_name: "ReportBuilder".to_string(),
                    summary: "Formats account histories".to_string(),
                }],
                notes: String::new(),
            },
        ],
    }
}

/// JSON payload matching `sample_plan()`, as a planning agent would emit it
pub fn sample_plan_json() -> String {
    serde_json::to_string_pretty(&sample_plan()).unwrap()
}

/// In-memory backend with scripted per-task outcomes.
///
/// The planning persona replies with `plan_json`; the other personas reply
/// with canned fenced Python unless their target appears in a failure list.
/// Every call is recorded so tests can assert skip semantics.
#[derive(Default)]
pub struct ScriptedBackend {
    pub plan_json: String,
    pub fail_code_modules: Vec<String>,
    pub fail_frontend: bool,
    pub fail_test_modules: Vec<String>,
    pub calls: Mutex<Vec<AgentRole>>,
}

impl ScriptedBackend {
    pub fn with_plan(plan_json: String) -> Self {
        Self {
            plan_json,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<AgentRole> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentBackend for ScriptedBackend {
    async fn complete(&self, agent: AgentRole, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(agent);

        match agent {
            AgentRole::EngineeringLead => Ok(self.plan_json.clone()),
            AgentRole::BackendEngineer => {
                if let Some(module) = self
                    .fail_code_modules
                    .iter()
                    .find(|m| prompt.contains(m.as_str()))
                {
                    anyhow::bail!("scripted code failure for {}", module);
                }
                Ok("```python\nclass Placeholder:\n    pass\n```".to_string())
            }
            AgentRole::FrontendEngineer => {
                if self.fail_frontend {
                    anyhow::bail!("scripted front-end failure");
                }
                Ok("```python\nimport gradio as gr\n```".to_string())
            }
            AgentRole::TestEngineer => {
                if let Some(module) = self
                    .fail_test_modules
                    .iter()
                    .find(|m| prompt.contains(m.as_str()))
                {
                    anyhow::bail!("scripted test failure for {}", module);
                }
                Ok("```python\nimport unittest\n```".to_string())
            }
        }
    }
}
