//! Prompt assembly for the four agent personas.
//!
//! All prompt text is built purely from the plan, so identical plans yield
//! identical prompts. The front-end prompt names each module exactly once,
//! in plan order.

use crate::generator::types::{AgentRole, DesignPlan, ModuleSpec, FRONTEND_ENTRY};

impl AgentRole {
    /// System prompt for this persona
    pub fn system_prompt(self) -> &'static str {
        match self {
            AgentRole::EngineeringLead => {
                r#"You are an engineering lead who turns requirements into a minimal, buildable system design.

Be deterministic and conservative: choose the smallest reasonable set of modules, prefer obvious names, and do not invent features beyond the requirements.

You respond with a single JSON object and nothing else: no markdown fences, no commentary. Any deviation from the requested JSON shape is an error."#
            }
            AgentRole::BackendEngineer => {
                r#"You are a backend engineer. You implement exactly one self-contained Python module per task, following the design plan precisely.

Output ONLY raw Python source for the module, no markdown, no explanations. The file must be importable on its own."#
            }
            AgentRole::FrontendEngineer => {
                r#"You are a frontend engineer. You build minimal Gradio demo apps that import existing backend modules and exercise them.

Output ONLY raw Python source, no markdown, no explanations. Keep the demo very simple."#
            }
            AgentRole::TestEngineer => {
                r#"You are a test engineer. You write unit tests for Python modules you have not executed, inferring correct usage from class summaries.

Output ONLY raw Python source containing the tests, no markdown, no explanations."#
            }
        }
    }

    /// Tools the delegated agent may use. Engineers that need to check their
    /// work may run code; the lead and the front-end task are pure text.
    pub fn allowed_tools(self) -> Vec<String> {
        match self {
            AgentRole::EngineeringLead | AgentRole::FrontendEngineer => vec![],
            AgentRole::BackendEngineer | AgentRole::TestEngineer => vec!["Bash".to_string()],
        }
    }
}

/// Prompt for the planning agent: requirements plus the exact JSON shape the
/// response must conform to.
pub fn design_prompt(requirements: &str) -> String {
    format!(
        r#"Design a small Python system for the following requirements.

# Requirements

{}

# Response format

Respond with one JSON object with exactly these fields:

{{
  "system_name": "<short name of the system>",
  "modules": [
    {{
      "module_name": "<file name ending in .py>",
      "classes": [
        {{"class_name": "<ClassName>", "summary": "<one-sentence responsibility>"}}
      ],
      "notes": "<free-text implementation notes for this module>"
    }}
  ]
}}

Rules:
- Every module_name must be a bare file name ending in .py, unique within the plan.
- List modules in build order.
- Output the JSON object only."#,
        requirements.trim()
    )
}

/// Prompt for one module's code task: module name, class summaries, and the
/// module's design notes.
pub fn code_prompt(module: &ModuleSpec, plan: &DesignPlan) -> String {
    let mut classes = String::new();
    for class in &module.classes {
        classes.push_str(&format!("- {}: {}\n", class.class_name, class.summary));
    }

    format!(
        r#"Implement the Python module `{}` for the system "{}".

Classes to implement:
{}
Design notes:
{}

Follow the design plan precisely. The module must be self-contained and importable. Output ONLY raw Python source for this one file."#,
        module.module_name,
        plan.system_name,
        classes,
        if module.notes.trim().is_empty() {
            "(none)"
        } else {
            module.notes.trim()
        }
    )
}

/// Prompt for the single front-end task. References every module_name in the
/// plan exactly once, order preserved.
pub fn frontend_prompt(plan: &DesignPlan) -> String {
    let imports = plan.module_names().join(", ");

    format!(
        r#"Create a minimal Gradio demo app (`{}`) for the system "{}".

The app must import and briefly demonstrate each of these backend module files, in this order: {}.

Keep it very simple: one small UI that exercises each module. Output ONLY raw Python source for `{}`."#,
        FRONTEND_ENTRY, plan.system_name, imports, FRONTEND_ENTRY
    )
}

/// Prompt for one module's best-effort test task, referencing the code
/// task's expected output file.
pub fn test_prompt(module: &ModuleSpec) -> String {
    let mut classes = String::new();
    for class in &module.classes {
        classes.push_str(&format!("- {}: {}\n", class.class_name, class.summary));
    }

    format!(
        r#"Write unit tests for the generated Python module `{}` (it will exist next to your output file when the tests run).

The module contains:
{}
Cover the obvious happy paths and one or two edge cases per class. Use the standard `unittest` framework. Output ONLY raw Python source for the test file `{}`."#,
        module.module_name,
        classes,
        module.test_file_name()
    )
}
