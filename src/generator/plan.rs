//! Plan requester: one agent call that turns free-form requirements into a
//! validated design plan.
//!
//! The response is constrained to the plan's JSON shape through the prompt
//! and checked here against the schema invariants. Malformed payloads fail
//! with `PlanValidation` carrying the raw payload; nothing is retried.

use crate::agent::AgentBackend;
use crate::generator::error::GeneratorError;
use crate::generator::prompts::design_prompt;
use crate::generator::types::{AgentRole, DesignPlan};
use crate::generator::utils::extract_json;

/// Ask the planning agent for a design plan and validate it.
///
/// No side effects beyond the outbound agent call.
pub async fn request_plan(
    backend: &dyn AgentBackend,
    requirements: &str,
) -> Result<DesignPlan, GeneratorError> {
    if requirements.trim().is_empty() {
        return Err(GeneratorError::EmptyRequirements);
    }

    let prompt = design_prompt(requirements);
    let raw = backend
        .complete(AgentRole::EngineeringLead, &prompt)
        .await
        .map_err(GeneratorError::Backend)?;

    tracing::debug!(payload = %raw, "design plan payload received");

    parse_design_response(&raw)
}

/// Parse and validate a raw planning-agent payload.
pub fn parse_design_response(raw: &str) -> Result<DesignPlan, GeneratorError> {
    let json = extract_json(raw);

    let plan: DesignPlan =
        serde_json::from_str(&json).map_err(|e| GeneratorError::PlanValidation {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    plan.validate().map_err(|reason| GeneratorError::PlanValidation {
        reason,
        raw: raw.to_string(),
    })?;

    Ok(plan)
}
