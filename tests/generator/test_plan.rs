//! Tests for the plan requester

use super::common::*;
use devcrew::generator::plan::request_plan;
use devcrew::generator::types::AgentRole;
use devcrew::generator::GeneratorError;

#[tokio::test]
async fn test_request_plan_returns_validated_plan() {
    let backend = ScriptedBackend::with_plan(sample_plan_json());
    let plan = request_plan(&backend, "a small ledger").await.unwrap();
    assert_eq!(plan, sample_plan());
    assert_eq!(backend.calls(), vec![AgentRole::EngineeringLead]);
}

#[tokio::test]
async fn test_request_plan_accepts_fenced_payload() {
    let fenced = format!("```json\n{}\n```", sample_plan_json());
    let backend = ScriptedBackend::with_plan(fenced);
    let plan = request_plan(&backend, "a small ledger").await.unwrap();
    assert_eq!(plan.system_name, "ledger");
}

#[tokio::test]
async fn test_request_plan_rejects_empty_requirements_without_agent_call() {
    let backend = ScriptedBackend::with_plan(sample_plan_json());
    let err = request_plan(&backend, "   \n").await.unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyRequirements));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_request_plan_keeps_raw_payload_on_schema_violation() {
    let backend = ScriptedBackend::with_plan("definitely not json".to_string());
    match request_plan(&backend, "a small ledger").await {
        Err(GeneratorError::PlanValidation { raw, .. }) => {
            assert_eq!(raw, "definitely not json");
        }
        other => panic!("expected PlanValidation, got {:?}", other.err()),
    }
}
