//! Agent backend: the seam between the workflow and the delegated agent
//! framework.
//!
//! The workflow only ever talks to the `AgentBackend` trait, so the phase
//! runner can be exercised with an in-memory fake while production runs go
//! through the Claude Agent SDK.

use anyhow::{Context, Result};
use async_trait::async_trait;
use claude_agent_sdk::{query, ClaudeAgentOptions, ContentBlock, Message};
use futures::StreamExt;

use crate::generator::types::AgentRole;

/// One completion round trip to a delegated agent.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Send `prompt` to the given agent persona and return the collected
    /// text response.
    async fn complete(&self, agent: AgentRole, prompt: &str) -> Result<String>;
}

/// Production backend over the Claude Agent SDK. Each call is one blocking
/// round trip; any parallelism across calls is the caller's concern.
#[derive(Debug, Default)]
pub struct ClaudeBackend;

impl ClaudeBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AgentBackend for ClaudeBackend {
    async fn complete(&self, agent: AgentRole, prompt: &str) -> Result<String> {
        let options = ClaudeAgentOptions::builder()
            .system_prompt(agent.system_prompt().to_string())
            .allowed_tools(agent.allowed_tools())
            .permission_mode(claude_agent_sdk::PermissionMode::BypassPermissions)
            .build();

        let stream = query(prompt, Some(options))
            .await
            .with_context(|| format!("Failed to query {} agent", agent))?;
        let mut stream = Box::pin(stream);

        let mut response_text = String::new();
        let mut errored = false;

        while let Some(message) = stream.next().await {
            match message.context("Failed to receive message from stream")? {
                Message::Assistant { message, .. } => {
                    for block in &message.content {
                        match block {
                            ContentBlock::Text { text } => {
                                tracing::debug!(agent = %agent, chunk = %text, "agent text");
                                response_text.push_str(text);
                            }
                            ContentBlock::ToolUse { name, .. } => {
                                tracing::debug!(agent = %agent, tool = %name, "agent tool use");
                            }
                            _ => {}
                        }
                    }
                }
                Message::Result { is_error, .. } => {
                    errored = is_error;
                    break;
                }
                _ => {}
            }
        }

        if errored {
            anyhow::bail!("{} agent reported an error result", agent);
        }

        Ok(response_text)
    }
}
