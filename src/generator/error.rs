//! Error taxonomy for the generation workflow.
//!
//! Phase errors are terminal: nothing in this pipeline retries
//! automatically. They surface as the final `RunResult` classification, with
//! raw payloads kept on the error value for operator inspection.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Requirements input was empty or whitespace.
    #[error("requirements must not be empty")]
    EmptyRequirements,

    /// The planning agent returned a payload that does not conform to the
    /// design plan schema. `raw` carries the unmodified payload.
    #[error("design plan validation failed: {reason}")]
    PlanValidation { reason: String, raw: String },

    /// A blocking code task failed; later phases were skipped.
    #[error("code phase failed for {module}: {message}")]
    CodePhase { module: String, message: String },

    /// The front-end task failed after the code phase succeeded.
    #[error("front-end phase failed: {message}")]
    FrontendPhase { message: String },

    /// The delegated agent call itself failed.
    #[error("agent backend error: {0:#}")]
    Backend(#[source] anyhow::Error),
}
