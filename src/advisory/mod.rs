//! Free-form advice from a remote text-generation service.
//!
//! The remote call never fails from the caller's point of view: every error is
//! logged and replaced by a fixed fallback text.

mod gemini;
mod panel;
mod prompt;

use crate::models::{Material, Project};

pub use gemini::GeminiClient;
pub use panel::{AdvisoryPanel, AdvisoryRequest, AdvisoryState, ChatEntry, ChatRole, Ticket};
pub use prompt::build_prompt;

/// Shown when the service answers with no text.
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, no analysis could be generated at this time.";
/// Shown when the service could not be reached or returned an error.
pub const ERROR_FALLBACK: &str =
    "An error occurred while contacting the AI service. Please try again later.";

#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("no API key found in ${0}")]
    MissingApiKey(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Snapshot of the records sent along with a question.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryContext {
    pub projects: Vec<Project>,
    pub materials: Vec<Material>,
}

/// Opaque text-completion capability.
pub trait AdvisoryClient {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, AdvisoryError>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdvisoryOutcome {
    Resolved(String),
    Failed(String),
}

impl AdvisoryOutcome {
    pub fn text(&self) -> &str {
        match self {
            AdvisoryOutcome::Resolved(text) | AdvisoryOutcome::Failed(text) => text,
        }
    }
}

/// Turns a client into the `advise(context, query) -> text` boundary.
#[derive(Debug, Clone)]
pub struct Advisor<C> {
    client: C,
}

impl<C: AdvisoryClient> Advisor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn advise(&self, context: &AdvisoryContext, query: &str) -> AdvisoryOutcome {
        let prompt = build_prompt(context, query);
        match self.client.complete(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                tracing::info!(chars = text.len(), "advisory resolved");
                AdvisoryOutcome::Resolved(text.trim().to_string())
            }
            Ok(_) => {
                tracing::warn!("advisory service returned no text");
                AdvisoryOutcome::Failed(EMPTY_REPLY_FALLBACK.to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, "advisory request failed");
                AdvisoryOutcome::Failed(ERROR_FALLBACK.to_string())
            }
        }
    }
}
