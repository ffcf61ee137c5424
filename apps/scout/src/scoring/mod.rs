//! Job scoring — rates one posting against the fixed candidate profile
//! through the LLM client.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::llm_client::{ChatMessage, LlmClient};

pub mod prompts;

/// The scorer trait. Implement this to swap backends without touching the
/// pipeline; the driver carries it as `&dyn Scorer`.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// Returns the raw reply text, expected to be an integer in 0-100.
    /// Call failures collapse to `"0"` — output alone cannot distinguish a
    /// failed call from a genuine not-qualified verdict, but the logs can.
    async fn score(&self, company: &str, title: &str, description: &str) -> String;
}

/// LLM-backed scorer: fixed rubric, fixed profile, one call per posting.
pub struct JobScorer {
    llm: LlmClient,
}

impl JobScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Scorer for JobScorer {
    async fn score(&self, company: &str, title: &str, description: &str) -> String {
        let job_context = format!(
            "Company Name: {company}.\nJob Title: {title}\nJob Description: {description}"
        );
        let messages = [
            ChatMessage::system(prompts::SCORING_RUBRIC),
            ChatMessage::user(prompts::CANDIDATE_PROFILE),
            ChatMessage::user(&job_context),
        ];

        match self.llm.chat(&messages).await {
            Ok(reply) => {
                debug!("Scored {title} at {company}: {reply}");
                reply
            }
            Err(e) => {
                error!("Error scoring job {title} at {company}: {e}");
                "0".to_string()
            }
        }
    }
}
