/// LLM client — the single point of entry for all OpenAI calls in scout.
///
/// ARCHITECTURAL RULE: No other module may call the chat completions API
/// directly. All LLM interactions MUST go through this module.
///
/// Model: gpt-4.1-mini (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all scoring calls.
pub const MODEL: &str = "gpt-4.1-mini";
/// The reply is a bare integer, so the completion budget stays tiny.
const MAX_TOKENS: u32 = 10;
/// Low temperature keeps repeated scoring of similar postings consistent.
const TEMPERATURE: f64 = 0.3;
const TOP_P: f64 = 1.0;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage<'a>],
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

/// One role-tagged message in a chat completion conversation.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn system(content: &'a str) -> Self {
        Self {
            role: "system",
            content,
        }
    }

    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Wraps the chat completions API. The credential is taken once at
/// construction and reused for every call in a run.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Sends one chat completion request and returns the trimmed text of the
    /// first choice. No numeric validation happens here — what counts as a
    /// well-formed reply is the caller's decision.
    pub async fn chat(&self, messages: &[ChatMessage<'_>]) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's message when the body parses as its error envelope
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let text = first_choice_text(chat).ok_or(LlmError::EmptyContent)?;

        debug!("LLM reply: {}", text.trim());
        Ok(text.trim().to_string())
    }
}

fn first_choice_text(chat: ChatResponse) -> Option<String> {
    chat.choices.into_iter().next().and_then(|c| c.message.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_carries_fixed_sampling_parameters() {
        let messages = [ChatMessage::system("rubric"), ChatMessage::user("job")];
        let request = ChatRequest {
            model: MODEL,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4.1-mini");
        assert_eq!(value["temperature"], 0.3);
        assert_eq!(value["max_tokens"], 10);
        assert_eq!(value["top_p"], 1.0);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "job");
    }

    #[test]
    fn test_first_choice_text_extracts_content() {
        let chat: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": " 85 "}}]
        }))
        .unwrap();
        assert_eq!(first_choice_text(chat).as_deref(), Some(" 85 "));
    }

    #[test]
    fn test_first_choice_text_empty_choices() {
        let chat: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(first_choice_text(chat).is_none());
    }

    #[test]
    fn test_first_choice_text_null_content() {
        let chat: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(first_choice_text(chat).is_none());
    }
}
