use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::prompts::analysis_prompt;
use crate::TARGET_LLM_REQUEST;

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const ANALYSIS_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const MAX_TOKENS: u32 = 4096;
pub const TEMPERATURE: f32 = 0.0;

/// Failure of the single outbound call to the analysis API. There is no
/// retry layer: the caller surfaces this directly.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to reach the analysis API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("analysis API returned an error: {details}")]
    Upstream { details: String },
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: Vec<ContentBlock<'a>>,
}

#[derive(Serialize)]
struct ContentBlock<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    text: String,
}

/// Sends the article through the fixed analysis prompt and returns the raw
/// text of the model's reply. Exactly one request per invocation; transport
/// defaults govern the timeout.
pub async fn request_analysis(
    client: &Client,
    api_key: &str,
    article: &str,
) -> Result<String, RelayError> {
    let prompt = analysis_prompt(article);
    let request = MessagesRequest {
        model: ANALYSIS_MODEL,
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
        messages: vec![Message {
            role: "user",
            content: vec![ContentBlock {
                kind: "text",
                text: &prompt,
            }],
        }],
    };

    info!(target: TARGET_LLM_REQUEST, "Sending analysis request for article of {} bytes", article.len());

    let response = client
        .post(ANTHROPIC_API_URL)
        .header("Content-Type", "application/json")
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let details = response.text().await.unwrap_or_default();
        error!(target: TARGET_LLM_REQUEST, "Analysis API request failed: status {} - {}", status, details);
        return Err(RelayError::Upstream { details });
    }

    let body: MessagesResponse = response.json().await?;
    match body.content.into_iter().next() {
        Some(block) if !block.text.is_empty() => {
            info!(target: TARGET_LLM_REQUEST, "Successfully received analysis response");
            Ok(block.text)
        }
        _ => {
            error!(target: TARGET_LLM_REQUEST, "Analysis API reply contained no text content");
            Err(RelayError::Upstream {
                details: "reply contained no text content".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_matches_wire_format() {
        let request = MessagesRequest {
            model: ANALYSIS_MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![Message {
                role: "user",
                content: vec![ContentBlock {
                    kind: "text",
                    text: "hello",
                }],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 4096,
                "temperature": 0.0,
                "messages": [{
                    "role": "user",
                    "content": [{ "type": "text", "text": "hello" }]
                }]
            })
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let body: MessagesResponse = serde_json::from_value(json!({
            "content": [{ "type": "text", "text": "the analysis" }]
        }))
        .unwrap();
        assert_eq!(body.content[0].text, "the analysis");
    }
}
