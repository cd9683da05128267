use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";
pub const ROLE_SYSTEM: &str = "system";

/// Chat completion request as accepted on the public `/v1/chat/completions`
/// surface.
///
/// Notes:
/// - The endpoint is OpenAI-compatible, but clients may send a few extra
///   fields (e.g. `channelId`) that don't belong to the upstream OpenAI
///   schema; those live in the flattened extra envelope.
/// - Shared between non-stream and stream paths so clients can send one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    #[serde(default)]
    pub stream: bool,
    pub messages: Vec<ChatMessage>,
    #[serde(flatten)]
    pub extra: ChatCompletionExtraRequest,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletionExtraRequest {
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: MessageContent,
}

/// Message content is polymorphic on the wire: either a plain string or a
/// structured value (e.g. multi-part content with embedded media references).
/// Structured content is carried verbatim and never interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Structured(Value),
}

impl MessageContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            MessageContent::Structured(_) => None,
        }
    }
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Structured(Value::Null)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub param: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Usage,
    #[serde(default)]
    pub system_fingerprint: Option<String>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    #[serde(default)]
    pub message: Message,
    #[serde(default)]
    pub logprobs: Option<String>,
    #[serde(default)]
    pub finish_reason: String,
    #[serde(default)]
    pub delta: Delta,
}

/// Response-side message; upstream replies always carry plain text here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesGenerationRequest {
    #[serde(flatten)]
    pub extra: ChatCompletionExtraRequest,
    #[serde(default)]
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub response_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesGenerationResponse {
    pub created: i64,
    #[serde(rename = "dailyLimit", default)]
    pub daily_limit: bool,
    #[serde(default)]
    pub data: Vec<ImagesGenerationData>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagesGenerationData {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub revised_prompt: String,
    #[serde(default)]
    pub b64_json: String,
}

/// One part of a GPT-4V style multi-part user message. Wire record only;
/// extraction treats multi-part content as opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageContentPart {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image_url: ImageUrl,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageUrl {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationRequest {
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResponse {
    pub id: String,
    pub model: String,
    pub results: Vec<ModerationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModerationResult {
    pub flagged: bool,
    #[serde(default)]
    pub categories: HashMap<String, bool>,
    #[serde(default)]
    pub category_scores: HashMap<String, f64>,
}

impl ModerationResponse {
    /// Whether any result in the response was flagged.
    pub fn flagged(&self) -> bool {
        self.results.iter().any(|r| r.flagged)
    }
}
