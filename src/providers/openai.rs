pub mod types;
pub mod client;

pub use client::ModerationProvider;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ErrorResponse,
    ImagesGenerationRequest, ImagesGenerationResponse, Message, MessageContent, ModerationRequest,
    ModerationResponse, Usage,
};
