use crate::audit::mode::ExtractMode;
use crate::providers::openai::types::{
    ChatCompletionRequest, ImagesGenerationRequest, ROLE_ASSISTANT, ROLE_SYSTEM, ROLE_USER,
};

/// Selects the text a request contributes to the content-audit step.
///
/// Notes:
/// - The output has zero or one elements: qualifying message texts are joined
///   with a newline into a single payload string.
/// - Absence of usable text is an empty sequence, never an error; callers
///   decide what an empty audit payload means.
pub trait UserContent {
    fn user_content(&self, mode: ExtractMode) -> Vec<String>;
}

impl UserContent for ChatCompletionRequest {
    fn user_content(&self, mode: ExtractMode) -> Vec<String> {
        let mut collected: Vec<String> = Vec::new();

        match mode {
            ExtractMode::AllDialog => {
                let mut found_user = false;
                let mut found_context = false;
                // Reverse scan: pick up the most recent user text and the most
                // recent assistant/system text, in encounter order.
                for msg in self.messages.iter().rev() {
                    if !found_user && msg.role == ROLE_USER {
                        if let Some(text) = msg.content.as_text() {
                            collected.push(text.to_owned());
                            found_user = true;
                        }
                    } else if !found_context
                        && (msg.role == ROLE_ASSISTANT || msg.role == ROLE_SYSTEM)
                    {
                        if let Some(text) = msg.content.as_text() {
                            collected.push(text.to_owned());
                            found_context = true;
                        }
                    }
                    if found_user && found_context {
                        break;
                    }
                }
            }
            ExtractMode::LastUserOnly => {
                // The scan terminates at the most recent user-role message
                // even when its content is not plain text; earlier user
                // messages are never considered.
                for msg in self.messages.iter().rev() {
                    if msg.role == ROLE_USER {
                        if let Some(text) = msg.content.as_text() {
                            collected.push(text.to_owned());
                        }
                        break;
                    }
                }
            }
        }

        join_payload(collected)
    }
}

impl UserContent for ImagesGenerationRequest {
    fn user_content(&self, _mode: ExtractMode) -> Vec<String> {
        vec![self.prompt.clone()]
    }
}

fn join_payload(collected: Vec<String>) -> Vec<String> {
    if collected.is_empty() {
        collected
    } else {
        vec![collected.join("\n")]
    }
}
