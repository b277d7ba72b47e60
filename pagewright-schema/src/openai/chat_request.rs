use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// OpenAI `/v1/chat/completions` request body.
///
/// Only the fields the generator sets are typed; anything else a caller wants
/// to forward goes through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,

    pub messages: Vec<ChatMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One chat turn. `role` is kept as a raw string (`system`, `user`, `assistant`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl ChatCompletionRequest {
    /// Builds a single-shot request: an optional system turn followed by one user turn.
    ///
    /// A blank system instruction is dropped rather than sent as an empty message.
    pub fn single_turn(model: impl Into<String>, system: &str, prompt: &str) -> Self {
        let mut messages = Vec::with_capacity(2);
        if !system.trim().is_empty() {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));

        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
            extra: BTreeMap::new(),
        }
    }
}
