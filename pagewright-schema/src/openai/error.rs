//! OpenAI API error schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Standard envelope:
/// `{ "error": { "message": "...", "type": "...", "code": "...", "param": ... } }`
#[derive(Debug, Serialize, Deserialize)]
pub struct OpenaiErrorBody {
    #[serde(rename = "error")]
    pub inner: OpenaiErrorObject,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenaiErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Usually a string (`invalid_api_key`, `insufficient_quota`), occasionally numeric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<Value>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OpenaiErrorBody {
    /// Human-readable summary, e.g. `insufficient_quota: You exceeded your current quota`.
    pub fn summary(&self) -> Option<String> {
        let message = self
            .inner
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())?;

        let code = match &self.inner.code {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => self.inner.r#type.clone().filter(|t| !t.is_empty()),
        };

        Some(match code {
            Some(code) => format!("{code}: {message}"),
            None => message.to_string(),
        })
    }
}
