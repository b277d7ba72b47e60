mod api;
mod client;

pub use client::GeminiClient;

/// Relative path of the `generateContent` method for `model`.
pub(crate) fn generate_content_path(model: &str) -> String {
    format!("v1beta/models/{model}:generateContent")
}
