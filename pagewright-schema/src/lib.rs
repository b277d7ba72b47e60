pub mod gemini;
pub mod openai;
pub mod site;

pub use gemini::{GeminiErrorBody, GeminiGenerateContentRequest, GeminiResponseBody};
pub use openai::{ChatCompletionRequest, ChatCompletionResponse, OpenaiErrorBody};
pub use site::{AvailableProviders, ProviderKind, ProviderPreference};
