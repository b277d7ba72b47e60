mod error;
mod generate_content_request;
mod response;

pub use error::{GeminiErrorBody, GeminiErrorObject};
pub use generate_content_request::{Content, GeminiGenerateContentRequest, GenerationConfig, Part};
pub use response::{Candidate, GeminiResponseBody};
