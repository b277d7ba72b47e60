mod chat_request;
mod chat_response;
mod error;

pub use chat_request::{ChatCompletionRequest, ChatMessage};
pub use chat_response::{ChatChoice, ChatCompletionResponse, ChatResponseMessage};
pub use error::{OpenaiErrorBody, OpenaiErrorObject};
