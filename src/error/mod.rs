mod api;
mod generate;
mod provider;

pub use api::{ApiError, ApiErrorBody};
pub use generate::{GenerateError, ProviderFailure};
pub use provider::ProviderError;
