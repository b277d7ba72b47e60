pub mod config;
pub mod error;
pub mod generation;
pub mod providers;
pub mod server;
pub mod store;
pub mod utils;

pub use error::{ApiError, GenerateError, ProviderError};
pub use generation::{Generation, GenerationRequest, Generator};
pub use store::{ArtifactStore, GeneratedArtifact};
