//! Wire types of the site-generation HTTP API.

mod provider;
mod requests;
mod responses;
pub mod timestamp_millis;

pub use provider::{AvailableProviders, ProviderKind, ProviderPreference, UnknownProvider};
pub use requests::{GenerateWebsiteRequest, TestProviderRequest};
pub use responses::{ConfigResponse, GenerateWebsiteResponse, HealthResponse, TestProviderResponse};
