mod api;
mod client;

pub use client::OpenaiClient;

pub(crate) const OPENAI_CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";

/// `max_tokens` for connectivity probes.
pub(crate) const PROBE_MAX_TOKENS: u32 = 10;
