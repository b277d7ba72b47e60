use super::api::OpenaiApi;
use super::{OPENAI_CHAT_COMPLETIONS_PATH, PROBE_MAX_TOKENS};
use crate::config::OpenaiResolvedConfig;
use crate::error::ProviderError;
use crate::providers::TextGenerator;
use crate::providers::http::endpoint;
use crate::providers::policy::{classify_upstream_error, read_json};
use async_trait::async_trait;
use pagewright_schema::{
    ChatCompletionRequest, ChatCompletionResponse, OpenaiErrorBody, ProviderKind,
};
use std::time::Instant;
use tracing::{info, warn};

/// Chat-completions adapter.
pub struct OpenaiClient {
    cfg: OpenaiResolvedConfig,
    client: reqwest::Client,
}

impl OpenaiClient {
    pub fn new(cfg: OpenaiResolvedConfig, client: reqwest::Client) -> Self {
        Self { cfg, client }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.cfg
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::missing_credential(ProviderKind::Openai))
    }

    async fn complete(&self, body: &ChatCompletionRequest) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;
        let url = endpoint(&self.cfg.base_url, OPENAI_CHAT_COMPLETIONS_PATH)?;

        let start = Instant::now();
        let req = OpenaiApi::build_chat_request(&self.client, &url, api_key, body)?;
        let resp = self.client.execute(req).await?;
        let took = start.elapsed();

        if !resp.status().is_success() {
            let err = classify_upstream_error::<OpenaiErrorBody>(ProviderKind::Openai, resp).await;
            warn!(
                channel = "openai",
                req.model = %body.model,
                error = %err,
                "[OpenAI] [{:?}] Upstream rejected chat completion",
                took
            );
            return Err(err);
        }

        let parsed: ChatCompletionResponse = read_json(resp).await?;
        info!(
            channel = "openai",
            req.model = %body.model,
            upstream.model = parsed.model.as_deref().unwrap_or("-"),
            "[OpenAI] [{:?}] Post chat completions -> {}",
            took,
            body.model
        );

        match parsed.first_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(ProviderError::EmptyCompletion {
                reason: parsed
                    .choices
                    .first()
                    .and_then(|c| c.finish_reason.clone())
                    .unwrap_or_else(|| "no choices".to_string()),
            }),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenaiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Openai
    }

    fn is_configured(&self) -> bool {
        self.cfg.api_key.is_some()
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, ProviderError> {
        let mut body = ChatCompletionRequest::single_turn(self.cfg.model.as_str(), system, prompt);
        body.max_tokens = Some(self.cfg.max_tokens);
        body.temperature = Some(self.cfg.temperature);
        self.complete(&body).await
    }

    async fn probe(&self) -> Result<(), ProviderError> {
        let mut body = ChatCompletionRequest::single_turn(self.cfg.model.as_str(), "", "Hello");
        body.max_tokens = Some(PROBE_MAX_TOKENS);
        // A probe that hits max_tokens still proves the key works.
        match self.complete(&body).await {
            Ok(_) | Err(ProviderError::EmptyCompletion { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
