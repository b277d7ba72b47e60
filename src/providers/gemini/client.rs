use super::api::GeminiApi;
use super::generate_content_path;
use crate::config::GeminiResolvedConfig;
use crate::error::ProviderError;
use crate::providers::TextGenerator;
use crate::providers::http::endpoint;
use crate::providers::policy::{classify_upstream_error, read_json};
use async_trait::async_trait;
use pagewright_schema::gemini::GenerationConfig;
use pagewright_schema::{
    GeminiErrorBody, GeminiGenerateContentRequest, GeminiResponseBody, ProviderKind,
};
use std::time::Instant;
use tracing::{info, warn};

/// `generateContent` adapter.
pub struct GeminiClient {
    cfg: GeminiResolvedConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(cfg: GeminiResolvedConfig, client: reqwest::Client) -> Self {
        Self { cfg, client }
    }

    fn generation_config(&self) -> Option<GenerationConfig> {
        if self.cfg.temperature.is_none() && self.cfg.max_output_tokens.is_none() {
            return None;
        }
        Some(GenerationConfig {
            temperature: self.cfg.temperature,
            max_output_tokens: self.cfg.max_output_tokens,
            ..Default::default()
        })
    }

    async fn complete(
        &self,
        body: &GeminiGenerateContentRequest,
    ) -> Result<GeminiResponseBody, ProviderError> {
        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::missing_credential(ProviderKind::Gemini))?;
        let url = endpoint(&self.cfg.base_url, &generate_content_path(&self.cfg.model))?;

        let start = Instant::now();
        let req = GeminiApi::build_generate_request(&self.client, &url, api_key, body)?;
        let resp = self.client.execute(req).await?;
        let took = start.elapsed();

        if !resp.status().is_success() {
            let err = classify_upstream_error::<GeminiErrorBody>(ProviderKind::Gemini, resp).await;
            warn!(
                channel = "gemini",
                req.model = %self.cfg.model,
                error = %err,
                "[Gemini] [{:?}] Upstream rejected generateContent",
                took
            );
            return Err(err);
        }

        let parsed: GeminiResponseBody = read_json(resp).await?;
        info!(
            channel = "gemini",
            req.model = %self.cfg.model,
            upstream.model = parsed.model_version.as_deref().unwrap_or("-"),
            "[Gemini] [{:?}] Post generateContent -> {}",
            took,
            self.cfg.model
        );
        Ok(parsed)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn is_configured(&self) -> bool {
        self.cfg.api_key.is_some()
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, ProviderError> {
        let mut body = GeminiGenerateContentRequest::single_turn(system, prompt);
        body.generation_config = self.generation_config();

        let parsed = self.complete(&body).await?;
        parsed.text().ok_or_else(|| ProviderError::EmptyCompletion {
            reason: parsed.stop_reason().unwrap_or("no candidates").to_string(),
        })
    }

    async fn probe(&self) -> Result<(), ProviderError> {
        let body = GeminiGenerateContentRequest::single_turn("", "Hello");
        self.complete(&body).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeminiConfig, ProviderDefaults};
    use serde_json::json;
    use url::Url;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
        let mut cfg = GeminiConfig::default().resolve(&ProviderDefaults::default());
        cfg.api_key = api_key.map(str::to_string);
        cfg.base_url = Url::parse(&server.uri()).expect("mock uri");
        GeminiClient::new(cfg, reqwest::Client::new())
    }

    #[tokio::test]
    async fn generate_sends_system_instruction_and_reads_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .and(header("x-goog-api-key", "g-test"))
            .and(body_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "a portfolio"}]}],
                "systemInstruction": {"parts": [{"text": "only html"}]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "<html><body>hi</body></html>"}]},
                    "finishReason": "STOP",
                    "index": 0
                }],
                "modelVersion": "gemini-1.5-flash-002"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server, Some("g-test"))
            .generate("only html", "a portfolio")
            .await
            .expect("generate");
        assert_eq!(text, "<html><body>hi</body></html>");
    }

    #[tokio::test]
    async fn invalid_key_is_rejected_with_upstream_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("bad"))
            .generate("sys", "prompt")
            .await
            .expect_err("invalid key");

        assert_eq!(
            err.to_string(),
            "upstream returned 400 Bad Request: INVALID_ARGUMENT: API key not valid. Please pass a valid API key."
        );
    }

    #[tokio::test]
    async fn blocked_prompt_is_an_empty_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, Some("g-test"))
            .generate("sys", "prompt")
            .await
            .expect_err("blocked");
        assert!(matches!(
            err,
            ProviderError::EmptyCompletion { ref reason } if reason == "SAFETY"
        ));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>captive portal</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("g-test"))
            .generate("sys", "prompt")
            .await
            .expect_err("decode");
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert!(!client.is_configured());
        assert!(matches!(
            client.probe().await,
            Err(ProviderError::MissingCredential {
                provider: ProviderKind::Gemini
            })
        ));
    }
}
