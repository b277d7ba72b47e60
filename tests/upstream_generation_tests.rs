use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use pagewright::config::Config;
use pagewright::generation::{GenerationRequest, Generator};
use pagewright::providers::Providers;
use pagewright::store::ArtifactStore;
use pagewright::GenerateError;
use pagewright_schema::{ProviderKind, ProviderPreference};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, openai_key: Option<&str>, gemini_key: Option<&str>) -> Config {
    let mut raw = format!(
        r#"
            [providers.openai]
            base_url = "{uri}"

            [providers.gemini]
            base_url = "{uri}"
        "#,
        uri = server.uri()
    );
    if let Some(key) = openai_key {
        raw = raw.replacen(
            "[providers.openai]",
            &format!("[providers.openai]\napi_key = \"{key}\""),
            1,
        );
    }
    if let Some(key) = gemini_key {
        raw = raw.replacen(
            "[providers.gemini]",
            &format!("[providers.gemini]\napi_key = \"{key}\""),
            1,
        );
    }

    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::string(&raw))
        .extract()
        .expect("config extract")
}

fn generator(cfg: &Config) -> Generator {
    let providers = Providers::from_config(cfg).expect("http clients build");
    Generator::new(providers, ArtifactStore::new())
}

#[tokio::test]
async fn openai_fragment_is_wrapped_and_stored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-openai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "<h1>Cats</h1>"},
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cfg = config_for(&server, Some("sk-openai"), Some("g-key"));
    let generator = generator(&cfg);

    let generation = generator
        .generate_website(GenerationRequest::new("a page about cats", ProviderPreference::Auto))
        .await
        .expect("generation succeeds");

    assert_eq!(generation.provider, ProviderKind::Openai);
    assert!(generation.artifact.code.starts_with("<!DOCTYPE html>"));
    assert!(generation.artifact.code.contains("<h1>Cats</h1>"));

    let stored = generator
        .store()
        .get(&generation.artifact.id)
        .expect("artifact stored");
    assert_eq!(stored.prompt, "a page about cats");
    assert_eq!(stored.provider, ProviderKind::Openai);
}

#[tokio::test]
async fn auto_mode_falls_back_to_gemini_on_openai_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "message": "Rate limit reached",
                "type": "requests",
                "code": "rate_limit_exceeded"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "g-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "<!DOCTYPE html><html><body>ok</body></html>"}]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cfg = config_for(&server, Some("sk-openai"), Some("g-key"));
    let generation = generator(&cfg)
        .generate_website(GenerationRequest::new("landing page", ProviderPreference::Auto))
        .await
        .expect("fallback succeeds");

    assert_eq!(generation.provider, ProviderKind::Gemini);
    assert_eq!(
        generation.artifact.code,
        "<!DOCTYPE html><html><body>ok</body></html>"
    );
}

#[tokio::test]
async fn explicit_openai_failure_is_not_retried_elsewhere() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let cfg = config_for(&server, Some("sk-bad"), Some("g-key"));
    let err = generator(&cfg)
        .generate_website(GenerationRequest::new("page", ProviderPreference::Openai))
        .await
        .expect_err("explicit provider fails");

    match err {
        GenerateError::Provider { provider, source } => {
            assert_eq!(provider, ProviderKind::Openai);
            assert!(source.to_string().contains("Incorrect API key provided"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn probe_reaches_configured_gemini_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi!"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cfg = config_for(&server, None, Some("g-key"));
    let generator = generator(&cfg);
    let availability = generator.providers().availability();
    assert!(!availability.openai);
    assert!(availability.gemini);

    generator
        .providers()
        .get(ProviderKind::Gemini)
        .probe()
        .await
        .expect("probe succeeds");
}
