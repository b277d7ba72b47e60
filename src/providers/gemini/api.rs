use pagewright_schema::GeminiGenerateContentRequest;
use url::Url;

pub struct GeminiApi;

const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";

impl GeminiApi {
    pub fn build_generate_request(
        client: &reqwest::Client,
        url: &Url,
        api_key: &str,
        body: &GeminiGenerateContentRequest,
    ) -> Result<reqwest::Request, reqwest::Error> {
        client
            .post(url.clone())
            .header(GEMINI_API_KEY_HEADER, api_key)
            .json(body)
            .build()
    }
}
