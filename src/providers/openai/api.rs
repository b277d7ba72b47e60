use pagewright_schema::ChatCompletionRequest;
use url::Url;

pub struct OpenaiApi;

impl OpenaiApi {
    pub fn build_chat_request(
        client: &reqwest::Client,
        url: &Url,
        api_key: &str,
        body: &ChatCompletionRequest,
    ) -> Result<reqwest::Request, reqwest::Error> {
        client
            .post(url.clone())
            .bearer_auth(api_key)
            .json(body)
            .build()
    }
}
