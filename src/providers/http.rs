use reqwest::header::{CONNECTION, HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

pub(crate) const PAGEWRIGHT_USER_AGENT: &str = concat!("pagewright/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the reqwest client for one provider.
///
/// The total timeout bounds every completion call so a hung upstream cannot hold
/// a request forever.
pub(crate) fn build_client(
    proxy: Option<&Url>,
    enable_multiplexing: bool,
    timeout_secs: u64,
) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();

    let mut builder = reqwest::Client::builder()
        .user_agent(PAGEWRIGHT_USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(Duration::from_secs(timeout_secs.max(1)));

    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
    }

    if !enable_multiplexing {
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        builder = builder
            .http1_only()
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Duration::from_secs(0));
    } else {
        builder = builder.http2_adaptive_window(true);
    }

    builder.default_headers(headers).build()
}

/// Appends `path` to `base`, tolerating a trailing slash or a path prefix on `base`.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}
