//! The HTTP seam every endpoint goes through.
//!
//! Endpoints only build a URL and decode the body; issuing the GET is the
//! job of a [`Transport`]. With the `client` feature, `HttpTransport` is the
//! `reqwest` implementation used by `NodeClient`.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Accept header value asking the node to encode 64-bit numbers as strings.
pub const LARGE_SIGNIFICAND_ACCEPT: &str = "application/json;large-significand-format=string";

/// Per-request options, forwarded to the transport untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    /// Overrides the transport's default timeout for this request.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Ask for `Long` values as decimal strings instead of JSON numbers.
    #[must_use]
    pub fn large_significand_format(self) -> Self {
        self.with_header("accept", LARGE_SIGNIFICAND_ACCEPT)
    }
}

/// Issues one GET and yields the body of a successful response.
///
/// Implementations must not retry. A non-2xx answer is reported as
/// [`Error::Status`](crate::Error::Status) with the raw body.
pub trait Transport {
    fn get(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Joins a base URL and an endpoint path, dropping one trailing `/` from the base.
pub(crate) fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{path}")
}

/// One GET through `transport`, body decoded as `R`.
pub(crate) async fn fetch_json<T, R>(
    transport: &T,
    base: &str,
    path: &str,
    options: &RequestOptions,
) -> Result<R>
where
    T: Transport,
    R: DeserializeOwned,
{
    let url = endpoint_url(base, path);
    let body = transport.get(&url, options).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(feature = "client")]
pub use http::{DEFAULT_TIMEOUT_SECS, HttpConfig, HttpTransport};

#[cfg(feature = "client")]
mod http {
    use std::time::Duration;

    use reqwest::Client;

    use super::{RequestOptions, Transport};
    use crate::error::{Error, Result};

    /// Default timeout for HTTP requests in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Settings applied when building the underlying `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct HttpConfig {
        pub timeout: Duration,
        pub user_agent: String,
    }

    impl Default for HttpConfig {
        fn default() -> Self {
            Self {
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                    .to_string(),
            }
        }
    }

    impl HttpConfig {
        #[must_use]
        pub fn with_timeout(timeout: Duration) -> Self {
            Self {
                timeout,
                ..Default::default()
            }
        }
    }

    /// `reqwest`-backed transport.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: Client,
    }

    impl HttpTransport {
        /// Transport with a plain `reqwest::Client` and no default timeout.
        pub fn new() -> Self {
            Self { client: Client::new() }
        }

        pub fn with_config(config: HttpConfig) -> Result<Self> {
            let client = Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent)
                .build()?;
            Ok(Self { client })
        }

        /// Wrap an already configured client.
        pub fn from_client(client: Client) -> Self {
            Self { client }
        }
    }

    impl Default for HttpTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for HttpTransport {
        async fn get(&self, url: &str, options: &RequestOptions) -> Result<String> {
            tracing::debug!("GET {url}");

            let mut request = self.client.get(url);
            if !options.headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("accept")) {
                request = request.header("accept", "application/json");
            }
            for (name, value) in &options.headers {
                request = request.header(name.as_str(), value.as_str());
            }
            if let Some(timeout) = options.timeout {
                request = request.timeout(timeout);
            }

            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                tracing::debug!("GET {url} returned status {status}");
                return Err(Error::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(body)
        }
    }
}
