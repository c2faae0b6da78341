use anyhow::{Context, Result};
use crux_http::HttpError;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use log::debug;
use reqwest::{Client, Method};
use students_ui_core::BASE_URL;

use crate::config::ApiConfig;

/// Executes the HTTP effects requested by the core against the backend API
///
/// Non-2xx answers are handed back as responses; the core decides what they
/// mean. Only transport failures become `HttpResult::Err`. No timeout is set,
/// a hanging backend keeps the request pending.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    prefix: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            prefix: config.prefix().to_string(),
        })
    }

    /// Replace the core's dummy base with the configured API URL
    ///
    /// # Examples
    /// ```
    /// use students_ui::{config::ApiConfig, http_client::ApiClient};
    ///
    /// let config = ApiConfig { base_url: "http://campus:9000/tp/".parse().unwrap() };
    /// let client = ApiClient::new(&config).unwrap();
    /// assert_eq!(
    ///     client.resolve_url("https://relative/api/departments"),
    ///     "http://campus:9000/tp/api/departments"
    /// );
    /// ```
    pub fn resolve_url(&self, core_url: &str) -> String {
        match core_url.strip_prefix(BASE_URL) {
            Some(path) => format!("{}{path}", self.prefix),
            None => core_url.to_string(),
        }
    }

    pub async fn execute(&self, request: HttpRequest) -> HttpResult {
        match self.send(request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) => HttpResult::Err(HttpError::Io(format!("{e:#}"))),
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.resolve_url(&request.url);
        let method = Method::from_bytes(request.method.as_bytes())
            .with_context(|| format!("failed to parse HTTP method {:?}", request.method))?;

        debug!("{method} {url}");

        let mut builder = self.client.request(method, &url);
        for header in request.headers {
            builder = builder.header(header.name, header.value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let res = builder
            .send()
            .await
            .with_context(|| format!("failed to send request to {url}"))?;
        let status = res.status();
        let body = res
            .bytes()
            .await
            .with_context(|| format!("failed to read response body from {url}"))?;

        debug!("{url} answered with status {status}");

        Ok(HttpResponse::status(status.as_u16())
            .body(body.to_vec())
            .build())
    }
}
