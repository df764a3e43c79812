use std::env;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use aex_core::{Env, Error, HttpSend, Result};

/// Batteries-included context implementation: reqwest for HTTP sending,
/// the process environment for configuration.
///
/// Wire it into a [`Context`](aex_core::Context) with `with_http_send` and
/// `with_env`. Callers that need a tuned HTTP client can hand one over via
/// [`DefaultContext::with_client`].
#[derive(Debug, Default, Clone)]
pub struct DefaultContext {
    client: Client,
}

impl DefaultContext {
    /// Create a default context with a fresh reqwest client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a default context around an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        // Convert http::Request to reqwest::Request
        let method = req.method().clone();
        let uri = req.uri().to_string();
        let headers = req.headers().clone();
        let body = req.into_body();

        let resp = self
            .client
            .request(method, uri)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|err| Error::io("failed to send http request").with_source(err))?;

        // Convert reqwest::Response back to http::Response
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|err| Error::io("failed to read http response body").with_source(err))?;

        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }

        Ok(builder.body(body)?)
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
