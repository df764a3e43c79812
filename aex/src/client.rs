//! High level client for posting documents to Article Exchange.

use std::path::Path;

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use http::Method;
use log::debug;

use aex_core::{Context, Error, Result, Signer};
use aex_wskey::Credential;

use crate::multipart::UploadBody;
use crate::request::ExchangeRequest;
use crate::response::UploadResponse;

/// Signs and submits document uploads.
///
/// Holds a [`Context`] for transport and environment access and a
/// [`Signer`] carrying the wskey credential chain.
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a client from a prepared context and signer.
    pub fn new(ctx: Context, signer: Signer<Credential>) -> Self {
        Self { ctx, signer }
    }

    /// Upload the document at `path` for the given request.
    ///
    /// The part is named after the file's base name, which also selects
    /// the document media type by extension.
    pub async fn post_document(
        &self,
        request: &ExchangeRequest,
        path: impl AsRef<Path>,
    ) -> Result<UploadResponse> {
        let body = UploadBody::from_path(path).await?;
        self.submit(request, body).await
    }

    /// Upload an in-memory document under `filename` for the given request.
    pub async fn post_document_bytes(
        &self,
        request: &ExchangeRequest,
        filename: &str,
        content: impl Into<Bytes>,
    ) -> Result<UploadResponse> {
        let body = UploadBody::from_bytes(filename, content);
        self.submit(request, body).await
    }

    async fn submit(&self, request: &ExchangeRequest, body: UploadBody) -> Result<UploadResponse> {
        let url = request.url()?;
        let content_type = body.content_type_header();
        let content_length = body.total_length();
        let content = body.to_bytes().await?;

        let req = http::Request::builder()
            .method(Method::POST)
            .uri(&url)
            .header(ACCEPT, "application/atom+xml")
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, content_length)
            .body(content)?;

        // The signature covers the query pairs, so the uri must not change
        // after this point.
        let (mut parts, content) = req.into_parts();
        self.signer.sign(&mut parts, None).await?;
        let req = http::Request::from_parts(parts, content);

        let resp = self.ctx.http_send_as_string(req).await?;
        let (parts, body) = resp.into_parts();
        debug!("article exchange answered {}", parts.status);

        if !parts.status.is_success() {
            let snippet: String = body.chars().take(256).collect();
            return Err(Error::remote_service(format!(
                "article exchange rejected the upload: status {}, body {snippet:?}",
                parts.status
            )));
        }

        UploadResponse::from_xml(&body)
    }
}
