//! WorldCat wskey v2 hmac request builder
use std::collections::BTreeMap;
use std::fmt::Write;
use std::time::Duration;

use http::header::AUTHORIZATION;
use http::HeaderValue;
use http::Method;
use log::debug;
use percent_encoding::utf8_percent_encode;

use aex_core::hash::base64_hmac_sha256;
use aex_core::time::now;
use aex_core::time::DateTime;
use aex_core::Result;
use aex_core::{Context, Error, SignRequest, SigningRequest};

use super::constants::*;
use super::credential::Credential;

/// RequestSigner that implements the WorldCat wskey v2 hmac scheme.
///
/// - [HMAC Signature](https://www.oclc.org/developer/develop/authentication/hmac-signature.en.html)
#[derive(Debug, Default)]
pub struct RequestSigner {
    body_digest: Option<String>,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a request body digest into the signature.
    ///
    /// Compute the digest with [`aex_core::hash::base64_body_digest`] over
    /// the exact bytes the request will carry. The scheme treats the digest
    /// as optional: without one, an empty line is signed in its place.
    pub fn with_body_digest(mut self, digest: &str) -> Self {
        self.body_digest = Some(digest.to_string());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// A fresh nonce must be generated for every signature.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        if cred.client_id.is_empty() || cred.secret.is_empty() {
            return Err(Error::credential_invalid(
                "wskey client id and secret must not be empty",
            ));
        }
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "wskey signatures have no expiring form",
            ));
        }

        // Timestamp and nonce are drawn once and used for both the
        // normalized request and the Authorization header, so the header
        // always describes the exact string that was signed.
        let timestamp = self.time.unwrap_or_else(now).timestamp();
        let nonce = self.nonce.clone().unwrap_or_else(new_nonce);

        let mut ctx = SigningRequest::build(parts)?;

        let normalized = normalized_request(
            &ctx,
            cred,
            timestamp,
            &nonce,
            self.body_digest.as_deref(),
        )?;
        let signature = base64_hmac_sha256(cred.secret.as_bytes(), normalized.as_bytes());

        ctx.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = format!(
                "{SCHEME_ID} clientId=\"{}\", timestamp=\"{timestamp}\", nonce=\"{nonce}\", signature=\"{signature}\"",
                cred.client_id
            )
            .parse()?;
            value.set_sensitive(true);

            value
        });

        ctx.apply(parts)
    }
}

/// Generate a fresh nonce: eight lowercase hex chars from four random bytes.
fn new_nonce() -> String {
    hex::encode(rand::random::<[u8; 4]>())
}

/// Construct the normalized request.
///
/// ## Format
///
/// ```text
/// clientId + "\n" +
/// timestamp + "\n" +
/// nonce + "\n" +
/// bodyHash + "\n" +
/// method + "\n" +
/// "www.oclc.org" + "\n" +
/// "443" + "\n" +
/// "/wskey" + "\n" +
/// canonical query, one "name=value" line each, "\n" terminated
/// ```
///
/// The host, port and path lines are fixed by the scheme. The request's own
/// authority and path never enter the signature.
///
/// ## Reference
///
/// - [HMAC Signature](https://www.oclc.org/developer/develop/authentication/hmac-signature.en.html)
fn normalized_request(
    ctx: &SigningRequest,
    cred: &Credential,
    timestamp: i64,
    nonce: &str,
    body_digest: Option<&str>,
) -> Result<String> {
    if ctx.method != Method::GET && ctx.method != Method::POST {
        return Err(Error::request_invalid(format!(
            "wskey cannot sign method {}: only GET and POST are part of the protocol",
            ctx.method
        )));
    }

    let mut s = String::with_capacity(256);
    writeln!(&mut s, "{}", cred.client_id)?;
    writeln!(&mut s, "{timestamp}")?;
    writeln!(&mut s, "{nonce}")?;
    writeln!(&mut s, "{}", body_digest.unwrap_or_default())?;
    writeln!(&mut s, "{}", ctx.method.as_str())?;
    writeln!(&mut s, "{SIGNING_HOST}")?;
    writeln!(&mut s, "{SIGNING_PORT}")?;
    writeln!(&mut s, "{SIGNING_PATH}")?;
    for (name, value) in canonicalize_query(&ctx.query) {
        writeln!(&mut s, "{name}={value}")?;
    }

    debug!("normalized request: {}", &s);
    Ok(s)
}

/// Canonicalize decoded query pairs for signing.
///
/// Names and values are re-encoded with [`WSKEY_ENCODE_SET`] and sorted by
/// the encoded name. When a name repeats, the rightmost pair wins.
fn canonicalize_query(query: &[(String, String)]) -> BTreeMap<String, String> {
    query
        .iter()
        .map(|(name, value)| {
            (
                utf8_percent_encode(name, &WSKEY_ENCODE_SET).to_string(),
                utf8_percent_encode(value, &WSKEY_ENCODE_SET).to_string(),
            )
        })
        .collect()
}
