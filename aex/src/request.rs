use std::fmt::Debug;
use std::fmt::Formatter;

use aex_core::utils::Redact;
use aex_core::{Error, Result};

/// Default Article Exchange submission endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ill.sd00.worldcat.org/articleexchange/";

/// One document submission to Article Exchange.
///
/// Carries the document-access pair (`autho` and its password, which later
/// protect the pickup of the uploaded document) plus the optional request
/// metadata. [`ExchangeRequest::url`] renders everything into the submit
/// URL's query string; the service takes all business fields as query
/// parameters, the request body is the document alone.
#[derive(Clone, Default)]
pub struct ExchangeRequest {
    endpoint: Option<String>,
    autho: String,
    password: String,

    requester_symbol: Option<String>,
    requester_email: Option<String>,
    oclc_request_id: Option<String>,
    illiad_request_id: Option<String>,
    vdx_request_id: Option<String>,
    journal_title: Option<String>,
    article_title: Option<String>,
    article_author: Option<String>,
    article_volume: Option<String>,
    article_issue: Option<String>,
    article_date: Option<String>,
    article_pages: Option<String>,
}

impl Debug for ExchangeRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRequest")
            .field("endpoint", &self.endpoint)
            .field("autho", &self.autho)
            .field("password", &Redact::from(&self.password))
            .field("requester_symbol", &self.requester_symbol)
            .field("requester_email", &self.requester_email)
            .field("oclc_request_id", &self.oclc_request_id)
            .field("illiad_request_id", &self.illiad_request_id)
            .field("vdx_request_id", &self.vdx_request_id)
            .field("journal_title", &self.journal_title)
            .field("article_title", &self.article_title)
            .field("article_author", &self.article_author)
            .field("article_volume", &self.article_volume)
            .field("article_issue", &self.article_issue)
            .field("article_date", &self.article_date)
            .field("article_pages", &self.article_pages)
            .finish()
    }
}

impl ExchangeRequest {
    /// Create a submission for the given document-access pair.
    pub fn new(autho: &str, password: &str) -> Self {
        Self {
            autho: autho.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    /// Override the service endpoint, for stage or test tiers.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Requester OCLC institution symbol.
    pub fn with_requester_symbol(mut self, v: &str) -> Self {
        self.requester_symbol = Some(v.to_string());
        self
    }

    /// Requester email address.
    pub fn with_requester_email(mut self, v: &str) -> Self {
        self.requester_email = Some(v.to_string());
        self
    }

    /// OCLC ILL request number.
    pub fn with_oclc_request_id(mut self, v: &str) -> Self {
        self.oclc_request_id = Some(v.to_string());
        self
    }

    /// ILLiad transaction number.
    pub fn with_illiad_request_id(mut self, v: &str) -> Self {
        self.illiad_request_id = Some(v.to_string());
        self
    }

    /// VDX request number.
    pub fn with_vdx_request_id(mut self, v: &str) -> Self {
        self.vdx_request_id = Some(v.to_string());
        self
    }

    /// Journal title.
    pub fn with_journal_title(mut self, v: &str) -> Self {
        self.journal_title = Some(v.to_string());
        self
    }

    /// Article title.
    pub fn with_article_title(mut self, v: &str) -> Self {
        self.article_title = Some(v.to_string());
        self
    }

    /// Article author.
    pub fn with_article_author(mut self, v: &str) -> Self {
        self.article_author = Some(v.to_string());
        self
    }

    /// Article volume.
    pub fn with_article_volume(mut self, v: &str) -> Self {
        self.article_volume = Some(v.to_string());
        self
    }

    /// Article issue.
    pub fn with_article_issue(mut self, v: &str) -> Self {
        self.article_issue = Some(v.to_string());
        self
    }

    /// Article date.
    pub fn with_article_date(mut self, v: &str) -> Self {
        self.article_date = Some(v.to_string());
        self
    }

    /// Article pages.
    pub fn with_article_pages(mut self, v: &str) -> Self {
        self.article_pages = Some(v.to_string());
        self
    }

    /// Render the submit URL.
    ///
    /// The access pair comes first, then the metadata fields in the wire
    /// order the service documents. Fields left unset or set to an empty
    /// string are omitted.
    pub fn url(&self) -> Result<String> {
        if self.autho.is_empty() || self.password.is_empty() {
            return Err(Error::config_invalid(
                "article exchange autho and password must not be empty",
            ));
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("autho", &self.autho);
        serializer.append_pair("password", &self.password);

        let optionals = [
            ("requesterInstSymbol", &self.requester_symbol),
            ("requesterEmail", &self.requester_email),
            ("oclcRequestId", &self.oclc_request_id),
            ("illiadRequestId", &self.illiad_request_id),
            ("vdxRequestId", &self.vdx_request_id),
            ("jTitle", &self.journal_title),
            ("aTitle", &self.article_title),
            ("aAuthor", &self.article_author),
            ("aVolume", &self.article_volume),
            ("aIssue", &self.article_issue),
            ("aDate", &self.article_date),
            ("aPages", &self.article_pages),
        ];
        for (name, value) in optionals {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                serializer.append_pair(name, value);
            }
        }

        let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        Ok(format!("{endpoint}?{}", serializer.finish()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use aex_core::ErrorKind;

    use super::*;

    #[test]
    fn test_url_with_all_fields() {
        let req = ExchangeRequest::new("100-200-300", "secret")
            .with_requester_symbol("ZZZ")
            .with_requester_email("ill@example.edu")
            .with_oclc_request_id("100200300")
            .with_illiad_request_id("456")
            .with_vdx_request_id("789")
            .with_journal_title("Journal of Testing")
            .with_article_title("On Testing")
            .with_article_author("Doe, J.")
            .with_article_volume("12")
            .with_article_issue("3")
            .with_article_date("2013-03-08")
            .with_article_pages("33-41");

        assert_eq!(
            req.url().unwrap(),
            "https://ill.sd00.worldcat.org/articleexchange/\
             ?autho=100-200-300&password=secret\
             &requesterInstSymbol=ZZZ&requesterEmail=ill%40example.edu\
             &oclcRequestId=100200300&illiadRequestId=456&vdxRequestId=789\
             &jTitle=Journal+of+Testing&aTitle=On+Testing&aAuthor=Doe%2C+J.\
             &aVolume=12&aIssue=3&aDate=2013-03-08&aPages=33-41"
        );
    }

    #[test]
    fn test_url_minimal() {
        let req = ExchangeRequest::new("100-200-300", "secret");

        assert_eq!(
            req.url().unwrap(),
            "https://ill.sd00.worldcat.org/articleexchange/?autho=100-200-300&password=secret"
        );
    }

    #[test]
    fn test_url_skips_empty_optionals() {
        let req = ExchangeRequest::new("100-200-300", "secret").with_journal_title("");

        assert_eq!(
            req.url().unwrap(),
            "https://ill.sd00.worldcat.org/articleexchange/?autho=100-200-300&password=secret"
        );
    }

    #[test]
    fn test_url_requires_access_pair() {
        let missing_autho = ExchangeRequest::new("", "secret");
        assert_eq!(
            missing_autho.url().unwrap_err().kind(),
            ErrorKind::ConfigInvalid
        );

        let missing_password = ExchangeRequest::new("100-200-300", "");
        assert_eq!(
            missing_password.url().unwrap_err().kind(),
            ErrorKind::ConfigInvalid
        );
    }

    #[test]
    fn test_custom_endpoint() {
        let req = ExchangeRequest::new("100-200-300", "secret")
            .with_endpoint("https://stage.example.org/articleexchange/");

        assert!(req
            .url()
            .unwrap()
            .starts_with("https://stage.example.org/articleexchange/?autho="));
    }

    #[test]
    fn test_debug_redacts_password() {
        let req = ExchangeRequest::new("100-200-300", "a-document-password");

        let printed = format!("{req:?}");
        assert!(!printed.contains("a-document-password"));
        assert!(printed.contains("100-200-300"));
    }
}
