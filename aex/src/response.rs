//! Atom entry the service answers a successful upload with.

use std::fmt::{self, Debug};

use serde::Deserialize;

use aex_core::utils::Redact;
use aex_core::{Error, Result};

/// Everything the service reports back about an uploaded document.
///
/// Blocks the service leaves out deserialize to their defaults, so absent
/// values read as empty strings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    /// Where the document was filed and the password protecting it.
    #[serde(rename = "accessInformationResponse")]
    pub access: AccessInformation,
    /// Citation metadata echoed back from the submission.
    #[serde(rename = "articleInformationResponse")]
    pub article: ArticleInformation,
    /// The borrowing institution the document was filed for.
    #[serde(rename = "borrowerInfoResponse")]
    pub borrower: BorrowerInfo,
    /// Request identifiers echoed back from the submission.
    #[serde(rename = "requestIdResponse")]
    pub request_ids: RequestIds,
}

impl UploadResponse {
    /// Parse the Atom entry body returned by the service.
    pub fn from_xml(body: &str) -> Result<Self> {
        let entry: AtomEntry = quick_xml::de::from_str(body).map_err(|err| {
            Error::remote_service("article exchange response is not parseable atom xml")
                .with_source(err)
        })?;
        Ok(entry.content.upload_response)
    }
}

/// Retrieval URL and password for the filed document.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccessInformation {
    pub url: String,
    pub password: String,
}

impl Debug for AccessInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessInformation")
            .field("url", &self.url)
            .field("password", &Redact::from(&self.password))
            .finish()
    }
}

/// Citation fields the service associated with the document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleInformation {
    pub number: String,
    pub date: String,
    pub title: String,
    pub article_author: String,
    pub article_title: String,
    pub volume: String,
    pub pages: String,
}

/// Borrower the document was filed for.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorrowerInfo {
    pub borrowing_symbol: String,
    pub borrowing_email: String,
}

/// Identifiers tying the document back to an interlibrary loan request.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestIds {
    pub oclc_id: String,
    pub illiad_id: String,
    pub vdx_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AtomEntry {
    content: AtomContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AtomContent {
    #[serde(rename = "uploadResponse")]
    upload_response: UploadResponse,
}

#[cfg(test)]
mod tests {
    use aex_core::ErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<entry xmlns="http://www.w3.org/2005/Atom">
  <title>Article Exchange</title>
  <updated>2013-03-08T16:35:33Z</updated>
  <content type="application/xml">
    <uploadResponse xmlns="http://worldcat.org/uploadResponse">
      <accessInformationResponse>
        <password>7r2Dq9</password>
        <url>https://ill.sd00.worldcat.org/articleexchange/doc/12345</url>
      </accessInformationResponse>
      <articleInformationResponse>
        <number>42</number>
        <date>2013</date>
        <title>Journal of Testing</title>
        <articleAuthor>Doe, J.</articleAuthor>
        <articleTitle>On Testing</articleTitle>
        <volume>7</volume>
        <pages>1-10</pages>
      </articleInformationResponse>
      <borrowerInfoResponse>
        <borrowingSymbol>ZXC</borrowingSymbol>
        <borrowingEmail>ill@example.edu</borrowingEmail>
      </borrowerInfoResponse>
      <requestIdResponse>
        <oclcId>100-200-300</oclcId>
        <illiadId>ILL-9</illiadId>
      </requestIdResponse>
    </uploadResponse>
  </content>
</entry>"#;

    #[test]
    fn test_parse_full_response() {
        let resp = UploadResponse::from_xml(SAMPLE).unwrap();

        assert_eq!(resp.access.password, "7r2Dq9");
        assert_eq!(
            resp.access.url,
            "https://ill.sd00.worldcat.org/articleexchange/doc/12345"
        );

        assert_eq!(resp.article.number, "42");
        assert_eq!(resp.article.date, "2013");
        assert_eq!(resp.article.title, "Journal of Testing");
        assert_eq!(resp.article.article_author, "Doe, J.");
        assert_eq!(resp.article.article_title, "On Testing");
        assert_eq!(resp.article.volume, "7");
        assert_eq!(resp.article.pages, "1-10");

        assert_eq!(resp.borrower.borrowing_symbol, "ZXC");
        assert_eq!(resp.borrower.borrowing_email, "ill@example.edu");

        assert_eq!(resp.request_ids.oclc_id, "100-200-300");
        assert_eq!(resp.request_ids.illiad_id, "ILL-9");
        // Not present in the reply, falls back to the default.
        assert_eq!(resp.request_ids.vdx_id, "");
    }

    #[test]
    fn test_parse_minimal_response() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom">
  <content type="application/xml">
    <uploadResponse xmlns="http://worldcat.org/uploadResponse">
      <accessInformationResponse>
        <password>pw</password>
        <url>https://ill.sd00.worldcat.org/articleexchange/doc/1</url>
      </accessInformationResponse>
    </uploadResponse>
  </content>
</entry>"#;

        let resp = UploadResponse::from_xml(xml).unwrap();
        assert_eq!(resp.access.password, "pw");
        assert_eq!(resp.article.title, "");
        assert_eq!(resp.borrower.borrowing_symbol, "");
        assert_eq!(resp.request_ids.oclc_id, "");
    }

    #[test]
    fn test_unparseable_response() {
        let err = UploadResponse::from_xml("this is not xml at all").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteService);
    }

    #[test]
    fn test_debug_redacts_access_password() {
        let resp = UploadResponse::from_xml(SAMPLE).unwrap();
        let printed = format!("{:?}", resp.access);

        assert!(!printed.contains("7r2Dq9"), "got {printed}");
        assert!(printed.contains("***"));
        assert!(printed.contains("https://ill.sd00.worldcat.org"));
    }
}
