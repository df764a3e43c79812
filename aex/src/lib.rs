#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use aex_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::DefaultContext;

/// WorldCat wskey v2 hmac signing scheme.
pub mod wskey {
    pub use aex_wskey::*;
}

mod client;
pub use client::Client;

mod multipart;
pub use multipart::{new_boundary, resolve_content_type, UploadBody};

mod request;
pub use request::{ExchangeRequest, DEFAULT_ENDPOINT};

mod response;
pub use response::{
    AccessInformation, ArticleInformation, BorrowerInfo, RequestIds, UploadResponse,
};
