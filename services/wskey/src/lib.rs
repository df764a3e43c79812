//! Signer for the WorldCat wskey v2 hmac scheme.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;

mod constants;
