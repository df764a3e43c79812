use std::sync::Arc;

use async_trait::async_trait;

use aex_core::Context;
use aex_core::ProvideCredential;
use aex_core::ProvideCredentialChain;
use aex_core::Result;

use crate::config::Config;
use crate::credential::Credential;
use crate::provide_credential::ConfigCredentialProvider;
use crate::provide_credential::EnvCredentialProvider;

/// DefaultCredentialProvider is the recommended loader for wskey pairs.
///
/// Resolution order:
///
/// 1. environment variables via [`EnvCredentialProvider`]
/// 2. explicit configuration via [`ConfigCredentialProvider`]
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a default credential provider without extra configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a default credential provider with a custom config.
    pub fn with_config(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(ConfigCredentialProvider::new(Arc::new(config)));

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
