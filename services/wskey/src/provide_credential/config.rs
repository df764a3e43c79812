use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use aex_core::Context;
use aex_core::ProvideCredential;
use aex_core::Result;

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider loads the wskey pair from a [`Config`].
///
/// Values present in the environment take priority over values carried
/// by the config itself.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new config credential provider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let env = Config::from_env(ctx);

        let client_id = env.client_id.or_else(|| self.config.client_id.clone());
        let secret = env.secret.or_else(|| self.config.secret.clone());

        match (client_id, secret) {
            (Some(client_id), Some(secret)) => {
                debug!("loading wskey credential from config");
                Ok(Some(Credential::new(&client_id, &secret)))
            }
            _ => {
                debug!("incomplete wskey config, skipping");
                Ok(None)
            }
        }
    }
}
