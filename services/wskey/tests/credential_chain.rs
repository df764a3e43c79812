//! Integration tests for ProvideCredentialChain with the wskey service

use async_trait::async_trait;
use aex_core::ProvideCredentialChain;
use aex_core::{Context, ProvideCredential};
use aex_wskey::{Config, ConfigCredentialProvider, Credential, DefaultCredentialProvider};
use std::sync::Arc;

/// Mock provider that tracks how many times it was called
#[derive(Debug)]
struct CountingProvider {
    name: String,
    return_credential: bool,
    call_count: Arc<std::sync::Mutex<usize>>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> aex_core::Result<Option<Self::Credential>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if self.return_credential {
            Ok(Some(Credential::new(
                &format!("{}_id", self.name),
                &format!("{}_secret", self.name),
            )))
        } else {
            Ok(None)
        }
    }
}

#[tokio::test]
async fn test_chain_stops_at_first_success() {
    let ctx = Context::new();

    let count1 = Arc::new(std::sync::Mutex::new(0));
    let count2 = Arc::new(std::sync::Mutex::new(0));
    let count3 = Arc::new(std::sync::Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1".to_string(),
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2".to_string(),
            return_credential: true,
            call_count: count2.clone(),
        })
        .push(CountingProvider {
            name: "provider3".to_string(),
            return_credential: true,
            call_count: count3.clone(),
        });

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_some());

    let cred = result.unwrap();
    assert_eq!(cred.client_id, "provider2_id");
    assert_eq!(cred.secret, "provider2_secret");

    // Verify call counts
    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(*count3.lock().unwrap(), 0); // Should not be called
}

#[tokio::test]
async fn test_chain_with_real_providers() {
    use aex_core::StaticEnv;
    use std::collections::HashMap;

    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            ("OCLC_WSKEY_CLIENT_ID".to_string(), "test_id".to_string()),
            ("OCLC_WSKEY_SECRET".to_string(), "test_secret".to_string()),
        ]),
    });

    let config = Arc::new(Config::default());

    // Create a chain with only ConfigCredentialProvider
    let chain = ProvideCredentialChain::new().push(ConfigCredentialProvider::new(config));

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_some());

    let cred = result.unwrap();
    assert_eq!(cred.client_id, "test_id");
    assert_eq!(cred.secret, "test_secret");
}

#[tokio::test]
async fn test_empty_chain_returns_none() {
    let ctx = Context::new();
    let chain: ProvideCredentialChain<Credential> = ProvideCredentialChain::new();

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_chain_all_providers_return_none() {
    let ctx = Context::new();

    let count1 = Arc::new(std::sync::Mutex::new(0));
    let count2 = Arc::new(std::sync::Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1".to_string(),
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2".to_string(),
            return_credential: false,
            call_count: count2.clone(),
        });

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_none());

    // Verify all providers were called
    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_default_provider_prefers_env() {
    use aex_core::StaticEnv;
    use std::collections::HashMap;

    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            ("OCLC_WSKEY_CLIENT_ID".to_string(), "env_id".to_string()),
            ("OCLC_WSKEY_SECRET".to_string(), "env_secret".to_string()),
        ]),
    });

    let provider = DefaultCredentialProvider::with_config(Config {
        client_id: Some("config_id".to_string()),
        secret: Some("config_secret".to_string()),
    });

    let cred = provider.provide_credential(&ctx).await.unwrap().unwrap();
    assert_eq!(cred.client_id, "env_id");
    assert_eq!(cred.secret, "env_secret");
}

#[tokio::test]
async fn test_default_provider_falls_back_to_config() {
    let provider = DefaultCredentialProvider::with_config(Config {
        client_id: Some("config_id".to_string()),
        secret: Some("config_secret".to_string()),
    });

    let cred = provider
        .provide_credential(&Context::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cred.client_id, "config_id");
    assert_eq!(cred.secret, "config_secret");
}
