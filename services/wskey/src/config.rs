use std::fmt::Debug;
use std::fmt::Formatter;

use aex_core::utils::Redact;
use aex_core::Context;

use crate::constants::*;

/// Config carries all the configuration for the wskey service.
#[derive(Clone, Default)]
pub struct Config {
    /// `client_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OCLC_WSKEY_CLIENT_ID`]
    pub client_id: Option<String>,
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OCLC_WSKEY_SECRET`]
    pub secret: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            client_id: ctx.env_var(OCLC_WSKEY_CLIENT_ID),
            secret: ctx.env_var(OCLC_WSKEY_SECRET),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aex_core::StaticEnv;

    use super::*;

    #[test]
    fn test_config_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (OCLC_WSKEY_CLIENT_ID.to_string(), "client-id".to_string()),
                (OCLC_WSKEY_SECRET.to_string(), "client-secret".to_string()),
            ]),
        });

        let cfg = Config::from_env(&ctx);
        assert_eq!(cfg.client_id.as_deref(), Some("client-id"));
        assert_eq!(cfg.secret.as_deref(), Some("client-secret"));
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let cfg = Config {
            client_id: Some("client-id".to_string()),
            secret: Some("a-much-longer-client-secret".to_string()),
        };

        let printed = format!("{cfg:?}");
        assert!(!printed.contains("a-much-longer-client-secret"));
        assert!(printed.contains("client-id"));
    }
}
