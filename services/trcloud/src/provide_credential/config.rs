use async_trait::async_trait;
use reqcraft_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider will load credential from config.
///
/// Fields missing from the config are filled from the environment.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);
        Ok(config.credential())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use reqcraft_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_config_credential_provider_fills_from_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (TRCLOUD_COMPANY_ID.to_string(), "from-env".to_string()),
                (TRCLOUD_ENCRYPT_HEAD.to_string(), "head".to_string()),
            ]),
        });
        let config = Config::new().with_company_id("1001").with_passkey("pk");

        let cred = ConfigCredentialProvider::new(Arc::new(config))
            .provide_credential(&ctx)
            .await?;
        assert_eq!(cred, Some(Credential::new("1001", "pk", "head")));

        Ok(())
    }

    #[tokio::test]
    async fn test_config_credential_provider_incomplete() -> anyhow::Result<()> {
        let config = Config::new().with_company_id("1001");
        let cred = ConfigCredentialProvider::new(Arc::new(config))
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}
