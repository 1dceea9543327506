use async_trait::async_trait;
use reqcraft_core::Result;
use reqcraft_core::{Context, ProvideCredential, ProvideCredentialChain};

use crate::credential::Credential;
use crate::provide_credential::EnvCredentialProvider;

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. Environment variables
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
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCredentialProvider;

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let credential = DefaultCredentialProvider::new()
            .provide_credential(&Context::new())
            .await
            .unwrap();
        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_push_front() {
        let credential = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("static"))
            .provide_credential(&Context::new())
            .await
            .unwrap();
        assert_eq!(credential, Some(Credential::new("static")));
    }
}
