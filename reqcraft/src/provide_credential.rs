use async_trait::async_trait;
use reqcraft_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::Credential;

/// Lifts a flavor specific provider into one returning the tagged [`Credential`].
#[derive(Debug)]
pub struct TaggedCredentialProvider<P> {
    inner: P,
}

impl<P> TaggedCredentialProvider<P> {
    /// Wrap a provider.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P> ProvideCredential for TaggedCredentialProvider<P>
where
    P: ProvideCredential,
    P::Credential: Into<Credential>,
{
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(self.inner.provide_credential(ctx).await?.map(Into::into))
    }
}

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. trcloud environment variables
/// 2. api key environment variable
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
        let chain = ProvideCredentialChain::new()
            .push(TaggedCredentialProvider::new(
                reqcraft_trcloud::DefaultCredentialProvider::new(),
            ))
            .push(TaggedCredentialProvider::new(
                reqcraft_api_key::DefaultCredentialProvider::new(),
            ));

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
    use reqcraft_core::StaticEnv;
    use std::collections::HashMap;

    fn ctx(pairs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[tokio::test]
    async fn test_trcloud_before_api_key() {
        let ctx = ctx(&[
            (reqcraft_api_key::REQCRAFT_API_KEY, "key"),
            (reqcraft_trcloud::TRCLOUD_COMPANY_ID, "1001"),
            (reqcraft_trcloud::TRCLOUD_PASSKEY, "pk"),
            (reqcraft_trcloud::TRCLOUD_ENCRYPT_HEAD, "head"),
        ]);

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap();
        assert_eq!(
            cred,
            Some(Credential::Trcloud(reqcraft_trcloud::Credential::new(
                "1001", "pk", "head"
            )))
        );
    }

    #[tokio::test]
    async fn test_falls_back_to_api_key() {
        let ctx = ctx(&[
            (reqcraft_api_key::REQCRAFT_API_KEY, "key"),
            (reqcraft_trcloud::TRCLOUD_COMPANY_ID, "1001"),
        ]);

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap();
        assert_eq!(
            cred,
            Some(Credential::ApiKey(reqcraft_api_key::Credential::new("key")))
        );
    }

    #[tokio::test]
    async fn test_nothing_configured() {
        let cred = DefaultCredentialProvider::new()
            .provide_credential(&Context::new())
            .await
            .unwrap();
        assert!(cred.is_none());
    }
}
