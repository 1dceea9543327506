use crate::{Context, RequestDescriptor, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential.
///
/// Every variant needs different credentials: the generic variant only needs
/// an API key, while the signed variant needs a company id, passkey and
/// encrypt head.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from the context.
    ///
    /// Returns `Ok(None)` when this source has nothing to offer.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to apply credentials to a request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this request signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Apply authentication to a resolved request.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential loaded for this request.
    /// Implementations should return an error if it is required but missing.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut RequestDescriptor,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
