use crate::{Context, ProvideCredential, RequestDescriptor, Result, SignRequest, SigningCredential};
use log::{debug, warn};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded again for every request, so a credential changed
/// between two batch items is picked up by the second one.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            builder: Arc::new(builder),
        }
    }

    /// The context this signer loads credentials from.
    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Sign a resolved request.
    pub async fn sign(&self, req: &mut RequestDescriptor) -> Result<()> {
        let cred = self.provider.provide_credential(&self.ctx).await?;
        let cred = match cred {
            Some(cred) if cred.is_valid() => Some(cred),
            Some(cred) => {
                warn!("ignoring invalid credential: {cred:?}");
                None
            }
            None => {
                debug!("no credential provided");
                None
            }
        };

        self.builder.sign_request(&self.ctx, req, cred.as_ref()).await
    }
}
