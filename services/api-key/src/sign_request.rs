use http::header::AUTHORIZATION;
use log::debug;
use reqcraft_core::{Context, Error, RequestDescriptor, Result, SignRequest};

use crate::Credential;

/// Header the key is sent in.
const AUTHORIZATION_KEY: &str = "Authorization";

/// RequestSigner that injects the api key as the `Authorization` header.
#[derive(Debug, Default)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut RequestDescriptor,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing api key"))?;

        if req.header_contains_ignore_case(AUTHORIZATION.as_str()) {
            debug!("replacing caller supplied authorization header");
        }
        req.header_replace_ignore_case(AUTHORIZATION_KEY, k.api_key.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use pretty_assertions::assert_eq;
    use reqcraft_core::{Body, ErrorKind};

    #[tokio::test]
    async fn test_sign_sets_key_verbatim() {
        let mut req = RequestDescriptor::new(Method::POST, "https://h.co/x");
        req.body = Body::Raw("payload".to_string());

        RequestSigner::new()
            .sign_request(&Context::new(), &mut req, Some(&Credential::new("Token abc")))
            .await
            .unwrap();

        assert_eq!(req.header_get("Authorization"), Some("Token abc"));
        assert_eq!(req.body, Body::Raw("payload".to_string()));
    }

    #[tokio::test]
    async fn test_sign_replaces_existing_header() {
        let mut req = RequestDescriptor::new(Method::GET, "https://h.co/x");
        req.header_insert("authorization", "stale");

        RequestSigner::new()
            .sign_request(&Context::new(), &mut req, Some(&Credential::new("fresh")))
            .await
            .unwrap();

        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.header_get("authorization"), Some("fresh"));
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let mut req = RequestDescriptor::new(Method::GET, "https://h.co/x");
        let err = RequestSigner::new()
            .sign_request(&Context::new(), &mut req, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
