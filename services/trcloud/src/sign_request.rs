use std::mem;

use log::debug;
use reqcraft_core::time::{now, unix_timestamp, DateTime};
use reqcraft_core::{Body, Context, Error, RequestDescriptor, Result, SignRequest};

use crate::constants::*;
use crate::{Credential, Envelope};

/// RequestSigner that implements the trcloud api connector authentication.
///
/// Json and form bodies are replaced by a signed envelope wrapped in a
/// single `json` field. Only the explicit body parameters are coerced,
/// imported fields are merged unchanged. Raw bodies and requests without
/// a body are left alone. The `encrypt-head` header is set in every case.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
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
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let timestamp = unix_timestamp(self.time.unwrap_or_else(now));
        let mode = req.body_mode();

        match &mut req.body {
            Body::Json(fields) | Body::Form(fields) => {
                let mut envelope = Envelope::new(k, timestamp);
                for (name, value) in mem::take(fields) {
                    if !req.body_parameters.iter().any(|p| p.name == name) {
                        envelope.insert(name, value);
                    }
                }
                for p in &req.body_parameters {
                    envelope.merge_parameter(&p.name, &p.value);
                }
                *fields = envelope.into_body_fields()?;
                debug!("signed {mode} body at timestamp {timestamp}");
            }
            Body::Raw(_) | Body::None => {
                debug!("{mode} body is sent unsigned");
            }
        }

        req.header_insert(ENCRYPT_HEAD_HEADER, k.encrypt_head.as_str());
        Ok(())
    }
}
