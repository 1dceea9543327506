// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use log::debug;
use reqcraft_core::{Context, Error, RequestDescriptor, Result, SignRequest};

use crate::Credential;

/// RequestSigner dispatching on the credential flavor.
///
/// Api key credentials only add a header. Trcloud credentials wrap the body
/// into the signed envelope.
#[derive(Debug, Default)]
pub struct RequestSigner {
    api_key: reqcraft_api_key::RequestSigner,
    trcloud: reqcraft_trcloud::RequestSigner,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the trcloud signer, for example to pin the signing time.
    pub fn with_trcloud(mut self, signer: reqcraft_trcloud::RequestSigner) -> Self {
        self.trcloud = signer;
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut RequestDescriptor,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        debug!("signing {} {} as {}", req.method, req.url, k.kind());

        match k {
            Credential::ApiKey(k) => self.api_key.sign_request(ctx, req, Some(k)).await,
            Credential::Trcloud(k) => self.trcloud.sign_request(ctx, req, Some(k)).await,
        }
    }
}
