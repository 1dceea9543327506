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

use async_trait::async_trait;
use reqcraft_core::{Context, ProvideCredential, Result};

use crate::{constants::*, Credential};

/// EnvCredentialProvider loads trcloud credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `TRCLOUD_COMPANY_ID`: The company id
/// - `TRCLOUD_PASSKEY`: The passkey
/// - `TRCLOUD_ENCRYPT_HEAD`: The encrypt head
///
/// All three must be present, otherwise nothing is returned.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (
            envs.get(TRCLOUD_COMPANY_ID),
            envs.get(TRCLOUD_PASSKEY),
            envs.get(TRCLOUD_ENCRYPT_HEAD),
        ) {
            (Some(company_id), Some(passkey), Some(encrypt_head)) => Ok(Some(Credential::new(
                company_id.as_str(),
                passkey.as_str(),
                encrypt_head.as_str(),
            ))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqcraft_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (TRCLOUD_COMPANY_ID.to_string(), "1001".to_string()),
            (TRCLOUD_PASSKEY.to_string(), "pk".to_string()),
            (TRCLOUD_ENCRYPT_HEAD.to_string(), "head".to_string()),
        ]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.company_id, "1001");
        assert_eq!(cred.passkey, "pk");
        assert_eq!(cred.encrypt_head, "head");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (TRCLOUD_COMPANY_ID.to_string(), "1001".to_string()),
            (TRCLOUD_PASSKEY.to_string(), "pk".to_string()),
        ]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
