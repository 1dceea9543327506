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

/// EnvCredentialProvider loads the api key from `REQCRAFT_API_KEY`.
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
        Ok(ctx.env_var(REQCRAFT_API_KEY).map(Credential::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqcraft_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(REQCRAFT_API_KEY.to_string(), "key".to_string())]),
        });

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert_eq!(cred, Some(Credential::new("key")));

        let cred = EnvCredentialProvider::new()
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}
