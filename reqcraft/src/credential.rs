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

use reqcraft_core::SigningCredential;

/// Credential of either authentication flavor.
///
/// The tag decides which signer authenticates the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    /// Key sent verbatim in the `Authorization` header.
    ApiKey(reqcraft_api_key::Credential),
    /// Secrets for the trcloud signed envelope.
    Trcloud(reqcraft_trcloud::Credential),
}

impl Credential {
    /// Name of the flavor, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::ApiKey(_) => "api_key",
            Credential::Trcloud(_) => "trcloud",
        }
    }
}

impl From<reqcraft_api_key::Credential> for Credential {
    fn from(value: reqcraft_api_key::Credential) -> Self {
        Credential::ApiKey(value)
    }
}

impl From<reqcraft_trcloud::Credential> for Credential {
    fn from(value: reqcraft_trcloud::Credential) -> Self {
        Credential::Trcloud(value)
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        match self {
            Credential::ApiKey(k) => k.is_valid(),
            Credential::Trcloud(k) => k.is_valid(),
        }
    }
}
