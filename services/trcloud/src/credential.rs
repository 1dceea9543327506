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

use std::fmt::{Debug, Formatter};

use reqcraft_core::{utils::Redact, SigningCredential};

use crate::envelope::securekey;

/// Credential for trcloud.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Company id of the trcloud account.
    pub company_id: String,
    /// Passkey of the trcloud account.
    pub passkey: String,
    /// Shared secret the securekey is derived from.
    pub encrypt_head: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        company_id: impl Into<String>,
        passkey: impl Into<String>,
        encrypt_head: impl Into<String>,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            passkey: passkey.into(),
            encrypt_head: encrypt_head.into(),
        }
    }

    /// Securekey of this credential at the given unix timestamp.
    #[inline]
    pub fn securekey(&self, timestamp: i64) -> String {
        securekey(&self.encrypt_head, timestamp)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("company_id", &self.company_id)
            .field("passkey", &Redact::from(&self.passkey))
            .field("encrypt_head", &Redact::from(&self.encrypt_head))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.company_id.is_empty() && !self.passkey.is_empty() && !self.encrypt_head.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_requires_all_fields() {
        assert!(Credential::new("1", "pk", "head").is_valid());
        assert!(!Credential::new("", "pk", "head").is_valid());
        assert!(!Credential::new("1", "", "head").is_valid());
        assert!(!Credential::new("1", "pk", "").is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::new("42", "super-secret-passkey", "head");
        let s = format!("{cred:?}");
        assert!(s.contains("42"));
        assert!(!s.contains("super-secret-passkey"));
        assert!(!s.contains("head\""));
    }
}
