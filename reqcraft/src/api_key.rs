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

//! Api key support with convenience APIs.

pub use reqcraft_api_key::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default api key Signer type.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default api key signer reading `REQCRAFT_API_KEY`.
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    Signer::new(
        default_context(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    )
}
