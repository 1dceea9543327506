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

use reqcraft_core::{Context, Executor, OsEnv, Signer};
use reqcraft_http_send_reqwest::ReqwestHttpSend;

use crate::{Credential, DefaultCredentialProvider, RequestSigner};

/// Create a context with the reqwest transport and the OS environment.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a signer picking its flavor from whatever credential the
/// environment provides.
///
/// This function creates a signer with:
/// - Default context (reqwest transport, OS environment)
/// - Default credential provider (trcloud env, then api key env)
/// - Request signer dispatching on the credential flavor
pub fn default_signer() -> Signer<Credential> {
    Signer::new(
        default_context(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    )
}

/// Create an executor over [`default_signer`].
pub fn default_executor(continue_on_fail: bool) -> Executor<Credential> {
    Executor::new(default_signer()).with_continue_on_fail(continue_on_fail)
}
