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

use log::{debug, warn};
use serde_json::json;
use serde_json::Value;

use crate::{assemble, normalize, ParamSource, Result, Signer, SigningCredential};

/// Field holding the message of a captured per-item failure.
pub const ERROR_FIELD: &str = "error";

/// Executor runs the resolve, sign, send and normalize pipeline over a batch.
///
/// Items are processed one after another; the next item is only resolved
/// once the previous response has arrived. Result `i` always belongs to
/// item `i`.
#[derive(Clone, Debug)]
pub struct Executor<K: SigningCredential> {
    signer: Signer<K>,
    continue_on_fail: bool,
}

impl<K: SigningCredential> Executor<K> {
    /// Create an executor that aborts on the first failure.
    pub fn new(signer: Signer<K>) -> Self {
        Self {
            signer,
            continue_on_fail: false,
        }
    }

    /// Record transport failures as `{"error": "<message>"}` and keep going.
    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }

    /// Process every item.
    ///
    /// ## Errors
    ///
    /// Assembly and signing errors always abort. Transport errors abort unless
    /// continue-on-fail is set. An aborted batch returns no partial results.
    pub async fn execute(&self, items: &[Value], params: &dyn ParamSource) -> Result<Vec<Value>> {
        let mut results = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let params = params.request_params(index, item)?;
            let mut req = assemble(&params)?;
            self.signer.sign(&mut req).await?;

            match self.signer.context().send(req).await {
                Ok(resp) => {
                    debug!("item {index} answered with status {}", resp.status());
                    results.push(normalize(resp.into_body()));
                }
                Err(err) if self.continue_on_fail && err.is_transport() => {
                    warn!("item {index} failed, continuing: {err}");
                    results.push(json!({ ERROR_FIELD: err.to_string() }));
                }
                Err(err) => return Err(err),
            }
        }

        Ok(results)
    }
}
