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

use reqcraft_core::hash::hex_md5;
use reqcraft_core::{Fields, Result};
use serde_json::{Number, Value};

use crate::constants::*;
use crate::Credential;

/// Compute the securekey: lowercase hex MD5 of `{encrypt_head}t{timestamp}`.
///
/// ```
/// use reqcraft_trcloud::securekey;
///
/// assert_eq!(securekey("abc", 1000), "b30b0fa20b0111af29f5d8cf8eaf0b96");
/// ```
pub fn securekey(encrypt_head: &str, timestamp: i64) -> String {
    hex_md5(format!("{encrypt_head}t{timestamp}").as_bytes())
}

/// Result of coercing a user-entered value.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    /// A JSON object whose keys are merged into the envelope directly.
    Object(Fields),
    /// A value stored under the parameter's own name.
    Value(Value),
}

/// Coerce a text value, first match wins:
///
/// 1. text that trims to a JSON object becomes [`Coerced::Object`]
/// 2. an optional sign followed by digits becomes a number
/// 3. `true` or `false`, ignoring case and surrounding spaces, becomes a boolean
/// 4. anything else stays a string
pub fn coerce(value: &str) -> Coerced {
    let trimmed = value.trim();

    if trimmed.starts_with('{') {
        if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(trimmed) {
            return Coerced::Object(fields);
        }
    }

    if let Some(n) = parse_integer(value) {
        return Coerced::Value(Value::Number(n));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" => Coerced::Value(Value::Bool(true)),
        "false" => Coerced::Value(Value::Bool(false)),
        _ => Coerced::Value(Value::String(value.to_string())),
    }
}

fn parse_integer(s: &str) -> Option<Number> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(v) = s.parse::<i64>() {
        return Some(v.into());
    }
    if let Ok(v) = s.parse::<u64>() {
        return Some(v.into());
    }
    // Too large for an integer, keep the magnitude like a float would.
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

/// The signed payload sent to trcloud.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    fields: Fields,
}

impl Envelope {
    /// Start an envelope with the credential fields, securekey and timestamp.
    pub fn new(cred: &Credential, timestamp: i64) -> Self {
        let mut fields = Fields::new();
        fields.insert(COMPANY_ID.to_string(), Value::String(cred.company_id.clone()));
        fields.insert(PASSKEY.to_string(), Value::String(cred.passkey.clone()));
        fields.insert(
            SECUREKEY.to_string(),
            Value::String(cred.securekey(timestamp)),
        );
        fields.insert(TIMESTAMP.to_string(), Value::from(timestamp));

        Self { fields }
    }

    /// Store a body field as it is.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Merge one explicit body parameter.
    ///
    /// The text is coerced first. A JSON object spreads its keys into the
    /// envelope, anything else is stored under `name`.
    pub fn merge_parameter(&mut self, name: &str, value: &str) {
        match coerce(value) {
            Coerced::Object(fields) => {
                for (k, v) in fields {
                    self.fields.insert(k, v);
                }
            }
            Coerced::Value(v) => {
                self.fields.insert(name.to_string(), v);
            }
        }
    }

    /// Fields of the envelope.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Wrap the serialized envelope as the single `json` body field.
    pub fn into_body_fields(self) -> Result<Fields> {
        let s = serde_json::to_string(&self.fields)?;

        let mut body = Fields::new();
        body.insert(ENVELOPE_FIELD.to_string(), Value::String(s));
        Ok(body)
    }
}
