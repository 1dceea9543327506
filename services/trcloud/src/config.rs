use std::fmt::{Debug, Formatter};

use http::Method;
use reqcraft_core::utils::Redact;
use reqcraft_core::{Context, Error, RequestParams, Result};

use crate::constants::*;
use crate::Credential;

/// Config carries all the configuration for trcloud.
#[derive(Clone, Default)]
pub struct Config {
    /// `company_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TRCLOUD_COMPANY_ID`]
    pub company_id: Option<String>,
    /// `passkey` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TRCLOUD_PASSKEY`]
    pub passkey: Option<String>,
    /// `encrypt_head` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TRCLOUD_ENCRYPT_HEAD`]
    pub encrypt_head: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TRCLOUD_BASE_URL`]
    pub base_url: Option<String>,
    /// `mid_path` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TRCLOUD_MID_PATH`]
    /// - default: [`DEFAULT_MID_PATH`]
    pub mid_path: Option<String>,
    /// `endpoint_path` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TRCLOUD_ENDPOINT_PATH`]
    /// - default: [`DEFAULT_ENDPOINT_PATH`]
    pub endpoint_path: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set company_id
    pub fn with_company_id(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    /// Set passkey
    pub fn with_passkey(mut self, passkey: impl Into<String>) -> Self {
        self.passkey = Some(passkey.into());
        self
    }

    /// Set encrypt_head
    pub fn with_encrypt_head(mut self, encrypt_head: impl Into<String>) -> Self {
        self.encrypt_head = Some(encrypt_head.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set mid_path
    pub fn with_mid_path(mut self, mid_path: impl Into<String>) -> Self {
        self.mid_path = Some(mid_path.into());
        self
    }

    /// Set endpoint_path
    pub fn with_endpoint_path(mut self, endpoint_path: impl Into<String>) -> Self {
        self.endpoint_path = Some(endpoint_path.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(TRCLOUD_COMPANY_ID) {
            self.company_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TRCLOUD_PASSKEY) {
            self.passkey.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TRCLOUD_ENCRYPT_HEAD) {
            self.encrypt_head.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TRCLOUD_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TRCLOUD_MID_PATH) {
            self.mid_path.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TRCLOUD_ENDPOINT_PATH) {
            self.endpoint_path.get_or_insert(v);
        }

        self
    }

    /// The credential, if all three secrets are set.
    pub fn credential(&self) -> Option<Credential> {
        match (&self.company_id, &self.passkey, &self.encrypt_head) {
            (Some(company_id), Some(passkey), Some(encrypt_head)) => Some(Credential::new(
                company_id.as_str(),
                passkey.as_str(),
                encrypt_head.as_str(),
            )),
            _ => None,
        }
    }

    /// Request parameters pointing at the configured endpoint.
    ///
    /// The method is `POST` and the body mode json, matching what the api
    /// connector expects. Callers add body parameters on top.
    pub fn request_params(&self) -> Result<RequestParams> {
        let base_url = self
            .base_url
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::config_invalid("trcloud base_url is required"))?;

        let mut params = RequestParams::new().with_method(Method::POST).with_url(
            base_url,
            self.mid_path.as_deref().unwrap_or(DEFAULT_MID_PATH),
            self.endpoint_path.as_deref().unwrap_or(DEFAULT_ENDPOINT_PATH),
        );
        params.send_body = true;
        Ok(params)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("company_id", &self.company_id)
            .field("passkey", &self.passkey.as_ref().map(Redact::from))
            .field("encrypt_head", &self.encrypt_head.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .field("mid_path", &self.mid_path)
            .field("endpoint_path", &self.endpoint_path)
            .finish()
    }
}
