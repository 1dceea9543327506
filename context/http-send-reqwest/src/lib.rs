//! Reqwest-based transport for reqcraft.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] on top of a [`reqwest::Client`].
//! Timeouts, proxies and pooling are whatever the client was built with;
//! this crate adds no retries of its own.
//!
//! ## Example
//!
//! ```no_run
//! use reqcraft_core::{Context, OsEnv};
//! use reqcraft_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqcraft_core::{Error, HttpSend, Result};
use reqwest::Client;

/// Transport sending requests through reqwest.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)
            .map_err(|e| Error::transport(format!("invalid request: {e}")).with_source(e))?;
        debug!("reqwest: {} {}", req.method(), req.url());

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(e.to_string()).with_source(e))?;

        let mut builder = http::Response::builder()
            .status(resp.status())
            .version(resp.version());
        for (k, v) in resp.headers() {
            builder = builder.header(k, v);
        }

        let body = resp.bytes().await.map_err(|e| {
            Error::transport(format!("failed to read response body: {e}")).with_source(e)
        })?;
        builder
            .body(body)
            .map_err(|e| Error::transport(e.to_string()).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqcraft_core::{Context, RequestDescriptor};

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
        let req = RequestDescriptor::new(http::Method::GET, "http://127.0.0.1:9/unreachable");

        let err = ctx.send(req).await.unwrap_err();
        assert!(err.is_transport());
    }
}
