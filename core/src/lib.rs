//! Core components for resolving declarative HTTP calls.
//!
//! This crate turns a description of an HTTP call into a fully specified
//! request, lets a variant-specific signer authenticate it and hands it to a
//! transport collaborator.
//!
//! ## Overview
//!
//! - **Context**: holds the transport ([`HttpSend`]) and environment ([`Env`]) implementations
//! - **URL Composer**: [`compose_url`] joins base, middle path and endpoint
//! - **Command Importer**: [`ImportedCommand::parse`] extracts fields from a `curl` invocation
//! - **Request Assembler**: [`assemble`] merges explicit parameters with imported fields
//! - **Signer**: [`Signer`] loads a credential through [`ProvideCredential`] and applies it through [`SignRequest`]
//! - **Response Normalizer**: [`normalize`] decodes responses, tolerating non-JSON text
//! - **Executor**: [`Executor`] runs all of the above over a batch of items
//!
//! ## Example
//!
//! ```
//! use reqcraft_core::{assemble, BodyMode, RequestParams};
//!
//! let params = RequestParams::new()
//!     .with_url("https://h.co/", "/api/", "/items")
//!     .with_curl("curl -H 'Accept: application/json'")
//!     .with_body_mode(BodyMode::Json)
//!     .with_body_parameter("name", "widget");
//!
//! let req = assemble(&params).unwrap();
//! assert_eq!(req.url, "https://h.co/api/items");
//! assert_eq!(req.header_get("Accept"), Some("application/json"));
//! assert_eq!(req.header_get("Content-Type"), Some("application/json"));
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod url;
pub use url::compose_url;
mod curl;
pub use curl::ImportedCommand;
mod request;
pub use request::{Body, BodyMode, Fields, Headers, RequestDescriptor};
mod params;
pub use params::{CurlImport, NameValue, ParamSource, RequestParams, DEFAULT_RAW_CONTENT_TYPE};
mod assemble;
pub use assemble::assemble;
mod response;
pub use response::{normalize, RawResponse, RAW_RESPONSE_FIELD};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
mod batch;
pub use batch::{Executor, ERROR_FIELD};
