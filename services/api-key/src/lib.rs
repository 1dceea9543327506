//! Signer for APIs authenticated by a static key.
//!
//! The key is sent verbatim in the `Authorization` header. No scheme prefix
//! is added and the body is left untouched.
//!
//! ## Example
//!
//! ```no_run
//! use reqcraft_api_key::{DefaultCredentialProvider, RequestSigner};
//! use reqcraft_core::{Context, OsEnv, Signer};
//!
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//! ```

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
};
