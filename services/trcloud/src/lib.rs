//! Signer for the TRCLOUD API.
//!
//! TRCLOUD authenticates every call with a time based `securekey`: the MD5
//! of the credential's encrypt head, the letter `t` and the current unix
//! timestamp. The key travels inside a signed envelope that replaces the
//! request body:
//!
//! ```text
//! {"json": "{\"company_id\":..,\"passkey\":..,\"securekey\":..,\"timestamp\":..,<fields>}"}
//! ```
//!
//! The raw encrypt head is also sent in the `encrypt-head` header.

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod envelope;
pub use envelope::{coerce, securekey, Coerced, Envelope};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    StaticCredentialProvider,
};
