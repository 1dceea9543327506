// Env values used in trcloud services.
/// Env holding the company id.
pub const TRCLOUD_COMPANY_ID: &str = "TRCLOUD_COMPANY_ID";
/// Env holding the passkey.
pub const TRCLOUD_PASSKEY: &str = "TRCLOUD_PASSKEY";
/// Env holding the encrypt head.
pub const TRCLOUD_ENCRYPT_HEAD: &str = "TRCLOUD_ENCRYPT_HEAD";
/// Env holding the instance base url.
pub const TRCLOUD_BASE_URL: &str = "TRCLOUD_BASE_URL";
/// Env overriding the middle path.
pub const TRCLOUD_MID_PATH: &str = "TRCLOUD_MID_PATH";
/// Env overriding the endpoint path.
pub const TRCLOUD_ENDPOINT_PATH: &str = "TRCLOUD_ENDPOINT_PATH";

// Request layout.
/// Middle path of the api connector.
pub const DEFAULT_MID_PATH: &str = "/application/api-connector2/end-point/";
/// Endpoint read when none is configured.
pub const DEFAULT_ENDPOINT_PATH: &str = "so/read.php";
/// Header carrying the raw encrypt head.
pub const ENCRYPT_HEAD_HEADER: &str = "encrypt-head";
/// The single body field wrapping the serialized envelope.
pub const ENVELOPE_FIELD: &str = "json";

// Envelope fields.
/// Company id field.
pub const COMPANY_ID: &str = "company_id";
/// Passkey field.
pub const PASSKEY: &str = "passkey";
/// Securekey field.
pub const SECUREKEY: &str = "securekey";
/// Timestamp field.
pub const TIMESTAMP: &str = "timestamp";
