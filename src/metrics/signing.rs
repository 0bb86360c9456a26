// Search Ad API request signing.
//
// Each request is signed over "{timestamp}.{method}.{uri}" with HMAC-SHA256
// keyed by the account secret, then base64-encoded. The timestamp is epoch
// milliseconds and must match the X-Timestamp header sent with the request.

use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_TIMESTAMP: &str = "X-Timestamp";
pub const HEADER_API_KEY: &str = "X-API-KEY";
pub const HEADER_CUSTOMER: &str = "X-Customer";
pub const HEADER_SIGNATURE: &str = "X-Signature";

/// Content type every Search Ad request declares.
pub const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// The exact string that gets signed.
pub fn signing_message(timestamp: &str, method: &str, uri: &str) -> String {
    format!("{timestamp}.{method}.{uri}")
}

/// base64(HMAC-SHA256(secret, "{timestamp}.{method}.{uri}")).
pub fn sign(secret: &str, timestamp: &str, method: &str, uri: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| anyhow!("Invalid Search Ad secret key: {e}"))?;
    mac.update(signing_message(timestamp, method, uri).as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Current time in epoch milliseconds, as sent in X-Timestamp.
pub fn timestamp_millis() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
