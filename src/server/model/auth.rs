use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiry as seconds since the unix epoch
    pub exp: i64,
}

/// Keys and lifetime used to issue and verify bearer tokens
#[derive(Clone)]
pub struct AuthConfig {
    pub encoding_key: EncodingKey,
    pub decoding_key: DecodingKey,
    /// Token lifetime in seconds
    pub expiry_secs: i64,
}

impl AuthConfig {
    /// Creates HS256 keys from a shared secret
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_secs,
        }
    }
}
