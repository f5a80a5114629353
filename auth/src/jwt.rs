use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use thiserror::Error;

use crate::claims::SessionClaims;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

/// Signer and verifier for session tokens.
///
/// Uses HS256 (HMAC with SHA-256). The secret is an external input; it is
/// never generated or persisted here.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new handler with a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode session claims into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// Signed JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a session token.
    ///
    /// Signature and expiry are both enforced.
    ///
    /// # Arguments
    /// * `token` - JWT string to decode
    ///
    /// # Returns
    /// Decoded session claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `DecodingFailed` - Token signature is invalid or malformed
    pub fn decode(&self, token: &str) -> Result<SessionClaims, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = SessionClaims::access("account-1", "alice", Duration::minutes(5));

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = SessionClaims::access("account-1", "alice", Duration::minutes(5));
        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        // Expired well past the default decode leeway
        let claims = SessionClaims::access("account-1", "alice", Duration::minutes(-10));
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }
}
