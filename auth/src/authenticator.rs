use chrono::Duration;

use crate::claims::SessionClaims;
use crate::claims::TokenUse;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Access/refresh token pair minted for a verified identity.
pub struct SessionTokens {
    /// Short-lived token authorizing subsequent requests
    pub access: String,

    /// Longer-lived token used to mint new access tokens
    pub refresh: String,
}

/// Session credential coordinator.
///
/// Issues access/refresh token pairs for verified identities and validates
/// presented tokens by class. Expiry policy and the signing secret are
/// configuration inputs; this type never decides them.
pub struct Authenticator {
    jwt_handler: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `access_ttl_minutes` - Access token lifetime in minutes
    /// * `refresh_ttl_hours` - Refresh token lifetime in hours
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(jwt_secret: &[u8], access_ttl_minutes: i64, refresh_ttl_hours: i64) -> Self {
        Self {
            jwt_handler: JwtHandler::new(jwt_secret),
            access_ttl: Duration::minutes(access_ttl_minutes),
            refresh_ttl: Duration::hours(refresh_ttl_hours),
        }
    }

    /// Mint an access/refresh token pair for a verified identity.
    ///
    /// The two tokens carry distinct `jti` values and independent expiries;
    /// no entropy is shared between them or across calls.
    ///
    /// # Arguments
    /// * `account_id` - Identity the session is bound to
    /// * `username` - Username at issuance time
    ///
    /// # Returns
    /// SessionTokens with signed access and refresh tokens
    ///
    /// # Errors
    /// * `JwtError` - Token signing failed
    pub fn issue_session(
        &self,
        account_id: &str,
        username: &str,
    ) -> Result<SessionTokens, JwtError> {
        let access_claims = SessionClaims::access(account_id, username, self.access_ttl);
        let refresh_claims = SessionClaims::refresh(account_id, username, self.refresh_ttl);

        Ok(SessionTokens {
            access: self.jwt_handler.encode(&access_claims)?,
            refresh: self.jwt_handler.encode(&refresh_claims)?,
        })
    }

    /// Validate an access token and return its claims.
    ///
    /// Refresh tokens are rejected here regardless of validity.
    ///
    /// # Arguments
    /// * `token` - Bearer token presented by a client
    ///
    /// # Returns
    /// Verified session claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `DecodingFailed` - Signature is invalid or token is malformed
    /// * `InvalidToken` - Token is valid but not access-class
    pub fn validate_access(&self, token: &str) -> Result<SessionClaims, JwtError> {
        let claims = self.jwt_handler.decode(token)?;

        if claims.token_use != TokenUse::Access {
            return Err(JwtError::InvalidToken(
                "expected an access token".to_string(),
            ));
        }

        Ok(claims)
    }

    /// Trade a refresh token for a new access token.
    ///
    /// # Arguments
    /// * `token` - Refresh token presented by a client
    ///
    /// # Returns
    /// Newly signed access token for the same identity
    ///
    /// # Errors
    /// * `TokenExpired` - Refresh token has expired
    /// * `DecodingFailed` - Signature is invalid or token is malformed
    /// * `InvalidToken` - Token is valid but not refresh-class
    pub fn refresh_access(&self, token: &str) -> Result<String, JwtError> {
        let claims = self.jwt_handler.decode(token)?;

        if claims.token_use != TokenUse::Refresh {
            return Err(JwtError::InvalidToken(
                "expected a refresh token".to_string(),
            ));
        }

        let access_claims = SessionClaims::access(&claims.sub, &claims.username, self.access_ttl);
        self.jwt_handler.encode(&access_claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_authenticator() -> Authenticator {
        Authenticator::new(b"test_secret_key_at_least_32_bytes!", 5, 24)
    }

    #[test]
    fn test_issue_session_mints_distinct_tokens() {
        let authenticator = test_authenticator();

        let tokens = authenticator
            .issue_session("account-1", "alice")
            .expect("Failed to issue session");

        assert!(!tokens.access.is_empty());
        assert!(!tokens.refresh.is_empty());
        assert_ne!(tokens.access, tokens.refresh);
    }

    #[test]
    fn test_validate_access_accepts_access_token() {
        let authenticator = test_authenticator();

        let tokens = authenticator
            .issue_session("account-1", "alice")
            .expect("Failed to issue session");

        let claims = authenticator
            .validate_access(&tokens.access)
            .expect("Access token validation failed");

        assert_eq!(claims.sub, "account-1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.token_use, TokenUse::Access);
    }

    #[test]
    fn test_validate_access_rejects_refresh_token() {
        let authenticator = test_authenticator();

        let tokens = authenticator
            .issue_session("account-1", "alice")
            .expect("Failed to issue session");

        let result = authenticator.validate_access(&tokens.refresh);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_refresh_access_mints_usable_access_token() {
        let authenticator = test_authenticator();

        let tokens = authenticator
            .issue_session("account-1", "alice")
            .expect("Failed to issue session");

        let access = authenticator
            .refresh_access(&tokens.refresh)
            .expect("Refresh failed");

        let claims = authenticator
            .validate_access(&access)
            .expect("Refreshed access token invalid");
        assert_eq!(claims.sub, "account-1");
    }

    #[test]
    fn test_refresh_access_rejects_access_token() {
        let authenticator = test_authenticator();

        let tokens = authenticator
            .issue_session("account-1", "alice")
            .expect("Failed to issue session");

        let result = authenticator.refresh_access(&tokens.access);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_access_rejects_garbage() {
        let authenticator = test_authenticator();

        let result = authenticator.validate_access("not.a.token");
        assert!(result.is_err());
    }
}
