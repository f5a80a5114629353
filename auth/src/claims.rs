use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Class of a session token.
///
/// Access tokens authorize requests; refresh tokens only mint new access
/// tokens. The class is embedded in the signed claims so one can never be
/// presented in place of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenUse {
    Access,
    Refresh,
}

/// Signed claims carried by every session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Subject (account identifier)
    pub sub: String,

    /// Username at issuance time
    pub username: String,

    /// Token class
    pub token_use: TokenUse,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token identifier, fresh per token
    pub jti: String,
}

impl SessionClaims {
    /// Build access-token claims for an account.
    ///
    /// # Arguments
    /// * `account_id` - Account identifier (becomes `sub`)
    /// * `username` - Username at issuance time
    /// * `ttl` - Time until expiry
    ///
    /// # Returns
    /// Claims with a fresh `jti` and `exp = now + ttl`
    pub fn access(account_id: &str, username: &str, ttl: Duration) -> Self {
        Self::new(account_id, username, TokenUse::Access, ttl)
    }

    /// Build refresh-token claims for an account.
    ///
    /// # Arguments
    /// * `account_id` - Account identifier (becomes `sub`)
    /// * `username` - Username at issuance time
    /// * `ttl` - Time until expiry
    ///
    /// # Returns
    /// Claims with a fresh `jti` and `exp = now + ttl`
    pub fn refresh(account_id: &str, username: &str, ttl: Duration) -> Self {
        Self::new(account_id, username, TokenUse::Refresh, ttl)
    }

    fn new(account_id: &str, username: &str, token_use: TokenUse, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: account_id.to_string(),
            username: username.to_string(),
            token_use,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims() {
        let claims = SessionClaims::access("account-1", "alice", Duration::minutes(5));

        assert_eq!(claims.sub, "account-1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.token_use, TokenUse::Access);
        assert_eq!(claims.exp - claims.iat, 5 * 60);
    }

    #[test]
    fn test_refresh_claims() {
        let claims = SessionClaims::refresh("account-1", "alice", Duration::hours(24));

        assert_eq!(claims.token_use, TokenUse::Refresh);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_jti_unique_per_token() {
        let first = SessionClaims::access("account-1", "alice", Duration::minutes(5));
        let second = SessionClaims::access("account-1", "alice", Duration::minutes(5));

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_token_use_serializes_lowercase() {
        let claims = SessionClaims::refresh("account-1", "alice", Duration::hours(1));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["token_use"], "refresh");
    }
}
