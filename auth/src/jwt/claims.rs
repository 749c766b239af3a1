use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// A token binds a user identifier to an issuance time and an expiry instant;
/// nothing else is encoded and nothing is stored server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's identifier.
    pub sub: i64,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user session.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `issued_at` - Issuance instant
    /// * `ttl_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_user(user_id: i64, issued_at: DateTime<Utc>, ttl_hours: i64) -> Self {
        let expires_at = issued_at + Duration::hours(ttl_hours);

        Self {
            sub: user_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Check whether the token is expired at `now`.
    ///
    /// A token whose expiry instant has been reached is already expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_user() {
        let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_user(42, issued_at, 24);

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_user(42, issued_at, 1);

        assert!(!claims.is_expired(issued_at));
        assert!(!claims.is_expired(issued_at + Duration::minutes(59)));
        // The expiry instant itself is no longer valid.
        assert!(claims.is_expired(issued_at + Duration::hours(1)));
        assert!(claims.is_expired(issued_at + Duration::hours(2)));
    }
}
