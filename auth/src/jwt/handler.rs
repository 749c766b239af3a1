use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Session token handler for issuing and validating tokens.
///
/// Uses HS256 (HMAC with SHA-256). Validation is a pure function of
/// `(token, secret, now)` — expiry is checked against the caller-supplied
/// clock rather than the system clock, so tests can inject synthetic time.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl_hours: i64,
}

impl JwtHandler {
    /// Create a new token handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl_hours` - Fixed lifetime applied to every issued token
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Rotate secrets periodically
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl_hours,
        }
    }

    /// Issue a signed session token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier to embed as the subject
    /// * `now` - Issuance instant; expiry is `now` plus the configured TTL
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_user(user_id, now, self.ttl_hours);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a session token and extract the subject.
    ///
    /// Signature integrity is checked first; a token that fails structural or
    /// signature checks is rejected before its expiry is ever inspected.
    ///
    /// # Arguments
    /// * `token` - Token string to validate
    /// * `now` - Instant to evaluate expiry against
    ///
    /// # Returns
    /// The embedded user identifier
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature mismatch or malformed token
    /// * `Expired` - Token expiry instant is at or before `now`
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<i64, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is evaluated against the injected clock below, not the
        // library's view of the system time.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidSignature)?;

        if token_data.claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_and_validate() {
        let handler = JwtHandler::new(SECRET, 24);
        let now = fixed_now();

        let token = handler.issue(42, now).expect("Failed to issue token");
        assert!(!token.is_empty());

        let user_id = handler.validate(&token, now).expect("Failed to validate");
        assert_eq!(user_id, 42);
    }

    #[test]
    fn test_validate_expired_token() {
        let handler = JwtHandler::new(SECRET, 1);
        let now = fixed_now();

        let token = handler.issue(42, now).unwrap();

        assert_eq!(
            handler.validate(&token, now + Duration::hours(2)),
            Err(TokenError::Expired)
        );
        // Exactly at the expiry instant counts as expired.
        assert_eq!(
            handler.validate(&token, now + Duration::hours(1)),
            Err(TokenError::Expired)
        );
        // Just before expiry is still valid.
        assert_eq!(
            handler.validate(&token, now + Duration::minutes(59)),
            Ok(42)
        );
    }

    #[test]
    fn test_validate_malformed_token() {
        let handler = JwtHandler::new(SECRET, 24);

        assert_eq!(
            handler.validate("invalid.token.here", fixed_now()),
            Err(TokenError::InvalidSignature)
        );
        assert_eq!(
            handler.validate("", fixed_now()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!", 24);
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!", 24);
        let now = fixed_now();

        let token = handler1.issue(42, now).unwrap();

        assert_eq!(
            handler2.validate(&token, now),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_validate_tampered_signature() {
        let handler = JwtHandler::new(SECRET, 24);
        let now = fixed_now();

        let token = handler.issue(42, now).unwrap();

        // Flip one character at the start of the signature segment.
        let signature_start = token.rfind('.').unwrap() + 1;
        let mut tampered: Vec<char> = token.chars().collect();
        tampered[signature_start] = if tampered[signature_start] == 'A' {
            'B'
        } else {
            'A'
        };
        let tampered: String = tampered.into_iter().collect();
        assert_ne!(tampered, token);

        assert_eq!(
            handler.validate(&tampered, now),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_validate_tampered_claims() {
        let handler = JwtHandler::new(SECRET, 24);
        let now = fixed_now();

        // Splice the payload of one token onto the signature of another.
        let token_a = handler.issue(1, now).unwrap();
        let token_b = handler.issue(2, now).unwrap();
        let payload_a: Vec<&str> = token_a.split('.').collect();
        let signature_b = token_b.split('.').nth(2).unwrap();
        let spliced = format!("{}.{}.{}", payload_a[0], payload_a[1], signature_b);

        assert_eq!(
            handler.validate(&spliced, now),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let issuing = JwtHandler::new(SECRET, 1);
        let other = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!", 1);
        let now = fixed_now();

        let token = issuing.issue(42, now).unwrap();
        let long_past_expiry = now + Duration::days(30);

        // An expired token under the wrong key reports the signature failure.
        assert_eq!(
            other.validate(&token, long_past_expiry),
            Err(TokenError::InvalidSignature)
        );
    }
}
