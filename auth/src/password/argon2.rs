use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Minimum accepted plaintext length.
    pub const MIN_LENGTH: usize = 6;

    /// Create a new password hasher with the default work factor.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a password hasher with explicit Argon2 parameters.
    ///
    /// # Arguments
    /// * `params` - Memory, iteration, and parallelism cost parameters
    ///
    /// # Returns
    /// PasswordHasher instance with the given work factor
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation, so hashing the same
    /// plaintext twice yields different digests.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `Empty` - Password is empty
    /// * `TooShort` - Password is shorter than `MIN_LENGTH`
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }

        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A mismatch is an `Ok(false)` result, not an error; verification is
    /// constant-time over the digest.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `Empty` - Password or hash is empty
    /// * `MalformedHash` - Hash is not a structurally valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if password.is_empty() || hash.is_empty() {
            return Err(PasswordError::Empty);
        }

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        // Hash the password
        let hash = hasher.hash(password).expect("Failed to hash password");

        // Verify correct password
        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        // Verify incorrect password
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted_per_call() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("my_secure_password").unwrap();
        let second = hasher.hash("my_secure_password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("my_secure_password", &first).unwrap());
        assert!(hasher.verify("my_secure_password", &second).unwrap());
    }

    #[test]
    fn test_hash_rejects_empty_password() {
        let hasher = PasswordHasher::new();
        assert_eq!(hasher.hash(""), Err(PasswordError::Empty));
    }

    #[test]
    fn test_hash_rejects_short_password() {
        let hasher = PasswordHasher::new();
        assert_eq!(
            hasher.hash("abc"),
            Err(PasswordError::TooShort { min: 6, actual: 3 })
        );
    }

    #[test]
    fn test_hash_accepts_minimum_length() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("abcdef").expect("Failed to hash password");
        assert!(hasher.verify("abcdef", &hash).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_empty_inputs() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password").unwrap();

        assert_eq!(hasher.verify("", &hash), Err(PasswordError::Empty));
        assert_eq!(hasher.verify("password", ""), Err(PasswordError::Empty));
    }

    #[test]
    fn test_with_params() {
        // Low-cost parameters keep this test fast.
        let params = Params::new(1024, 2, 1, None).unwrap();
        let hasher = PasswordHasher::with_params(params);

        let hash = hasher.hash("my_secure_password").unwrap();
        assert!(hasher.verify("my_secure_password", &hash).unwrap());
    }
}
