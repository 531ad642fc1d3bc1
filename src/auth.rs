//! Secret verification for the report-closed gate
//!
//! The delete flow is gated on a single shared secret. The check lives behind
//! [`SecretVerifier`] so the comparison strategy can be swapped without
//! touching the handlers.

/// Verifies a caller-supplied secret
pub trait SecretVerifier: Send + Sync {
    fn verify(&self, supplied: &str) -> bool;
}

/// Plaintext equality against a single configured secret.
///
/// Intentionally no hashing, lockout, or timing-safe comparison: the gate is
/// a convenience barrier, not an authentication system.
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl SecretVerifier for SharedSecretVerifier {
    fn verify(&self, supplied: &str) -> bool {
        supplied == self.secret
    }
}
