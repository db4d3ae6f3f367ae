//! Maintenance PIN verification.
//!
//! Only the SHA-256 digest of the configured PIN is kept in memory, and
//! candidates are compared digest-to-digest so the comparison does not depend
//! on the PIN's length.

use std::fmt;

use sha2::{Digest, Sha256};

/// The configured maintenance PIN.
#[derive(Clone)]
pub struct MaintenancePin {
    digest: [u8; 32],
}

impl MaintenancePin {
    /// Wrap a plaintext PIN. Returns `None` for an empty or blank PIN.
    pub fn new(pin: &str) -> Option<Self> {
        let pin = pin.trim();
        if pin.is_empty() {
            return None;
        }
        Some(Self { digest: digest(pin) })
    }

    /// Whether `candidate` matches the configured PIN.
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate = digest(candidate.trim());
        // Fold over every byte instead of short-circuiting.
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for MaintenancePin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MaintenancePin(<redacted>)")
    }
}

fn digest(pin: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    hasher.finalize().into()
}
