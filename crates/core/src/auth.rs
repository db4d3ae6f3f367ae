//! Authorization context passed explicitly into every protected operation.
//!
//! How a caller becomes authorized (PIN check, session) is decided outside
//! the engine; the engine only sees the resulting decision.

use crate::error::CoreError;

/// The per-request authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    authorized: bool,
}

impl AuthContext {
    pub fn authorized() -> Self {
        Self { authorized: true }
    }

    pub fn anonymous() -> Self {
        Self { authorized: false }
    }

    /// Fail closed unless authorized.
    pub fn require(&self) -> Result<(), CoreError> {
        if self.authorized {
            Ok(())
        } else {
            Err(CoreError::Unauthorized(
                "Maintenance access required".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_is_rejected() {
        assert!(matches!(
            AuthContext::anonymous().require(),
            Err(CoreError::Unauthorized(_))
        ));
    }

    #[test]
    fn authorized_passes() {
        assert!(AuthContext::authorized().require().is_ok());
    }
}
