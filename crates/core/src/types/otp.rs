//! One-time passcode type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A one-time passcode with its expiry instant.
///
/// The code is a six-digit number delivered out of band (SMS). Verification
/// is an equality check on the code plus a wall-clock comparison against
/// `expires_at`: a submission at exactly the expiry instant still passes.
///
/// Generation lives in the server (it needs a randomness source); this type
/// only carries the value and answers the validity question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Otp {
    /// The six-digit code.
    pub code: i32,
    /// Instant after which the code is no longer accepted.
    pub expires_at: DateTime<Utc>,
}

impl Otp {
    /// Smallest valid code (inclusive).
    pub const MIN_CODE: i32 = 100_000;
    /// Largest valid code (exclusive).
    pub const MAX_CODE: i32 = 1_000_000;

    /// Create an `Otp` from a code and expiry instant.
    #[must_use]
    pub const fn new(code: i32, expires_at: DateTime<Utc>) -> Self {
        Self { code, expires_at }
    }

    /// Whether a submitted code is accepted at instant `now`.
    ///
    /// Accepted iff the codes are equal and `now` is not past the expiry.
    #[must_use]
    pub fn accepts(&self, submitted: i32, now: DateTime<Utc>) -> bool {
        self.code == submitted && now <= self.expires_at
    }

    /// Whether the code has expired at instant `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_accepts_matching_code_before_expiry() {
        let now = Utc::now();
        let otp = Otp::new(123_456, now + Duration::minutes(30));
        assert!(otp.accepts(123_456, now));
    }

    #[test]
    fn test_accepts_at_exact_expiry_instant() {
        let now = Utc::now();
        let otp = Otp::new(123_456, now);
        assert!(otp.accepts(123_456, now));
    }

    #[test]
    fn test_rejects_wrong_code() {
        let now = Utc::now();
        let otp = Otp::new(123_456, now + Duration::minutes(30));
        assert!(!otp.accepts(654_321, now));
    }

    #[test]
    fn test_rejects_expired_code() {
        let now = Utc::now();
        let otp = Otp::new(123_456, now - Duration::seconds(1));
        assert!(!otp.accepts(123_456, now));
        assert!(otp.is_expired(now));
    }
}
