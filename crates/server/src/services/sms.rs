//! OTP delivery seam.
//!
//! Provider SDKs (SMS gateways, push) are out of scope, so delivery is a
//! trait boundary. The default implementation writes the passcode to the
//! log, which is also how local development reads it.

use hotplate_core::{Otp, Phone};

/// Something that can deliver a one-time passcode to a phone number.
pub trait SmsSender: Send + Sync {
    /// Deliver `otp` to `phone`. Delivery is fire-and-forget; failures are
    /// the implementation's problem to surface (log, metric), not the
    /// request's.
    fn send_otp(&self, phone: &Phone, otp: Otp);
}

/// Log-backed sender used in development and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSmsSender;

impl SmsSender for LogSmsSender {
    fn send_otp(&self, phone: &Phone, otp: Otp) {
        tracing::info!(
            phone = %phone,
            code = otp.code,
            expires_at = %otp.expires_at,
            "OTP issued"
        );
    }
}
