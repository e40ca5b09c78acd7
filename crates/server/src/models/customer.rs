//! Customer domain type.

use chrono::{DateTime, Utc};

use hotplate_core::{CustomerId, Email, Otp, Phone};

/// A customer account.
///
/// Created unverified at signup; `verified` flips when the held OTP is
/// confirmed. Profile fields start empty and are filled in by the customer
/// after verification.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Customer's email address (unique).
    pub email: Email,
    /// Phone number OTPs are delivered to.
    pub phone: Phone,
    /// Password hash in PHC string format (salt embedded).
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Delivery address.
    pub address: String,
    /// Whether the account passed OTP verification.
    pub verified: bool,
    /// The currently issued one-time passcode.
    pub otp: Otp,
    /// When the customer signed up.
    pub created_at: DateTime<Utc>,
    /// When the customer was last updated.
    pub updated_at: DateTime<Utc>,
}
