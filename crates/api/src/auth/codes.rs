//! One-time numeric codes for email verification and password reset

use rand::Rng;
use subtle::ConstantTimeEq;
use time::{Duration, OffsetDateTime};

/// Lifetime of a verification or reset code
pub const CODE_TTL: Duration = Duration::minutes(15);

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// Generate a 6-digit code from the thread-local CSPRNG
pub fn generate_code() -> String {
    rand::rng().random_range(CODE_MIN..=CODE_MAX).to_string()
}

/// Expiry for a code issued at `now`
pub fn code_expiry(now: OffsetDateTime) -> OffsetDateTime {
    now + CODE_TTL
}

/// Compare a stored code with the one the client supplied in constant time
pub fn codes_match(expected: &str, supplied: &str) -> bool {
    let supplied = supplied.trim();
    expected.len() == supplied.len() && bool::from(expected.as_bytes().ct_eq(supplied.as_bytes()))
}
