//! Six digit verification codes.

use constant_time_eq::constant_time_eq;
use rand::Rng;

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

/// Generate a random code in `100000..=999999`
pub fn generate_verification_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Compare a submitted code against the stored one
pub fn codes_match(stored: &str, submitted: &str) -> bool {
    constant_time_eq(stored.as_bytes(), submitted.trim().as_bytes())
}
