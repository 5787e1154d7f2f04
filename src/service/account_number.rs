//! Account Number Generation
//!
//! Account numbers are a fixed leading `1` followed by 9 random digits.

use rand::Rng;

/// Leading digit of every account number
pub const ACCOUNT_NUMBER_PREFIX: char = '1';

/// Number of random digits after the prefix
pub const ACCOUNT_NUMBER_RANDOM_DIGITS: usize = 9;

const SUFFIX_UPPER_BOUND: u32 = 1_000_000_000;

/// Draws a candidate account number from `rng`.
///
/// The suffix is uniform over 0..1_000_000_000 and zero-padded to 9 digits.
pub fn generate_account_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix = rng.gen_range(0..SUFFIX_UPPER_BOUND);
    format!(
        "{}{:0width$}",
        ACCOUNT_NUMBER_PREFIX,
        suffix,
        width = ACCOUNT_NUMBER_RANDOM_DIGITS
    )
}

/// Returns true if `value` has the shape of a generated account number.
pub fn is_well_formed(value: &str) -> bool {
    value.len() == ACCOUNT_NUMBER_RANDOM_DIGITS + 1
        && value.starts_with(ACCOUNT_NUMBER_PREFIX)
        && value.chars().all(|c| c.is_ascii_digit())
}
