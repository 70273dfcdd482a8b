//! Check-digit engine for alphanumeric CNPJ identifiers.
//!
//! Every character contributes `ASCII code - 48` to a weighted sum modulo 11,
//! so digits keep their face value and letters map to 17..=42. Purely numeric
//! identifiers therefore get the same check digits they always had.

use crate::error::CnpjError;
use tracing::{debug, trace};

/// Length of the identifier base, without check digits.
pub const BASE_LEN: usize = 12;

/// Length of a complete identifier, base plus two check digits.
pub const CNPJ_LEN: usize = 14;

/// Weights applied right-aligned against the input: the last character always gets 2.
pub const WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const MASK_CHARS: [char; 3] = ['.', '/', '-'];

/// Removes every `.`, `/` and `-`, keeping all other characters in order.
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| !MASK_CHARS.contains(c)).collect()
}

pub(crate) fn has_allowed_characters(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || MASK_CHARS.contains(&c))
}

fn is_alphanumeric_upper(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

fn is_zero_sentinel(s: &str) -> bool {
    s.bytes().all(|b| b == b'0')
}

/// True when `s` is 12 uppercase alphanumerics and not the all-zero sentinel.
pub(crate) fn is_valid_base(s: &str) -> bool {
    s.len() == BASE_LEN && s.bytes().all(is_alphanumeric_upper) && !is_zero_sentinel(s)
}

/// True when `s` matches `[A-Z0-9]{12}[0-9]{2}` and is not fourteen zeros.
pub(crate) fn has_complete_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == CNPJ_LEN
        && bytes[..BASE_LEN].iter().copied().all(is_alphanumeric_upper)
        && bytes[BASE_LEN..].iter().all(u8::is_ascii_digit)
        && !is_zero_sentinel(s)
}

/// Computes one check digit over 12 or 13 uppercase alphanumeric bytes.
fn weighted_digit(s: &[u8]) -> char {
    debug_assert!(s.len() == BASE_LEN || s.len() == BASE_LEN + 1);
    let offset = WEIGHTS.len() - s.len();
    let sum: u32 = s
        .iter()
        .enumerate()
        .map(|(i, &b)| u32::from(b - b'0') * WEIGHTS[i + offset])
        .sum();

    let remainder = sum % 11;
    let digit = if remainder < 2 { 0 } else { 11 - remainder };
    // digit is always in 0..=9 here
    char::from(b'0' + digit as u8)
}

/// Computes the two check digits for a 12-character base.
///
/// The base may carry mask characters, which are stripped first. Letters must
/// already be uppercase; this function does not case-fold.
///
/// # Errors
///
/// * [`CnpjError::InvalidCharacters`] if any character is outside `A-Z`, `0-9`, `.`, `/`, `-`.
/// * [`CnpjError::InvalidBase`] if the stripped base is not exactly 12 alphanumerics,
///   or is all zeros.
pub fn compute_check_digits(base: &str) -> Result<String, CnpjError> {
    if !has_allowed_characters(base) {
        trace!(input = base, "rejected: characters outside the CNPJ alphabet");
        return Err(CnpjError::InvalidCharacters);
    }

    let stripped = strip_formatting(base);
    if !is_valid_base(&stripped) {
        trace!(base = %stripped, "rejected: not a valid 12-character base");
        return Err(CnpjError::InvalidBase);
    }

    let mut digits = stripped.into_bytes();
    let dv1 = weighted_digit(&digits);
    digits.push(dv1 as u8);
    let dv2 = weighted_digit(&digits);

    let check_digits: String = [dv1, dv2].iter().collect();
    debug!(check_digits = %check_digits, "computed check digits");
    Ok(check_digits)
}

/// Returns `true` if `candidate` is a complete, correctly checked CNPJ.
///
/// Mask characters are ignored. Any failure, including ones
/// [`compute_check_digits`] would report as an error, yields `false`.
pub fn is_valid(candidate: &str) -> bool {
    if !has_allowed_characters(candidate) {
        trace!(input = candidate, "rejected: characters outside the CNPJ alphabet");
        return false;
    }

    let stripped = strip_formatting(candidate);
    if !has_complete_shape(&stripped) {
        trace!(cnpj = %stripped, "rejected: not 12 alphanumerics followed by 2 digits");
        return false;
    }

    let (base, supplied) = stripped.split_at(BASE_LEN);
    match compute_check_digits(base) {
        Ok(expected) => expected == supplied,
        Err(_) => false,
    }
}
