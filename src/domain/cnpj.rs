use super::check_digits::{
    BASE_LEN, compute_check_digits, has_allowed_characters, has_complete_shape, strip_formatting,
};
use crate::error::{CnpjError, ParseCnpjError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A complete alphanumeric CNPJ whose check digits are known to be correct.
///
/// Stored unmasked, e.g. `12ABC34501DE35`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Parses a complete CNPJ, with or without mask.
    ///
    /// Accepts exactly what [`is_valid`](super::check_digits::is_valid) accepts.
    pub fn parse(s: &str) -> Result<Self, ParseCnpjError> {
        if !has_allowed_characters(s) {
            return Err(ParseCnpjError::InvalidCharacters);
        }

        let stripped = strip_formatting(s);
        if !has_complete_shape(&stripped) {
            return Err(ParseCnpjError::Malformed);
        }

        let (base, found) = stripped.split_at(BASE_LEN);
        let expected = compute_check_digits(base).map_err(|_| ParseCnpjError::Malformed)?;
        if expected != found {
            return Err(ParseCnpjError::CheckDigitMismatch {
                expected,
                found: found.to_string(),
            });
        }

        Ok(Self(stripped))
    }

    /// Completes a 12-character base with its computed check digits.
    pub fn from_base(base: &str) -> Result<Self, CnpjError> {
        let digits = compute_check_digits(base)?;
        let mut cnpj = strip_formatting(base);
        cnpj.push_str(&digits);
        Ok(Self(cnpj))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LEN..]
    }

    /// Renders the canonical mask `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        let s = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &s[0..2],
            &s[2..5],
            &s[5..8],
            &s[8..12],
            &s[12..14]
        )
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = ParseCnpjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = ParseCnpjError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
