use thiserror::Error;

/// Errors reported by the check-digit computation.
///
/// Validation never surfaces these; it collapses every failure to `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CnpjError {
    #[error("CNPJ contains characters outside A-Z, 0-9 and the mask characters . / -")]
    InvalidCharacters,
    #[error("CNPJ base must be 12 characters of A-Z or 0-9 and not all zeros")]
    InvalidBase,
}

/// Reasons a string cannot become a [`Cnpj`](crate::domain::cnpj::Cnpj).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCnpjError {
    #[error("CNPJ contains characters outside A-Z, 0-9 and the mask characters . / -")]
    InvalidCharacters,
    #[error("CNPJ must be 12 alphanumeric characters followed by 2 digits, not all zeros")]
    Malformed,
    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: String, found: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
