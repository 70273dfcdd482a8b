use serde::Serialize;

/// Outcome of validating one command-line argument.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ValidationRecord {
    /// 1-based position of the argument.
    pub position: usize,
    /// The argument after case normalization.
    pub input: String,
    pub valid: bool,
}

/// Outcome of computing check digits for one base.
///
/// Exactly one of `check_digits` or `error` is set.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CheckDigitRecord {
    pub position: usize,
    pub input: String,
    pub check_digits: Option<String>,
    /// Completed identifier, unmasked.
    pub cnpj: Option<String>,
    /// Completed identifier with the `XX.XXX.XXX/XXXX-XX` mask.
    pub formatted: Option<String>,
    pub error: Option<String>,
}

impl CheckDigitRecord {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
