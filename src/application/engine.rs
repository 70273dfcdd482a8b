use crate::domain::check_digits::is_valid;
use crate::domain::cnpj::Cnpj;
use crate::domain::record::{CheckDigitRecord, ValidationRecord};
use tracing::debug;

/// How inputs are case-normalized before they reach the check-digit engine.
///
/// The engine itself only accepts uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Uppercase ASCII letters first, so `12abc34501de35` is accepted.
    /// Non-ASCII characters are left as typed and still rejected.
    #[default]
    Upper,
    /// Pass inputs through unchanged; lowercase letters are rejected.
    Strict,
}

/// Runs the check-digit engine over caller-supplied inputs.
///
/// `CheckEngine` holds no state besides its case policy, so a single instance
/// can be reused for any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckEngine {
    case_mode: CaseMode,
}

impl CheckEngine {
    /// Creates a new `CheckEngine` with the given case policy.
    pub fn new(case_mode: CaseMode) -> Self {
        Self { case_mode }
    }

    fn normalize(&self, input: &str) -> String {
        match self.case_mode {
            CaseMode::Upper => input.to_ascii_uppercase(),
            CaseMode::Strict => input.to_string(),
        }
    }

    /// Validates each complete CNPJ, keeping input order.
    pub fn validate_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<ValidationRecord> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let input = self.normalize(raw.as_ref());
                let valid = is_valid(&input);
                debug!(position = i + 1, input = %input, valid, "validated CNPJ");
                ValidationRecord {
                    position: i + 1,
                    input,
                    valid,
                }
            })
            .collect()
    }

    /// Computes check digits for each base, keeping input order.
    ///
    /// Failures are recorded per input and never abort the remaining ones.
    pub fn compute_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<CheckDigitRecord> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, raw)| self.compute_one(i + 1, raw.as_ref()))
            .collect()
    }

    fn compute_one(&self, position: usize, raw: &str) -> CheckDigitRecord {
        let input = self.normalize(raw);
        match Cnpj::from_base(&input) {
            Ok(cnpj) => {
                let check_digits = cnpj.check_digits().to_string();
                debug!(position, input = %input, check_digits = %check_digits, "computed check digits");
                CheckDigitRecord {
                    position,
                    input,
                    check_digits: Some(check_digits),
                    formatted: Some(cnpj.formatted()),
                    cnpj: Some(cnpj.into()),
                    error: None,
                }
            }
            Err(e) => {
                debug!(position, input = %input, error = %e, "could not compute check digits");
                CheckDigitRecord {
                    position,
                    input,
                    check_digits: None,
                    cnpj: None,
                    formatted: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CnpjError;

    #[test]
    fn test_validate_all_uppercases_by_default() {
        let engine = CheckEngine::default();
        let results = engine.validate_all(&["12abc34501de35", "12ABC34501DE99"]);

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0],
            ValidationRecord {
                position: 1,
                input: "12ABC34501DE35".to_string(),
                valid: true,
            }
        );
        assert_eq!(results[1].position, 2);
        assert!(!results[1].valid);
    }

    #[test]
    fn test_validate_all_does_not_expand_non_ascii() {
        let engine = CheckEngine::default();
        // 'ß' would become "SS" under full Unicode case mapping
        let results = engine.validate_all(&["12ß34501DEF06", "12ı34501DEF06"]);

        assert_eq!(results[0].input, "12ß34501DEF06");
        assert!(!results[0].valid);
        assert_eq!(results[1].input, "12ı34501DEF06");
        assert!(!results[1].valid);

        let computed = engine.compute_all(&["12ß34501DEF"]);
        assert_eq!(
            computed[0].error.as_deref(),
            Some(CnpjError::InvalidCharacters.to_string().as_str())
        );
    }

    #[test]
    fn test_validate_all_strict_rejects_lowercase() {
        let engine = CheckEngine::new(CaseMode::Strict);
        let results = engine.validate_all(&["12abc34501de35", "12ABC34501DE35"]);

        assert_eq!(results[0].input, "12abc34501de35");
        assert!(!results[0].valid);
        assert!(results[1].valid);
    }

    #[test]
    fn test_compute_all_success() {
        let engine = CheckEngine::default();
        let results = engine.compute_all(&["12.abc.345/01de"]);

        let record = &results[0];
        assert!(record.is_ok());
        assert_eq!(record.input, "12.ABC.345/01DE");
        assert_eq!(record.check_digits.as_deref(), Some("35"));
        assert_eq!(record.cnpj.as_deref(), Some("12ABC34501DE35"));
        assert_eq!(record.formatted.as_deref(), Some("12.ABC.345/01DE-35"));
    }

    #[test]
    fn test_compute_all_records_errors_and_continues() {
        let engine = CheckEngine::default();
        let results = engine.compute_all(&["000000000000", "12 ABC", "112223330001"]);

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].error.as_deref(),
            Some(CnpjError::InvalidBase.to_string().as_str())
        );
        assert_eq!(
            results[1].error.as_deref(),
            Some(CnpjError::InvalidCharacters.to_string().as_str())
        );
        assert!(results[0].check_digits.is_none());
        assert_eq!(results[2].check_digits.as_deref(), Some("81"));
        assert_eq!(results[2].position, 3);
    }

    #[test]
    fn test_compute_all_strict_mode() {
        let engine = CheckEngine::new(CaseMode::Strict);
        let results = engine.compute_all(&["12abc34501de"]);
        assert_eq!(
            results[0].error.as_deref(),
            Some(CnpjError::InvalidCharacters.to_string().as_str())
        );
    }
}
