//! Validation and check-digit computation for Brazilian alphanumeric CNPJ
//! identifiers.
//!
//! ```
//! use cnpj_alfanumerico::{compute_check_digits, is_valid};
//!
//! assert_eq!(compute_check_digits("12.ABC.345/01DE").unwrap(), "35");
//! assert!(is_valid("12.ABC.345/01DE-35"));
//! assert!(!is_valid("12abc34501de35"));
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use domain::check_digits::{compute_check_digits, is_valid, strip_formatting};
pub use domain::cnpj::Cnpj;
pub use error::{CnpjError, ParseCnpjError};
