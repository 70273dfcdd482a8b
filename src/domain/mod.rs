//! Domain layer: the check-digit engine, the `Cnpj` value type and the
//! records produced when checking command-line input.

pub mod check_digits;
pub mod cnpj;
pub mod record;
