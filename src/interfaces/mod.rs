//! Output surfaces for check results.

pub mod report;
