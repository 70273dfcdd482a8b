//! Application layer orchestrating the check-digit engine for callers.
//!
//! This module defines the `CheckEngine`, which applies the caller-side case
//! policy and turns each input into a report record.

pub mod engine;
