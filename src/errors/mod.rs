//! Error types for the AST layer.
//!
//! This module defines the error values surfaced by this crate. Duplicate
//! declarations and missing names are reported as `bool`/`Option` results,
//! not errors; the external resolver turns those into user-facing
//! diagnostics. Only two conditions produce an error value here:
//!
//! - Assembly lookup of an absent module name
//! - A failed tree-dump write

pub mod errors;
