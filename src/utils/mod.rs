//! Utility functions for input validation.
//!
//! - [`url_validation`] - URL well-formedness checks

pub mod url_validation;
