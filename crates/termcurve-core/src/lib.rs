//! # Termcurve Core
//!
//! Core types for the termcurve yield curve snapshot tool.
//!
//! This crate provides the foundational building blocks used throughout
//! termcurve:
//!
//! - **`Date`**: calendar date newtype with the parsing and arithmetic the
//!   snapshot pipeline needs (ISO and `MM/DD/YYYY` input, day offsets for
//!   fetch windows)
//! - **`Maturity`**: integer years-to-maturity derived from a "<N>-year"
//!   series label, used as the interpolation axis
//! - **Errors**: the shared [`TermCurveError`] type
//!
//! ## Example
//!
//! ```rust
//! use termcurve_core::types::{Date, Maturity};
//!
//! let date = Date::parse_mdy("01/02/2024").unwrap();
//! assert_eq!(date.to_string(), "2024-01-02");
//!
//! let maturity = Maturity::parse_label("10-year").unwrap();
//! assert_eq!(maturity.years(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{TermCurveError, TermCurveResult};
pub use types::{Date, Maturity};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{TermCurveError, TermCurveResult};
    pub use crate::types::{Date, Maturity};
}
