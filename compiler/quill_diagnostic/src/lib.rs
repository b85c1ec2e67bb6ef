//! Diagnostic system for structured error reporting.
//!
//! Script compilation never aborts wholesale on a bad expression: each
//! failed construction surfaces one `Diagnostic` to the host compiler and
//! contributes nothing to the compiled script. Diagnostics carry:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Labeled spans (where it went wrong)
//! - Notes (context the message alone can't carry)

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
