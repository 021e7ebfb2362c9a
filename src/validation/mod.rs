//! Diagnostics for parse and check passes.
//!
//! The conf format is permissive by design: malformed lines, regions and
//! offsets are dropped rather than aborting a conversion. Everything dropped
//! is recorded here so `spritemap check` can surface it.

mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};
