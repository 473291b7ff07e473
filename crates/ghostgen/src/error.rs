//! Error types for proxy method generation.
//!
//! Generation is deterministic and side-effect-free, so no error here is
//! retryable: every failure is fatal for the affected class and carries the
//! class identity (and method kind where relevant) for diagnosis.

use thiserror::Error;

use crate::metadata::MethodKind;

/// Errors that can occur while generating interception method bodies.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenError {
    /// The supplied class metadata is self-contradictory
    #[error("inconsistent metadata for class '{class}': {detail}")]
    MetadataInconsistency {
        /// Fully qualified target class name
        class: String,
        /// What contradicted what
        detail: String,
    },

    /// A declared interception method cannot be confidently classified as the
    /// runtime default or a genuine override. Guessing is not an option:
    /// treating an override as the default would silently drop user
    /// behavior, and treating the default as an override would emit a
    /// delegating guard that recurses forever.
    #[error("cannot classify declared {kind} on class '{class}' as default or genuine override")]
    UnsupportedOverrideShape {
        /// Fully qualified target class name
        class: String,
        /// Interception kind of the unclassifiable declaration
        kind: MethodKind,
    },
}
