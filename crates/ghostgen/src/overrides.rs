//! Override resolution for declared interception methods.
//!
//! A target class may already declare `__get`/`__set`/`__isset`/`__unset`.
//! Two cases must be told apart:
//! - the declaration is the runtime's trivial default (or an empty no-op) —
//!   delegating to it would be indistinguishable from returning nothing, so
//!   it collapses into the same fallback as "never declared";
//! - the declaration is a genuine user override — the generated fallback must
//!   delegate to it (`parent::...`) instead of returning a default value.
//!
//! The distinction is made by comparing the declaration's body text, after
//! whitespace normalization, against the known per-kind default template.
//! Presence alone is never enough.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::GenError;
use crate::metadata::{ClassMetadata, MethodBody, MethodKind};

/// Outcome of resolving a declared interception method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverrideDisposition {
    /// The class and its ancestry never declare the method
    Absent,
    /// A declaration exists but is the trivial default; treated as absent for
    /// delegation purposes
    DefaultOnly,
    /// A user-supplied override that must be preserved via delegation
    Genuine,
}

impl OverrideDisposition {
    /// Whether the generated fallback must delegate to the parent
    /// implementation.
    pub fn delegates(self) -> bool {
        matches!(self, OverrideDisposition::Genuine)
    }
}

/// The no-op bodies the base runtime supplies when a class leaves the
/// interception methods undeclared, pre-normalized for comparison.
static DEFAULT_BODIES: LazyLock<FxHashMap<MethodKind, String>> = LazyLock::new(|| {
    let mut bodies = FxHashMap::default();
    bodies.insert(MethodKind::Get, normalize("return null;"));
    bodies.insert(MethodKind::Set, normalize("return ($this->$name = $value);"));
    bodies.insert(MethodKind::Isset, normalize("return false;"));
    bodies.insert(MethodKind::Unset, normalize("return;"));
    bodies
});

/// Collapse whitespace runs so that formatting differences between the
/// provider's extraction and the default template never affect
/// classification.
fn normalize(body: &str) -> String {
    body.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve whether a target class genuinely overrides the interception
/// method of the given kind.
///
/// A declaration whose body is unavailable cannot be classified either way;
/// guessing would either suppress a user override or emit a self-recursive
/// guard, so it is a hard [`GenError::UnsupportedOverrideShape`].
pub fn resolve_override(
    class: &ClassMetadata,
    kind: MethodKind,
) -> Result<OverrideDisposition, GenError> {
    match class.declared_interceptor(kind) {
        None => Ok(OverrideDisposition::Absent),
        Some(MethodBody::Opaque) => Err(GenError::UnsupportedOverrideShape {
            class: class.name().to_owned(),
            kind,
        }),
        Some(MethodBody::Source(source)) => {
            let normalized = normalize(source);
            if normalized.is_empty() || normalized == DEFAULT_BODIES[&kind] {
                Ok(OverrideDisposition::DefaultOnly)
            } else {
                Ok(OverrideDisposition::Genuine)
            }
        }
    }
}
