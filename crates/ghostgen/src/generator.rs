//! Interception method generation.
//!
//! Composes the outputs of classification (`classify`) and override
//! resolution (`overrides`) into complete [`MethodDescriptor`]s, one per
//! interception kind. Composition order is fixed for every kind:
//!
//! 1. the lazy-initialization guard, always first;
//! 2. the public-property membership branch, only when the class has public
//!    properties — public visibility takes precedence over any user hook, so
//!    this branch is tried before the fallback;
//! 3. the fallback: a `parent::` delegation when the class genuinely
//!    overrides the method, the kind's default otherwise.
//!
//! Generation is a pure function of its inputs. No component retains state
//! across calls, so descriptors for different kinds or different classes can
//! be generated in parallel.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::body::Stmt;
use crate::classify::{classify, PublicPropertiesMap};
use crate::error::GenError;
use crate::metadata::{ClassMetadata, InitializerDescriptor, MethodKind};
use crate::overrides::resolve_override;
use crate::render::render_body;

/// One formal parameter of a generated method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: String,
}

impl Parameter {
    /// Parameter name, without sigil.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A generated interception method, ready for the external assembler.
///
/// The descriptor owns its statement sequence; [`render_body`] flattens it to
/// the final source text. Name and parameter list are fixed by the kind and
/// never vary with target-class metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDescriptor {
    kind: MethodKind,
    name: &'static str,
    parameters: Vec<Parameter>,
    body: Vec<Stmt>,
}

impl MethodDescriptor {
    /// The interception kind this method implements.
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Generated method name (`__get`, `__set`, `__isset`, or `__unset`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ordered formal parameter list.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The body as a structured statement sequence.
    pub fn statements(&self) -> &[Stmt] {
        &self.body
    }

    /// Render the body to source text.
    pub fn render_body(&self) -> String {
        render_body(&self.body)
    }
}

/// Emit the lazy-initialization guard for one interception kind.
///
/// The guard reads the initializer holder, short-circuits when it is falsy
/// (instance already initialized), and otherwise routes the intercepted
/// access through the invoker with the operation name and the accessed
/// property name (plus the value, for writes). It is evaluated once per call
/// of the generated method and must be its first statement.
pub fn emit_guard(initializer: &InitializerDescriptor, kind: MethodKind) -> Stmt {
    Stmt::Guard {
        holder: initializer.holder().to_owned(),
        invoker: initializer.invoker().to_owned(),
        kind,
    }
}

/// Generate the interception method of one kind for a target class.
///
/// `public_map` is the classification result for the same class; computing
/// it once and sharing it across the four kinds is the expected calling
/// pattern (see [`generate_all`]).
pub fn generate(
    kind: MethodKind,
    class: &ClassMetadata,
    initializer: &InitializerDescriptor,
    public_map: &PublicPropertiesMap,
) -> Result<MethodDescriptor, GenError> {
    let disposition = resolve_override(class, kind)?;

    let mut body = Vec::with_capacity(3);
    body.push(emit_guard(initializer, kind));

    if !public_map.is_empty() {
        body.push(Stmt::PublicBranch {
            map_symbol: public_map.symbol().to_owned(),
            kind,
        });
    }

    body.push(if disposition.delegates() {
        Stmt::DelegateParent { kind }
    } else {
        Stmt::DefaultFallback { kind }
    });

    Ok(MethodDescriptor {
        kind,
        name: kind.method_name(),
        parameters: kind
            .parameter_names()
            .iter()
            .map(|name| Parameter {
                name: (*name).to_owned(),
            })
            .collect(),
        body,
    })
}

/// Generate all four interception methods for a target class.
///
/// Classifies the class's public properties once, then drives the per-kind
/// generator through the dispatch table [`MethodKind::ALL`]. The first
/// failure aborts the whole class: a proxy with only some of its
/// interception methods would be incoherent.
pub fn generate_all(
    class: &ClassMetadata,
    initializer: &InitializerDescriptor,
) -> Result<FxHashMap<MethodKind, MethodDescriptor>, GenError> {
    let public_map = classify(class, initializer)?;

    let mut methods = FxHashMap::default();
    for kind in MethodKind::ALL {
        methods.insert(kind, generate(kind, class, initializer, &public_map)?);
    }
    Ok(methods)
}
