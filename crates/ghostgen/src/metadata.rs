//! Target-class metadata consumed by the generators.
//!
//! The core never reflects or parses source itself. An external collaborator
//! (a reflection substrate or parser front end) builds [`ClassMetadata`] ahead
//! of time and hands it over read-only; every type here is immutable once
//! constructed and carries serde derives so the collaborator can ship it as
//! JSON.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The four property-interception kinds a lazy ghost proxy generates.
///
/// Each kind has a fixed method name and a fixed parameter list; neither ever
/// varies with target-class metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    /// Property read (`__get`)
    Get,
    /// Property write (`__set`)
    Set,
    /// Property existence check (`__isset`)
    Isset,
    /// Property removal (`__unset`)
    Unset,
}

impl MethodKind {
    /// All four kinds, in generation order.
    pub const ALL: [MethodKind; 4] = [
        MethodKind::Get,
        MethodKind::Set,
        MethodKind::Isset,
        MethodKind::Unset,
    ];

    /// Fixed interception method name for this kind.
    pub fn method_name(self) -> &'static str {
        match self {
            MethodKind::Get => "__get",
            MethodKind::Set => "__set",
            MethodKind::Isset => "__isset",
            MethodKind::Unset => "__unset",
        }
    }

    /// Fixed parameter names, in order. Only the write kind takes a value.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            MethodKind::Set => &["name", "value"],
            _ => &["name"],
        }
    }

    /// Number of parameters for this kind.
    pub fn arity(self) -> usize {
        self.parameter_names().len()
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Visibility of a declared property on the target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Readable and writable from any scope
    Public,
    /// Visible to the class and its descendants
    Protected,
    /// Visible to the declaring class only
    Private,
}

/// One property declaration from the target class's flattened inheritance
/// chain.
///
/// The provider lists declarations base-first; a more-derived redeclaration
/// of the same name shadows the earlier one during classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    /// Property name, without any sigil
    pub name: String,
    /// Declared visibility
    pub visibility: Visibility,
    /// Static properties never participate in instance interception
    pub is_static: bool,
}

impl PropertyMetadata {
    /// Create a non-static property declaration.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_static: false,
        }
    }

    /// Mark the property as static.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Body of an interception method the target class already declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MethodBody {
    /// Body source text, as extracted by the metadata provider
    Source(String),
    /// Declaration exists but its body is unavailable (native, stubbed, or
    /// otherwise opaque to the provider)
    Opaque,
}

/// Immutable description of the target class.
///
/// Owned by the caller and borrowed read-only by every core component, so
/// generation calls for different kinds (or different classes) can run in
/// parallel without coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetadata {
    name: String,
    properties: Vec<PropertyMetadata>,
    interceptors: FxHashMap<MethodKind, MethodBody>,
}

impl ClassMetadata {
    /// Create metadata for a class with no properties and no declared
    /// interception methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            interceptors: FxHashMap::default(),
        }
    }

    /// Append a property declaration (builder style).
    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    /// Record that the class ancestry declares an interception method of the
    /// given kind (builder style).
    pub fn with_interceptor(mut self, kind: MethodKind, body: MethodBody) -> Self {
        self.interceptors.insert(kind, body);
        self
    }

    /// Fully qualified class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared properties, base-first.
    pub fn properties(&self) -> &[PropertyMetadata] {
        &self.properties
    }

    /// The declared interception method of the given kind, if any exists
    /// anywhere in the ancestry.
    pub fn declared_interceptor(&self, kind: MethodKind) -> Option<&MethodBody> {
        self.interceptors.get(&kind)
    }
}

/// Names of the proxy's lazy-initializer plumbing, resolved by an external
/// collaborator.
///
/// `holder` is the property storing the initializer callable; `invoker` is
/// the method that calls it. The guard emitted at the top of every generated
/// body reads the holder and, while it is still set, routes the intercepted
/// access through the invoker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializerDescriptor {
    holder: String,
    invoker: String,
}

impl InitializerDescriptor {
    /// Pair a holder property name with its invocation method name.
    pub fn new(holder: impl Into<String>, invoker: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
            invoker: invoker.into(),
        }
    }

    /// Property holding the initializer callable.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Method used to invoke the initializer.
    pub fn invoker(&self) -> &str {
        &self.invoker
    }
}
