//! Public-property classification.
//!
//! Publicly visible, non-static properties must bypass the lazy-interception
//! guard entirely: once the instance is initialized they behave as ordinary
//! fields, so the generated methods read and write them directly instead of
//! falling through to default interception or a user override. This module
//! computes that set once per target class; all four generators share the
//! result read-only.

use rustc_hash::FxHashMap;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::GenError;
use crate::metadata::{ClassMetadata, InitializerDescriptor, Visibility};

/// Registry of property names exempt from interception guarding.
///
/// Names are kept sorted so that downstream generation is byte-for-byte
/// deterministic regardless of the order the metadata provider listed the
/// declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicPropertiesMap {
    symbol: String,
    names: Vec<String>,
}

impl PublicPropertiesMap {
    /// Build a map from an explicit symbol and name set. Names are sorted and
    /// deduplicated.
    pub fn new(symbol: impl Into<String>, mut names: Vec<String>) -> Self {
        names.sort();
        names.dedup();
        Self {
            symbol: symbol.into(),
            names,
        }
    }

    /// Whether the target class exposes no public properties. When true the
    /// generators omit the membership branch entirely.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Generated symbol name referencing this set at runtime. The external
    /// assembler emits a static map constant under this name alongside the
    /// generated methods.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Member names in sorted order, for the assembler to emit the map
    /// constant.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Membership test used by tests and by callers that pre-validate
    /// property names.
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }
}

/// Derive the runtime symbol for a class's public-property map.
///
/// The suffix is the first 8 hex characters of the SHA-256 digest of the
/// class name, so identical metadata always yields an identical symbol and
/// two proxies in one generated file cannot collide.
fn map_symbol(class_name: &str) -> String {
    let digest = Sha256::digest(class_name.as_bytes());
    format!("publicProperties{}", &hex::encode(digest)[..8])
}

/// Compute the set of publicly accessible property names for a target class.
///
/// Walks the flattened declaration list base-first, letting more-derived
/// redeclarations shadow earlier ones, then keeps the names whose effective
/// declaration is public and non-static. The initializer holder is proxy
/// bookkeeping: a non-public declaration under that name is silently
/// excluded (it is the bookkeeping field itself, visible to reflection), but
/// a *public* declaration under that name is a hard error — classifying it
/// would make the generated guard re-enter itself.
pub fn classify(
    class: &ClassMetadata,
    initializer: &InitializerDescriptor,
) -> Result<PublicPropertiesMap, GenError> {
    let mut effective: FxHashMap<&str, (Visibility, bool)> = FxHashMap::default();
    for property in class.properties() {
        effective.insert(
            property.name.as_str(),
            (property.visibility, property.is_static),
        );
    }

    let mut names = Vec::new();
    for (name, (visibility, is_static)) in effective {
        if is_static || visibility != Visibility::Public {
            continue;
        }
        if name == initializer.holder() {
            return Err(GenError::MetadataInconsistency {
                class: class.name().to_owned(),
                detail: format!(
                    "property '{name}' is public but collides with the reserved initializer holder"
                ),
            });
        }
        names.push(name.to_owned());
    }

    Ok(PublicPropertiesMap::new(map_symbol(class.name()), names))
}
