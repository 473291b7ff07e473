//! Structured statement AST for generated method bodies.
//!
//! Bodies are composed from these statements first and rendered to text
//! afterwards (`render` module), so the decision logic — which branches a
//! body contains, in what order — is testable without string matching.
//!
//! Every generated body is one of two shapes:
//!
//! ```text
//! Guard, Fallback
//! Guard, PublicBranch, Fallback
//! ```
//!
//! The guard always comes first, the membership branch is present exactly
//! when the class has public properties, and the fallback is either a parent
//! delegation or the kind's default.

use serde::Serialize;

use crate::metadata::MethodKind;

/// One statement of a generated interception method body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// Lazy-initialization guard, always the first statement:
    /// `$this-><holder> && $this-><invoker>('<kind>', array(...));`
    ///
    /// Short-circuits when the holder is falsy (already initialized), so the
    /// initializer runs at most once per instance. The expression's value is
    /// discarded.
    Guard {
        /// Property holding the initializer callable
        holder: String,
        /// Method invoking the initializer
        invoker: String,
        /// Interception kind, passed to the invoker as the operation name
        kind: MethodKind,
    },

    /// Direct-access branch for publicly visible properties:
    /// `if (isset(self::$<map_symbol>[$name])) { ... }`
    ///
    /// The branch body is fixed per kind (plain read, assignment, isset
    /// check, unset). Emitted only when the public-property map is non-empty.
    PublicBranch {
        /// Runtime symbol of the public-property map
        map_symbol: String,
        /// Interception kind selecting the branch body
        kind: MethodKind,
    },

    /// Delegating fallback preserving a genuine user override:
    /// `return parent::<method>(<args>);` with the kind's full arity.
    DelegateParent {
        /// Interception kind selecting method name and argument list
        kind: MethodKind,
    },

    /// Non-delegating fallback for classes without a genuine override.
    DefaultFallback {
        /// Interception kind selecting the default expression
        kind: MethodKind,
    },
}

impl Stmt {
    /// Whether this statement is the lazy-initialization guard.
    pub fn is_guard(&self) -> bool {
        matches!(self, Stmt::Guard { .. })
    }

    /// Whether this statement delegates to a parent implementation.
    pub fn is_delegation(&self) -> bool {
        matches!(self, Stmt::DelegateParent { .. })
    }
}
