//! Lazy-ghost proxy method-body synthesizer.
//!
//! Given metadata describing a target class, this crate deterministically
//! generates the source bodies of the four property-interception methods a
//! lazy ghost proxy declares:
//! - **`__get`**: property read
//! - **`__set`**: property write
//! - **`__isset`**: property existence check
//! - **`__unset`**: property removal
//!
//! Each generated body triggers the proxy's lazy initializer exactly once
//! before any property access, reads and writes publicly visible properties
//! directly, and preserves the target class's own interception methods by
//! delegating to them.
//!
//! The crate is the decision-logic core only: it consumes pre-resolved
//! metadata (`metadata` module), classifies public properties (`classify`),
//! resolves user-defined overrides (`overrides`), and composes statement
//! sequences (`body`) that render to source text (`render`). Reflection,
//! source parsing, autoloading, and writing the assembled proxy class to disk
//! belong to external collaborators.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghostgen::metadata::{ClassMetadata, InitializerDescriptor, MethodKind};
//! use ghostgen::generator;
//!
//! let class = ClassMetadata::new("App\\Entity\\User");
//! let init = InitializerDescriptor::new("initializer7d8a", "callInitializer");
//!
//! let methods = generator::generate_all(&class, &init)?;
//! let write = &methods[&MethodKind::Set];
//! assert_eq!(write.name(), "__set");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod body;
pub mod classify;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod overrides;
pub mod render;

pub use classify::PublicPropertiesMap;
pub use error::GenError;
pub use generator::{generate, generate_all, MethodDescriptor, Parameter};
pub use metadata::{ClassMetadata, InitializerDescriptor, MethodKind};
pub use overrides::OverrideDisposition;
