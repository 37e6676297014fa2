//! Provider contracts and the in-process type registry for `rosloader`.
//!
//! This crate knows nothing about type strings or caching. It defines what a
//! resolvable type looks like ([`TypeSupport`]), how types are grouped into
//! dotted-path modules ([`TypeModule`]), and how a module is found
//! ([`ModuleProvider`]). [`TypeRegistry`] is the provider used when types are
//! registered ahead of time, either in code or from a JSON [`Manifest`].

mod error;
mod manifest;
mod provider;
mod registry;
mod type_support;

pub use error::{ManifestError, ProviderError};
pub use manifest::{Manifest, ManifestModule, ManifestService, ManifestType};
pub use provider::{ModuleProvider, TypeModule};
pub use registry::{RegisteredModule, TypeRegistry, TypeRegistryBuilder};
pub use type_support::{
    Instance, JsonType, MessageType, ServicePair, ServiceType, TypeHandle, TypeSupport,
};
