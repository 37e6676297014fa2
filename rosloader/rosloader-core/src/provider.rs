//! Provider traits: the namespace a type string is resolved against.

use std::sync::Arc;

use crate::{error::ProviderError, type_support::TypeHandle};

/// A dotted-path namespace (e.g. `std_msgs.msg`) exposing named types.
pub trait TypeModule: Send + Sync {
    /// Dotted path this module was resolved from.
    fn path(&self) -> &str;

    /// Look up a type by its class name.
    fn lookup(&self, name: &str) -> Result<TypeHandle, ProviderError>;
}

/// Resolves dotted module paths to [`TypeModule`]s.
///
/// Implementations may be slow (filesystem or generated-table lookups); callers
/// must not hold locks across [`ModuleProvider::resolve_module`].
pub trait ModuleProvider: Send + Sync {
    fn resolve_module(&self, path: &str) -> Result<Arc<dyn TypeModule>, ProviderError>;
}

impl<P: ModuleProvider + ?Sized> ModuleProvider for Arc<P> {
    fn resolve_module(&self, path: &str) -> Result<Arc<dyn TypeModule>, ProviderError> {
        (**self).resolve_module(path)
    }
}
