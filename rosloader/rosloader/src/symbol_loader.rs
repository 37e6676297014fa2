//! Provider lookup with error translation. No caching happens here.

use std::sync::Arc;

use rosloader_core::{ModuleProvider, TypeHandle};
use tracing::debug;

use crate::{error::LoaderError, type_string::ParsedPath};

/// Loads `package.subpath` from a [`ModuleProvider`] and looks up the class.
#[derive(Clone)]
pub struct SymbolLoader {
    provider: Arc<dyn ModuleProvider>,
}

impl SymbolLoader {
    pub fn new(provider: Arc<dyn ModuleProvider>) -> Self {
        Self { provider }
    }

    pub fn load(&self, path: &ParsedPath) -> Result<TypeHandle, LoaderError> {
        let module_path = path.module_path();
        debug!(module = %module_path, class = %path.class_name, "loading type");

        let module = self
            .provider
            .resolve_module(&module_path)
            .map_err(|source| LoaderError::InvalidModule {
                package: path.package.clone(),
                subpath: path.subpath.clone(),
                source,
            })?;

        module
            .lookup(&path.class_name)
            .map_err(|source| LoaderError::InvalidClass {
                package: path.package.clone(),
                subpath: path.subpath.clone(),
                class_name: path.class_name.clone(),
                source,
            })
    }
}
