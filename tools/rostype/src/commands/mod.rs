pub mod instance;
pub mod list;
pub mod resolve;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use rosloader::{
    Resolver,
    core::{Manifest, TypeRegistry},
};

fn load_registry(path: &Path) -> Result<TypeRegistry> {
    let manifest = Manifest::from_path(path)?;
    let registry = manifest.into_registry();
    tracing::info!(
        manifest = %path.display(),
        modules = registry.modules().len(),
        "loaded type manifest"
    );
    Ok(registry)
}

fn load_resolver(path: &Path) -> Result<Resolver> {
    let registry = load_registry(path)
        .with_context(|| format!("while loading manifest {}", path.display()))?;
    Ok(Resolver::new(Arc::new(registry)))
}
