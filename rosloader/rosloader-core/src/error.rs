//! Error types for providers and manifests.

/// Error returned by [`ModuleProvider`](crate::ModuleProvider) and
/// [`TypeModule`](crate::TypeModule) implementations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No module is registered under the dotted path.
    #[error("no module named '{path}'")]
    ModuleNotFound { path: String },

    /// The module exists but exposes no symbol with the requested name.
    #[error("module '{module}' has no attribute '{name}'")]
    SymbolNotFound { module: String, name: String },

    /// Any other provider-specific failure.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors produced while loading a [`Manifest`](crate::Manifest).
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}
