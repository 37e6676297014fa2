//! Error types for type-string resolution.

use rosloader_core::ProviderError;

/// Errors produced by [`Resolver`](crate::Resolver).
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The identifier does not match any recognized segment shape.
    #[error("{type_string} is not a valid type string")]
    InvalidTypeString { type_string: String },

    /// The module `package.subpath` could not be resolved by the provider.
    #[error("unable to import {package}.{subpath} from package {package}: {source}")]
    InvalidModule {
        package: String,
        subpath: String,
        #[source]
        source: ProviderError,
    },

    /// The module was resolved but has no symbol named `class_name`.
    #[error("unable to import {subpath} class {class_name} from package {package}: {source}")]
    InvalidClass {
        package: String,
        subpath: String,
        class_name: String,
        #[source]
        source: ProviderError,
    },

    /// An `action` service identifier whose class lacks a generated suffix.
    #[error(
        "{class_name} will not be converted to a hidden submodule since it doesn't end with \"_SendGoal\" or \"_GetResult\""
    )]
    InvalidActionInterface { class_name: String },

    /// A resolved service type exposes no request or response member.
    #[error("service type '{type_string}' has no {member} type")]
    MissingServiceMember {
        type_string: String,
        member: &'static str,
    },
}

impl LoaderError {
    /// True for the failures that trigger the default-subpath retry.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::InvalidModule { .. } | Self::InvalidClass { .. })
    }
}
