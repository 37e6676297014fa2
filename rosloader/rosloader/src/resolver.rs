//! Resolution pipeline: cache → parse → normalized cache → load → cache.

use std::sync::Arc;

use rosloader_core::{Instance, ModuleProvider, TypeHandle};
use tracing::{debug, trace};

use crate::{
    cache::TypeCache,
    error::LoaderError,
    symbol_loader::SymbolLoader,
    type_string::{TypeKind, TypeString},
};

/// Resolves message and service type strings and memoizes the results.
///
/// Create one per process and share it by reference or `Arc`. Messages and
/// services are cached separately.
pub struct Resolver {
    loader: SymbolLoader,
    messages: TypeCache,
    services: TypeCache,
}

impl Resolver {
    pub fn new(provider: Arc<dyn ModuleProvider>) -> Self {
        Self {
            loader: SymbolLoader::new(provider),
            messages: TypeCache::new(),
            services: TypeCache::new(),
        }
    }

    /// Resolve a message type, e.g. `std_msgs/msg/String` or `std_msgs/String`.
    pub fn get_message_class(&self, type_string: &str) -> Result<TypeHandle, LoaderError> {
        self.resolve(TypeKind::Message, type_string)
    }

    /// Resolve a service type, e.g. `std_srvs/srv/SetBool` or
    /// `pkg/action/Fibonacci_SendGoal`.
    pub fn get_service_class(&self, type_string: &str) -> Result<TypeHandle, LoaderError> {
        self.resolve(TypeKind::Service, type_string)
    }

    /// Resolve a message type and construct a default instance of it.
    pub fn get_message_instance(&self, type_string: &str) -> Result<Instance, LoaderError> {
        Ok(self.get_message_class(type_string)?.instantiate())
    }

    /// Resolve a service type and construct a default request.
    pub fn get_service_request_instance(
        &self,
        type_string: &str,
    ) -> Result<Instance, LoaderError> {
        let service = self.get_service_class(type_string)?;
        let request = service
            .request_type()
            .ok_or_else(|| LoaderError::MissingServiceMember {
                type_string: type_string.to_string(),
                member: "request",
            })?;
        Ok(request.instantiate())
    }

    /// Resolve a service type and construct a default response.
    pub fn get_service_response_instance(
        &self,
        type_string: &str,
    ) -> Result<Instance, LoaderError> {
        let service = self.get_service_class(type_string)?;
        let response = service
            .response_type()
            .ok_or_else(|| LoaderError::MissingServiceMember {
                type_string: type_string.to_string(),
                member: "response",
            })?;
        Ok(response.instantiate())
    }

    pub fn message_cache(&self) -> &TypeCache {
        &self.messages
    }

    pub fn service_cache(&self) -> &TypeCache {
        &self.services
    }

    fn cache(&self, kind: TypeKind) -> &TypeCache {
        match kind {
            TypeKind::Message => &self.messages,
            TypeKind::Service => &self.services,
        }
    }

    /// Resolve `type_string` in the cache for `kind`.
    ///
    /// A module or class lookup failure under the inferred subpath is retried
    /// once with the kind's default subpath, which covers ROS 1 style names
    /// that omit it. The retry's error is the one returned.
    pub fn resolve(&self, kind: TypeKind, type_string: &str) -> Result<TypeHandle, LoaderError> {
        let cache = self.cache(kind);
        if let Some(handle) = cache.get(type_string) {
            trace!(%kind, type_string, "cache hit");
            return Ok(handle);
        }

        let parsed = TypeString::parse(type_string)?;
        let subpath = parsed.inferred_subpath(kind)?;

        match self.load_and_cache(cache, type_string, &parsed, &subpath) {
            Err(err) if err.is_lookup_failure() => {
                let fallback = kind.default_subpath();
                debug!(
                    %kind,
                    type_string,
                    %subpath,
                    fallback,
                    error = %err,
                    "retrying with default subpath"
                );
                if let Some(handle) = cache.get(type_string) {
                    return Ok(handle);
                }
                self.load_and_cache(cache, type_string, &parsed, fallback)
            }
            result => result,
        }
    }

    fn load_and_cache(
        &self,
        cache: &TypeCache,
        type_string: &str,
        parsed: &TypeString<'_>,
        subpath: &str,
    ) -> Result<TypeHandle, LoaderError> {
        let normalized = parsed.normalized();
        if let Some(handle) = cache.get(&normalized) {
            trace!(type_string, %normalized, "normalized cache hit");
            cache.insert(type_string, Arc::clone(&handle));
            return Ok(handle);
        }

        let handle = self.loader.load(&parsed.with_subpath(subpath))?;
        cache.insert(type_string, Arc::clone(&handle));
        cache.insert(normalized, Arc::clone(&handle));
        Ok(handle)
    }
}
