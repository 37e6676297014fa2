//! In-process [`ModuleProvider`] populated by explicit registration.
//!
//! A statically linked program cannot import a module by dotted string, so
//! every `(module, class)` binding is registered up front, either in code via
//! [`TypeRegistryBuilder`] or from a [`Manifest`](crate::Manifest).

use std::{any::Any, collections::HashMap, sync::Arc};

use crate::{
    error::ProviderError,
    provider::{ModuleProvider, TypeModule},
    type_support::{MessageType, ServiceType, TypeHandle},
};

/// One dotted-path module and the types registered in it.
#[derive(Debug, Clone)]
pub struct RegisteredModule {
    path: String,
    types: HashMap<String, TypeHandle>,
}

impl RegisteredModule {
    fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            types: HashMap::new(),
        }
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TypeModule for RegisteredModule {
    fn path(&self) -> &str {
        &self.path
    }

    fn lookup(&self, name: &str) -> Result<TypeHandle, ProviderError> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::SymbolNotFound {
                module: self.path.clone(),
                name: name.to_string(),
            })
    }
}

/// Registry of types keyed by module path and class name.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    modules: HashMap<String, Arc<RegisteredModule>>,
}

/// Builder for configuring [`TypeRegistry`].
#[derive(Default)]
pub struct TypeRegistryBuilder {
    entries: Vec<(String, String, TypeHandle)>,
}

impl TypeRegistry {
    /// Create a builder for [`TypeRegistry`].
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` as `class` inside `module`.
    ///
    /// A later registration for the same `(module, class)` replaces the
    /// earlier one.
    pub fn register(&mut self, module: &str, class: &str, handle: TypeHandle) {
        let entry = self
            .modules
            .entry(module.to_string())
            .or_insert_with(|| Arc::new(RegisteredModule::new(module)));
        Arc::make_mut(entry)
            .types
            .insert(class.to_string(), handle);
    }

    /// Registered module paths, sorted.
    pub fn modules(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Class names registered in `module`, or `None` if the module is unknown.
    pub fn classes(&self, module: &str) -> Option<Vec<&str>> {
        self.modules.get(module).map(|m| m.class_names())
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleProvider for TypeRegistry {
    fn resolve_module(&self, path: &str) -> Result<Arc<dyn TypeModule>, ProviderError> {
        let module = self
            .modules
            .get(path)
            .ok_or_else(|| ProviderError::ModuleNotFound {
                path: path.to_string(),
            })?;
        Ok(Arc::clone(module) as Arc<dyn TypeModule>)
    }
}

impl TypeRegistryBuilder {
    /// Register a message type backed by `T::default()`.
    pub fn with_message<T: Default + Any + Send>(self, module: &str, class: &str) -> Self {
        let handle = MessageType::<T>::handle(format!("{module}.{class}"));
        self.with_type(module, class, handle)
    }

    /// Register a service type with `Req`/`Resp` request and response types.
    pub fn with_service<Req, Resp>(self, module: &str, class: &str) -> Self
    where
        Req: Default + Any + Send,
        Resp: Default + Any + Send,
    {
        let service = ServiceType::from_types::<Req, Resp>(format!("{module}.{class}"));
        self.with_type(module, class, Arc::new(service))
    }

    /// Register an arbitrary type handle.
    pub fn with_type(mut self, module: &str, class: &str, handle: TypeHandle) -> Self {
        self.entries
            .push((module.to_string(), class.to_string(), handle));
        self
    }

    /// Build the registry. Entries are applied in registration order.
    pub fn build(self) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        for (module, class, handle) in self.entries {
            registry.register(&module, &class, handle);
        }
        registry
    }
}
