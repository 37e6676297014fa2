//! Type handles: what a resolved type string points at.

use std::{any::Any, fmt, marker::PhantomData, sync::Arc};

use serde_json::{Map, Value};

/// A freshly constructed, default-initialized instance of a resolved type.
///
/// Callers downcast to the concrete type they registered.
pub type Instance = Box<dyn Any + Send>;

/// Shared reference to a provider-owned type description.
pub type TypeHandle = Arc<dyn TypeSupport>;

/// An instantiable message or service type.
pub trait TypeSupport: Send + Sync + fmt::Debug {
    /// Fully qualified dotted name, e.g. `std_msgs.msg.String`.
    fn qualified_name(&self) -> &str;

    /// Zero-argument constructor.
    fn instantiate(&self) -> Instance;

    /// The paired request type. `None` for message types.
    fn request_type(&self) -> Option<TypeHandle> {
        None
    }

    /// The paired response type. `None` for message types.
    fn response_type(&self) -> Option<TypeHandle> {
        None
    }
}

/// Message type backed by a Rust type's [`Default`] implementation.
pub struct MessageType<T> {
    qualified_name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Default + Any + Send> MessageType<T> {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            _marker: PhantomData,
        }
    }

    /// Convenience for `Arc::new(MessageType::<T>::new(name))`.
    pub fn handle(qualified_name: impl Into<String>) -> TypeHandle {
        Arc::new(Self::new(qualified_name))
    }
}

impl<T> fmt::Debug for MessageType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageType")
            .field("qualified_name", &self.qualified_name)
            .field("rust_type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Default + Any + Send> TypeSupport for MessageType<T> {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn instantiate(&self) -> Instance {
        Box::new(T::default())
    }
}

/// Request and response instances produced by instantiating a service type.
#[derive(Debug)]
pub struct ServicePair {
    pub request: Instance,
    pub response: Instance,
}

/// Service type: a named pair of request and response types.
#[derive(Debug, Clone)]
pub struct ServiceType {
    qualified_name: String,
    request: TypeHandle,
    response: TypeHandle,
}

impl ServiceType {
    pub fn new(qualified_name: impl Into<String>, request: TypeHandle, response: TypeHandle) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            request,
            response,
        }
    }

    /// Build a service whose request and response are [`MessageType`]s named
    /// `<name>_Request` and `<name>_Response`.
    pub fn from_types<Req, Resp>(qualified_name: impl Into<String>) -> Self
    where
        Req: Default + Any + Send,
        Resp: Default + Any + Send,
    {
        let qualified_name = qualified_name.into();
        let request = MessageType::<Req>::handle(format!("{qualified_name}_Request"));
        let response = MessageType::<Resp>::handle(format!("{qualified_name}_Response"));
        Self::new(qualified_name, request, response)
    }
}

impl TypeSupport for ServiceType {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn instantiate(&self) -> Instance {
        Box::new(ServicePair {
            request: self.request.instantiate(),
            response: self.response.instantiate(),
        })
    }

    fn request_type(&self) -> Option<TypeHandle> {
        Some(Arc::clone(&self.request))
    }

    fn response_type(&self) -> Option<TypeHandle> {
        Some(Arc::clone(&self.response))
    }
}

/// Type declared at runtime (typically from a manifest) with no backing Rust
/// struct. Instances are JSON objects seeded with the declared default fields.
#[derive(Debug, Clone)]
pub struct JsonType {
    qualified_name: String,
    fields: Map<String, Value>,
}

impl JsonType {
    pub fn new(qualified_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            fields,
        }
    }

    /// Declared default fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TypeSupport for JsonType {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn instantiate(&self) -> Instance {
        Box::new(Value::Object(self.fields.clone()))
    }
}
