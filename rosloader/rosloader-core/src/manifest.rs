//! JSON manifest describing which types a [`TypeRegistry`] provides.
//!
//! ```json
//! {
//!   "modules": {
//!     "std_msgs.msg": {
//!       "messages": ["Header", { "name": "String", "fields": { "data": "" } }]
//!     },
//!     "std_srvs.srv": {
//!       "services": [{ "name": "SetBool", "request": { "data": false } }]
//!     }
//!   }
//! }
//! ```
//!
//! A type may be written as a bare name or as an object carrying default
//! field values. Declared types become [`JsonType`]s.

use std::{collections::BTreeMap, fs, path::Path, str::FromStr, sync::Arc};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::ManifestError,
    registry::TypeRegistry,
    type_support::{JsonType, ServiceType},
};

/// Top-level manifest document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Module path (e.g. `std_msgs.msg`) → declared types.
    #[serde(default)]
    pub modules: BTreeMap<String, ManifestModule>,
}

/// Types declared in one module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestModule {
    #[serde(default)]
    pub messages: Vec<ManifestType>,
    #[serde(default)]
    pub services: Vec<ManifestService>,
}

/// A declared message type.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawType")]
pub struct ManifestType {
    pub name: String,
    pub fields: Map<String, Value>,
}

/// A declared service type with request and response defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawService")]
pub struct ManifestService {
    pub name: String,
    pub request: Map<String, Value>,
    pub response: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawType {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        fields: Map<String, Value>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawService {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        request: Map<String, Value>,
        #[serde(default)]
        response: Map<String, Value>,
    },
}

impl From<RawType> for ManifestType {
    fn from(raw: RawType) -> Self {
        match raw {
            RawType::Name(name) => Self {
                name,
                fields: Map::new(),
            },
            RawType::Full { name, fields } => Self { name, fields },
        }
    }
}

impl From<RawService> for ManifestService {
    fn from(raw: RawService) -> Self {
        match raw {
            RawService::Name(name) => Self {
                name,
                request: Map::new(),
                response: Map::new(),
            },
            RawService::Full {
                name,
                request,
                response,
            } => Self {
                name,
                request,
                response,
            },
        }
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        text.parse()
    }

    /// Build a registry holding every declared type.
    pub fn into_registry(self) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        for (module, decl) in self.modules {
            for msg in decl.messages {
                let qualified = format!("{module}.{}", msg.name);
                registry.register(&module, &msg.name, Arc::new(JsonType::new(qualified, msg.fields)));
            }
            for srv in decl.services {
                let qualified = format!("{module}.{}", srv.name);
                let request = JsonType::new(format!("{qualified}_Request"), srv.request);
                let response = JsonType::new(format!("{qualified}_Response"), srv.response);
                let service = ServiceType::new(qualified, Arc::new(request), Arc::new(response));
                registry.register(&module, &srv.name, Arc::new(service));
            }
        }
        registry
    }
}

impl TypeRegistry {
    pub fn from_manifest(manifest: Manifest) -> Self {
        manifest.into_registry()
    }
}
