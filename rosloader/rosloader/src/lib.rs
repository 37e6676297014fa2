//! Resolve ROS message and service type strings to registered types.
//!
//! # Pipeline
//!
//! ```text
//! "pkg/sub/Class"
//!   └─ TypeString::parse          – shape check, empty segments dropped
//!       └─ inferred_subpath       – "sub", or hidden action submodule
//!           └─ SymbolLoader::load – provider lookup of pkg.sub / Class
//!               └─ TypeCache      – stored under raw and "pkg/Class" keys
//! ```
//!
//! Lookups that fail under the inferred subpath are retried once with the
//! default `msg` / `srv` subpath.

mod action;
mod cache;
mod error;
mod resolver;
mod symbol_loader;
mod type_string;

pub use action::{camel_to_snake, hidden_action_subpath};
pub use cache::TypeCache;
pub use error::LoaderError;
pub use resolver::Resolver;
pub use rosloader_core as core;
pub use symbol_loader::SymbolLoader;
pub use type_string::{ParsedPath, TypeKind, TypeString, split_segments};
