//! Type-string grammar: `package[/sub...]/Class`.
//!
//! Accepted shapes after empty segments are dropped:
//!
//! | Segments | Example                                | Subpath inferred |
//! |----------|----------------------------------------|------------------|
//! | 2        | `std_msgs/String`                      | kind default     |
//! | 3        | `std_msgs/msg/String`                  | `msg`            |
//! | 4        | `pkg/action/_fibonacci/Fibonacci_SendGoal` | `action._fibonacci` |
//!
//! The 4-segment form is only valid when the second segment is `action`.

use std::fmt;

use crate::{action::hidden_action_subpath, error::LoaderError};

/// Whether a type string names a message or a service.
///
/// Chosen by the caller's entry point, never inferred from the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Message,
    Service,
}

impl TypeKind {
    /// Subpath used for two-segment identifiers and for the fallback retry.
    pub fn default_subpath(self) -> &'static str {
        match self {
            TypeKind::Message => "msg",
            TypeKind::Service => "srv",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Message => f.write_str("message"),
            TypeKind::Service => f.write_str("service"),
        }
    }
}

/// Split on `/` and drop empty segments.
pub fn split_segments(type_string: &str) -> Vec<&str> {
    type_string.split('/').filter(|s| !s.is_empty()).collect()
}

/// A type string that has passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeString<'a> {
    package: &'a str,
    middle: Vec<&'a str>,
    class_name: &'a str,
}

impl<'a> TypeString<'a> {
    pub fn parse(type_string: &'a str) -> Result<Self, LoaderError> {
        let parts = split_segments(type_string);
        let valid = match parts.len() {
            2 | 3 => true,
            4 => parts[1] == "action",
            _ => false,
        };
        if !valid {
            return Err(LoaderError::InvalidTypeString {
                type_string: type_string.to_string(),
            });
        }

        let last = parts.len() - 1;
        Ok(Self {
            package: parts[0],
            middle: parts[1..last].to_vec(),
            class_name: parts[last],
        })
    }

    pub fn package(&self) -> &'a str {
        self.package
    }

    pub fn class_name(&self) -> &'a str {
        self.class_name
    }

    /// Segments strictly between the package and the class name.
    pub fn middle(&self) -> &[&'a str] {
        &self.middle
    }

    /// True when the second segment is `action`.
    pub fn is_action(&self) -> bool {
        self.middle.first() == Some(&"action")
    }

    /// Canonical `package/Class` form shared by every spelling of a type.
    pub fn normalized(&self) -> String {
        format!("{}/{}", self.package, self.class_name)
    }

    /// Subpath to try first.
    ///
    /// Two-segment strings use the kind's default; longer strings join the
    /// middle segments with `.`. Service strings under `action` are redirected
    /// to the hidden submodule of the action.
    pub fn inferred_subpath(&self, kind: TypeKind) -> Result<String, LoaderError> {
        if self.middle.is_empty() {
            return Ok(kind.default_subpath().to_string());
        }
        let joined = self.middle.join(".");
        if kind == TypeKind::Service && self.is_action() {
            return hidden_action_subpath(&joined, self.class_name);
        }
        Ok(joined)
    }

    pub fn with_subpath(&self, subpath: &str) -> ParsedPath {
        ParsedPath {
            package: self.package.to_string(),
            subpath: subpath.to_string(),
            class_name: self.class_name.to_string(),
        }
    }
}

/// Where the provider should look: module `package.subpath`, symbol `class_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedPath {
    pub package: String,
    pub subpath: String,
    pub class_name: String,
}

impl ParsedPath {
    pub fn module_path(&self) -> String {
        format!("{}.{}", self.package, self.subpath)
    }

    pub fn normalized(&self) -> String {
        format!("{}/{}", self.package, self.class_name)
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.package, self.subpath, self.class_name)
    }
}
