//! Hidden service types generated for action interfaces.
//!
//! An action `pkg/action/NavigateToPose` generates the services
//! `NavigateToPose_SendGoal` and `NavigateToPose_GetResult`, which live in the
//! hidden submodule `pkg.action._navigate_to_pose` rather than in
//! `pkg.action` itself.

use crate::error::LoaderError;

const GENERATED_SUFFIXES: [&str; 2] = ["_SendGoal", "_GetResult"];

/// Extend `subpath` with the hidden submodule for `class_name`.
///
/// A subpath that already names a hidden submodule (exactly one `._`
/// separator) is returned unchanged.
pub fn hidden_action_subpath(subpath: &str, class_name: &str) -> Result<String, LoaderError> {
    if subpath.split("._").count() == 2 {
        return Ok(subpath.to_string());
    }

    let action_name = GENERATED_SUFFIXES
        .iter()
        .find_map(|suffix| class_name.strip_suffix(suffix))
        .ok_or_else(|| LoaderError::InvalidActionInterface {
            class_name: class_name.to_string(),
        })?;

    Ok(format!("{subpath}._{}", camel_to_snake(action_name)))
}

/// Convert a CamelCase name to snake_case the way the ROS 2 interface
/// generators name their modules.
///
/// An underscore goes before an uppercase letter that follows a lowercase
/// letter or digit, and before an uppercase letter (other than the first
/// character) that is followed by a lowercase letter. `HTTPServer` becomes
/// `http_server`.
pub fn camel_to_snake(camel: &str) -> String {
    let chars: Vec<char> = camel.chars().collect();
    let mut out = String::with_capacity(camel.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let after_lower = i > 0 && {
                let prev = chars[i - 1];
                prev.is_ascii_lowercase() || prev.is_ascii_digit()
            };
            let before_lower = i > 0 && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if after_lower || before_lower {
                out.push('_');
            }
        }
        out.push(c);
    }

    out.to_lowercase()
}
