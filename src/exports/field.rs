//! Shape discrimination for the raw `exports` declaration.
//!
//! The `exports` field is shape-polymorphic: a bare path string, an
//! object of condition keys, or an object of `.`-prefixed subpaths.
//! The shape is decided once here; resolution matches on the parsed
//! variant instead of re-probing JSON types at each step.

use super::conditions::CONDITION_KEYS;
use super::table::ExportWarning;
use crate::error::Error;
use serde_json::Value;

/// Maximum nesting depth accepted in an `exports` declaration.
///
/// Real-world declarations nest two or three levels; anything deeper is
/// reported as malformed instead of recursed into without bound.
pub const MAX_EXPORTS_DEPTH: usize = 32;

/// A parsed `exports` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportsField {
    /// A single path string.
    Path(String),
    /// Condition key to nested declaration, in declaration order.
    Conditions(Vec<(String, ExportsField)>),
    /// Subpath key (starts with `.`) to nested declaration, in
    /// declaration order. Only produced at the top level.
    Subpaths(Vec<(String, ExportsField)>),
}

impl ExportsField {
    /// Discriminate a raw `exports` value into its declaration shape.
    ///
    /// An object with any `.`-prefixed key is a subpath map; otherwise it
    /// is a condition map for the default entry. Keys that are neither
    /// subpaths nor recognized conditions are dropped and recorded in
    /// `warnings`; condition keys mixed into a subpath map are rejected.
    pub fn from_value(value: &Value, warnings: &mut Vec<ExportWarning>) -> Result<Self, Error> {
        match value {
            Value::String(path) => Ok(Self::Path(path.clone())),
            Value::Object(map) if map.keys().any(|key| key.starts_with('.')) => {
                let mut subpaths = Vec::new();
                for (key, value) in map {
                    if key.starts_with('.') {
                        if value.is_null() {
                            continue;
                        }
                        subpaths.push((key.clone(), Self::parse_nested(key, value, 1)?));
                    } else if CONDITION_KEYS.contains(&key.as_str()) {
                        return Err(Error::shape(
                            key.as_str(),
                            "a subpath starting with '.'",
                            "condition key",
                        ));
                    } else {
                        warnings.push(ExportWarning::ignored_key(key));
                    }
                }
                Ok(Self::Subpaths(subpaths))
            }
            Value::Object(map) => {
                let mut conditions = Vec::new();
                for (key, value) in map {
                    if !CONDITION_KEYS.contains(&key.as_str()) {
                        warnings.push(ExportWarning::ignored_key(key));
                        continue;
                    }
                    if value.is_null() {
                        continue;
                    }
                    conditions.push((key.clone(), Self::parse_nested(key, value, 1)?));
                }
                Ok(Self::Conditions(conditions))
            }
            other => Err(Error::shape(
                "exports",
                "string or object",
                json_type_name(other),
            )),
        }
    }

    /// Parse a declaration value below the top level.
    ///
    /// Below the top level every object is a condition map; a literal
    /// `"."` key is a condition there, not a subpath. Null entries behave
    /// as absent and are dropped.
    fn parse_nested(key: &str, value: &Value, depth: usize) -> Result<Self, Error> {
        if depth > MAX_EXPORTS_DEPTH {
            return Err(Error::MalformedExportsDeclaration {
                key: key.to_string(),
                max_depth: MAX_EXPORTS_DEPTH,
            });
        }
        match value {
            Value::String(path) => Ok(Self::Path(path.clone())),
            Value::Object(map) => {
                let mut conditions = Vec::new();
                for (key, value) in map {
                    if value.is_null() {
                        continue;
                    }
                    conditions.push((key.clone(), Self::parse_nested(key, value, depth + 1)?));
                }
                Ok(Self::Conditions(conditions))
            }
            other => Err(Error::shape(key, "string or object", json_type_name(other))),
        }
    }

    /// Look up a condition key, for `Conditions` declarations.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ExportsField> {
        match self {
            Self::Conditions(entries) => {
                entries.iter().find(|(k, _)| k == key).map(|(_, value)| value)
            }
            Self::Path(_) | Self::Subpaths(_) => None,
        }
    }

    /// The path string, for `Path` declarations.
    #[must_use]
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::Conditions(_) | Self::Subpaths(_) => None,
        }
    }

    /// Shape name used in diagnostics.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Path(_) => "path string",
            Self::Conditions(_) => "condition map",
            Self::Subpaths(_) => "subpath map",
        }
    }
}

/// JSON type name used in diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
