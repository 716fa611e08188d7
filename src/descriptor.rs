//! Typed view of a package descriptor.
//!
//! The descriptor-loading collaborator reads and parses package.json;
//! this crate only consumes the already-parsed value. Only the
//! entry-point fields are modeled; everything else is ignored.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Module format a package declares for its plain `.js` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Commonjs,
    Module,
}

impl PackageType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commonjs => "commonjs",
            Self::Module => "module",
        }
    }
}

/// Publishing metadata read from a package descriptor.
///
/// The raw `exports` declaration is kept as JSON and discriminated once
/// at resolution time; see `ExportsField::from_value`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageDescriptor {
    /// Legacy cjs entry point.
    pub main: Option<String>,

    /// Legacy esm entry point.
    pub module: Option<String>,

    /// Type declaration entry.
    pub types: Option<String>,

    /// Older spelling of `types`.
    pub typings: Option<String>,

    /// Module format for plain `.js` files.
    #[serde(rename = "type")]
    pub package_type: PackageType,

    /// Raw `exports` declaration, if any.
    pub exports: Option<Value>,
}

impl PackageDescriptor {
    /// Build a descriptor from a parsed package.json value.
    ///
    /// Unknown fields are ignored; mistyped known fields are an error.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self::deserialize(value)?)
    }

    /// Type declaration entry: `types`, or `typings` if `types` is absent.
    #[must_use]
    pub fn typings(&self) -> Option<&str> {
        self.types.as_deref().or(self.typings.as_deref())
    }
}
