//! Export table construction.
//!
//! Normalizes a descriptor's legacy entry fields and `exports`
//! declaration into an ordered subpath table for the dist planners.

use super::conditions::{resolve_conditions, ResolvedPathSet};
use super::field::ExportsField;
use crate::descriptor::PackageDescriptor;
use crate::error::{codes, Error};
use serde_json::Value;

/// Non-fatal oddity found while resolving a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportWarning {
    /// Descriptor key the warning refers to.
    pub key: String,
    /// Stable warning code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ExportWarning {
    #[must_use]
    pub(crate) fn ignored_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            code: codes::EXPORTS_KEY_IGNORED,
            message: format!("'{key}' is neither a subpath nor a recognized condition"),
        }
    }

    #[must_use]
    pub(crate) fn root_shadowed() -> Self {
        Self {
            key: ".".to_string(),
            code: codes::EXPORTS_ROOT_SHADOWED,
            message: "the '.' subpath entry is superseded by the root entry built from main/module"
                .to_string(),
        }
    }
}

/// Ordered mapping from export subpath to its resolved path set.
///
/// Always contains the `"."` entry after resolution, as the first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    /// Subpath to path set, in declaration order.
    pub entries: Vec<(String, ResolvedPathSet)>,
    /// Non-fatal diagnostics collected during resolution.
    pub warnings: Vec<ExportWarning>,
}

impl ExportTable {
    /// Look up the path set for a subpath.
    #[must_use]
    pub fn get(&self, subpath: &str) -> Option<&ResolvedPathSet> {
        self.entries
            .iter()
            .find(|(key, _)| key == subpath)
            .map(|(_, paths)| paths)
    }

    /// The default entry's path set.
    #[must_use]
    pub fn default_entry(&self) -> Option<&ResolvedPathSet> {
        self.get(".")
    }

    /// Insert or replace in place, keeping first-insertion order.
    fn insert(&mut self, subpath: &str, paths: ResolvedPathSet) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == subpath) {
            entry.1 = paths;
        } else {
            self.entries.push((subpath.to_string(), paths));
        }
    }
}

/// Normalize a descriptor into its export table.
///
/// The `"."` entry is seeded from the legacy `main`/`module` fields. A
/// string `exports` fills the seed's `export` slot; a condition map
/// fills in whatever the legacy fields left unset. A subpath map
/// contributes one entry per subpath, but its own `"."` entry never
/// survives: the root entry is rewritten from the seeded set at the
/// end, and the shadowed entry is reported as a warning.
pub fn resolve_export_table(pkg: &PackageDescriptor) -> Result<ExportTable, Error> {
    let mut table = ExportTable::default();
    let mut root = ResolvedPathSet {
        main: pkg.main.clone(),
        module: pkg.module.clone(),
        export: None,
    };
    // Seeded up front so "." leads the table's iteration order.
    table.insert(".", root.clone());

    match &pkg.exports {
        None | Some(Value::Null) => {}
        Some(raw) => match ExportsField::from_value(raw, &mut table.warnings)? {
            ExportsField::Path(path) => root.export = Some(path),
            declaration @ ExportsField::Conditions(_) => {
                root.fill_from(resolve_conditions(&declaration)?);
            }
            ExportsField::Subpaths(subpaths) => {
                for (subpath, declaration) in &subpaths {
                    let paths = resolve_conditions(declaration)?;
                    if subpath == "." {
                        table.warnings.push(ExportWarning::root_shadowed());
                    }
                    table.insert(subpath, paths);
                }
            }
        },
    }

    // The root entry always comes from the seeded set, even when the
    // subpath map declared its own "." entry.
    table.insert(".", root);
    Ok(table)
}
