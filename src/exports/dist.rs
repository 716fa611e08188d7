//! Dist target planning.
//!
//! Turns resolved path sets and raw subpath declarations into the
//! ordered (format, absolute path) pairs the bundling engine compiles.

use super::conditions::{condition_path, ResolvedPathSet};
use super::field::ExportsField;
use crate::descriptor::PackageType;
use crate::error::Error;
use std::path::{Component, Path, PathBuf};

/// Output module format of one dist target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// ES Modules (import/export).
    #[default]
    Esm,
    /// CommonJS (require/module.exports).
    Cjs,
}

impl Format {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esm => "esm",
            Self::Cjs => "cjs",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete build output the orchestrator must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistTarget {
    /// Module format to compile to.
    pub format: Format,
    /// Absolute output file path.
    pub file: PathBuf,
}

impl DistTarget {
    fn new(format: Format, declared: &str, cwd: &Path) -> Self {
        Self {
            format,
            file: dist_path(declared, cwd),
        }
    }
}

/// Resolve a declared dist path against the working directory.
///
/// Lexical only: `.` and `..` components are collapsed without touching
/// the filesystem, and an absolute declared path wins over `cwd`.
fn dist_path(declared: &str, cwd: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in cwd.join(declared).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            part => resolved.push(part),
        }
    }
    resolved
}

/// Plan the build targets for the default entry.
///
/// Order is contractual: the cjs target from `main` precedes the esm
/// targets from `module` and `export`. An empty path set falls back to
/// a single esm `dist/index.js` target.
#[must_use]
pub fn resolve_entry_targets(paths: &ResolvedPathSet, cwd: &Path) -> Vec<DistTarget> {
    let mut dist = Vec::new();
    if let Some(main) = &paths.main {
        dist.push(DistTarget::new(Format::Cjs, main, cwd));
    }
    if let Some(module) = &paths.module {
        dist.push(DistTarget::new(Format::Esm, module, cwd));
    }
    if let Some(export) = &paths.export {
        dist.push(DistTarget::new(Format::Esm, export, cwd));
    }
    if dist.is_empty() {
        dist.push(DistTarget::new(Format::Esm, "dist/index.js", cwd));
    }
    dist
}

/// Outcome of planning one subpath's raw declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubpathDist {
    /// Code targets for the bundling engine, cjs before esm.
    Bundle(Vec<DistTarget>),
    /// The declaration names only non-code conditions (static
    /// passthroughs such as a manifest file); nothing to compile.
    Ignored {
        /// The condition keys that were present.
        conditions: Vec<String>,
    },
}

/// Plan the build targets for one subpath's raw declaration.
///
/// Works on the unresolved declaration so one subpath can keep dual
/// outputs: `require` maps to a cjs target and `import` to an esm
/// target, independent of the package type. A bare string maps to a
/// single target whose format follows the package type. A condition
/// map with neither `require` nor `import` is `Ignored`, not empty.
pub fn resolve_subpath_targets(
    declaration: &ExportsField,
    package_type: PackageType,
    cwd: &Path,
) -> Result<SubpathDist, Error> {
    match declaration {
        ExportsField::Path(path) => {
            let format = match package_type {
                PackageType::Module => Format::Esm,
                PackageType::Commonjs => Format::Cjs,
            };
            Ok(SubpathDist::Bundle(vec![DistTarget::new(format, path, cwd)]))
        }
        ExportsField::Conditions(entries) => {
            let mut dist = Vec::new();
            if let Some(value) = declaration.get("require") {
                dist.push(DistTarget::new(
                    Format::Cjs,
                    condition_path("require", value)?,
                    cwd,
                ));
            }
            if let Some(value) = declaration.get("import") {
                dist.push(DistTarget::new(
                    Format::Esm,
                    condition_path("import", value)?,
                    cwd,
                ));
            }
            if dist.is_empty() {
                return Ok(SubpathDist::Ignored {
                    conditions: entries.iter().map(|(key, _)| key.clone()).collect(),
                });
            }
            Ok(SubpathDist::Bundle(dist))
        }
        ExportsField::Subpaths(_) => Err(Error::shape(
            "exports",
            "path or condition map",
            declaration.shape_name(),
        )),
    }
}
