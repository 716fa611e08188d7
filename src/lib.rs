#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Package descriptor to dist-target resolution.
//!
//! Turns a package descriptor's publishing metadata (legacy
//! `main`/`module` fields and conditional `exports` declarations) into
//! the ordered list of build targets a bundling engine compiles.
//!
//! This crate is a pure library: no file I/O and no logging. Non-fatal
//! oddities are returned to the caller as structured warnings on the
//! export table; malformed declarations are reported as errors instead
//! of being partially resolved.

pub mod descriptor;
pub mod error;
pub mod exports;

pub use descriptor::{PackageDescriptor, PackageType};
pub use error::{codes, Error};
pub use exports::{
    resolve_conditions, resolve_entry_targets, resolve_export_table, resolve_subpath_targets,
    DistTarget, ExportTable, ExportWarning, ExportsField, Format, ResolvedPathSet, SubpathDist,
    MAX_EXPORTS_DEPTH,
};
