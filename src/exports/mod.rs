//! `exports` declaration interpretation and dist-target planning.
//!
//! Resolves a descriptor's legacy entry fields and conditional
//! `exports` declarations into an ordered export table, then plans the
//! concrete (format, absolute path) build targets per entry point.

mod conditions;
mod dist;
mod field;
mod table;

pub use conditions::{resolve_conditions, ResolvedPathSet};
pub use dist::{resolve_entry_targets, resolve_subpath_targets, DistTarget, Format, SubpathDist};
pub use field::{ExportsField, MAX_EXPORTS_DEPTH};
pub use table::{resolve_export_table, ExportTable, ExportWarning};
