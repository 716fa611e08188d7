//! Condition-key precedence and per-subpath path resolution.

use super::field::ExportsField;
use crate::error::Error;

/// Condition keys recognized in `exports` objects (besides subpaths).
pub(crate) const CONDITION_KEYS: [&str; 5] = ["require", "import", "module", "node", "default"];

/// Precedence for the `main` (cjs) slot. First present key wins; later
/// keys are not consulted once one matches.
const MAIN_CONDITIONS: [&str; 3] = ["require", "node", "default"];

/// Precedence for the deep `export` drill-down, applied at every level.
const EXPORT_CONDITIONS: [&str; 4] = [".", "import", "module", "default"];

/// Paths resolved for one export subpath.
///
/// Slots fill left-to-right by precedence and are never overwritten
/// once set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPathSet {
    /// Bundled as cjs; from the legacy `main` field or the first of
    /// `require`/`node`/`default`.
    pub main: Option<String>,
    /// Bundled as esm; from the legacy `module` field or the literal
    /// `module` condition.
    pub module: Option<String>,
    /// Bundled as esm; from a string declaration or the deep drill-down.
    pub export: Option<String>,
}

impl ResolvedPathSet {
    /// Whether no path is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.module.is_none() && self.export.is_none()
    }

    /// Fill unset slots from `other`; slots already set are kept.
    pub(crate) fn fill_from(&mut self, other: ResolvedPathSet) {
        if self.main.is_none() {
            self.main = other.main;
        }
        if self.module.is_none() {
            self.module = other.module;
        }
        if self.export.is_none() {
            self.export = other.export;
        }
    }
}

/// Resolve one subpath's declaration into its path set.
///
/// A bare string fills only the `export` slot. A condition map fills
/// `main` from the first of `require`/`node`/`default`, `module` from
/// the literal `module` condition, and `export` from the deep
/// drill-down.
pub fn resolve_conditions(declaration: &ExportsField) -> Result<ResolvedPathSet, Error> {
    let mut paths = ResolvedPathSet::default();
    match declaration {
        ExportsField::Path(path) => paths.export = Some(path.clone()),
        ExportsField::Conditions(_) => {
            for key in MAIN_CONDITIONS {
                if let Some(value) = declaration.get(key) {
                    paths.main = Some(condition_path(key, value)?.to_string());
                    break;
                }
            }
            if let Some(value) = declaration.get("module") {
                paths.module = Some(condition_path("module", value)?.to_string());
            }
            paths.export = find_deep_export(declaration);
        }
        ExportsField::Subpaths(_) => {
            return Err(Error::shape(
                "exports",
                "path or condition map",
                declaration.shape_name(),
            ));
        }
    }
    Ok(paths)
}

/// Deep drill-down for the `export` slot.
///
/// At each level takes the first present of `.`/`import`/`module`/
/// `default` and recurses until a path string or a dead end. No
/// backtracking: a chosen branch that dead-ends resolves to nothing.
/// Recursion is bounded because parsed declarations are depth-limited.
fn find_deep_export(declaration: &ExportsField) -> Option<String> {
    if let Some(path) = declaration.as_path() {
        return Some(path.to_string());
    }
    EXPORT_CONDITIONS
        .into_iter()
        .find_map(|key| declaration.get(key))
        .and_then(find_deep_export)
}

/// A condition's value as a path string.
pub(crate) fn condition_path<'a>(key: &str, value: &'a ExportsField) -> Result<&'a str, Error> {
    value
        .as_path()
        .ok_or_else(|| Error::shape(key, "path string", value.shape_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exports::table::ExportWarning;
    use serde_json::{json, Value};

    fn field(value: &Value) -> ExportsField {
        let mut warnings: Vec<ExportWarning> = Vec::new();
        ExportsField::from_value(value, &mut warnings).unwrap()
    }

    #[test]
    fn test_string_declaration_fills_only_export() {
        let paths = resolve_conditions(&field(&json!("./x.js"))).unwrap();
        assert_eq!(paths.export.as_deref(), Some("./x.js"));
        assert!(paths.main.is_none());
        assert!(paths.module.is_none());
    }

    #[test]
    fn test_require_wins_main_over_node_and_default() {
        let paths = resolve_conditions(&field(&json!({
            "require": "./a.cjs",
            "node": "./a.node.js",
            "default": "./a.js"
        })))
        .unwrap();
        assert_eq!(paths.main.as_deref(), Some("./a.cjs"));
    }

    #[test]
    fn test_node_wins_main_when_require_is_absent() {
        let paths = resolve_conditions(&field(&json!({
            "node": "./a.node.js",
            "default": "./a.js"
        })))
        .unwrap();
        assert_eq!(paths.main.as_deref(), Some("./a.node.js"));
    }

    #[test]
    fn test_default_fills_main_as_last_resort() {
        let paths = resolve_conditions(&field(&json!({ "default": "./a.js" }))).unwrap();
        assert_eq!(paths.main.as_deref(), Some("./a.js"));
    }

    #[test]
    fn test_module_slot_takes_the_literal_module_key() {
        let paths = resolve_conditions(&field(&json!({
            "require": "./a.cjs",
            "module": "./a.esm.js"
        })))
        .unwrap();
        assert_eq!(paths.module.as_deref(), Some("./a.esm.js"));
    }

    #[test]
    fn test_export_drills_through_nested_conditions() {
        let paths = resolve_conditions(&field(&json!({
            "import": { "module": "./a.esm.js" }
        })))
        .unwrap();
        assert_eq!(paths.export.as_deref(), Some("./a.esm.js"));
    }

    #[test]
    fn test_export_prefers_dot_at_nested_levels() {
        let declaration = ExportsField::Conditions(vec![(
            "default".into(),
            ExportsField::Conditions(vec![
                ("import".into(), ExportsField::Path("./imp.js".into())),
                (".".into(), ExportsField::Path("./dot.js".into())),
            ]),
        )]);
        let paths = resolve_conditions(&declaration).unwrap();
        assert_eq!(paths.export.as_deref(), Some("./dot.js"));
    }

    #[test]
    fn test_export_drill_down_does_not_backtrack() {
        // "import" is chosen first; its subtree dead-ends ("node" is not
        // consulted by the drill-down) and "default" is never revisited.
        let paths = resolve_conditions(&field(&json!({
            "import": { "node": "./x.js" },
            "default": "./d.js"
        })))
        .unwrap();
        assert!(paths.export.is_none());
        assert_eq!(paths.main.as_deref(), Some("./d.js"));
    }

    #[test]
    fn test_main_condition_must_be_a_path_string() {
        let result = resolve_conditions(&field(&json!({
            "require": { "default": "./a.cjs" }
        })));
        assert!(matches!(
            result,
            Err(Error::UnsupportedExportsShape { key, .. }) if key == "require"
        ));
    }

    #[test]
    fn test_subpath_map_input_is_rejected() {
        let declaration = field(&json!({ "./foo": "./foo.js" }));
        assert!(matches!(
            resolve_conditions(&declaration),
            Err(Error::UnsupportedExportsShape { .. })
        ));
    }

    #[test]
    fn test_fill_from_keeps_existing_slots() {
        let mut seed = ResolvedPathSet {
            main: Some("./legacy.cjs".into()),
            module: None,
            export: None,
        };
        seed.fill_from(ResolvedPathSet {
            main: Some("./new.cjs".into()),
            module: Some("./new.esm.js".into()),
            export: None,
        });
        assert_eq!(seed.main.as_deref(), Some("./legacy.cjs"));
        assert_eq!(seed.module.as_deref(), Some("./new.esm.js"));
        assert!(seed.export.is_none());
    }
}
