//! Component catalog
//!
//! The allowlist of node types a validator accepts. This is the system's
//! security boundary: membership is checked by explicit set lookup, never
//! inferred from whatever the rendering layer happens to implement.

use indexmap::IndexSet;
use once_cell::sync::Lazy;

/// Built-in renderable component types
static BUILTIN_TYPES: Lazy<IndexSet<String>> = Lazy::new(|| {
    [
        "container", "card", "text", "heading", "button", "input", "select",
        "checkbox", "list", "list-item", "table", "chart", "image", "divider",
        "badge", "progress", "form", "tabs", "tab-panel", "modal",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// Allowlist of node types the validator accepts
///
/// Modeled as a closed set of variants rather than a bare string set so the
/// escape hatches stay visible at the type level:
///
/// - [`ComponentCatalog::Builtin`] — the default allowlist
/// - [`ComponentCatalog::Custom`] — a caller-supplied allowlist
/// - [`ComponentCatalog::AllowAll`] — no boundary at all; only for callers
///   that have an external trust story for node types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentCatalog {
    /// The built-in component allowlist
    Builtin,
    /// A caller-supplied allowlist, replacing the built-in set
    Custom(IndexSet<String>),
    /// Accept any type string; disables the security boundary
    AllowAll,
}

impl ComponentCatalog {
    /// Build a custom catalog from type names
    #[must_use]
    pub fn custom<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Custom(types.into_iter().map(Into::into).collect())
    }

    /// Whether `node_type` is allowed by this catalog
    #[must_use]
    pub fn allows(&self, node_type: &str) -> bool {
        match self {
            ComponentCatalog::Builtin => BUILTIN_TYPES.contains(node_type),
            ComponentCatalog::Custom(set) => set.contains(node_type),
            ComponentCatalog::AllowAll => true,
        }
    }

    /// Number of allowed types (`None` for [`ComponentCatalog::AllowAll`])
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            ComponentCatalog::Builtin => Some(BUILTIN_TYPES.len()),
            ComponentCatalog::Custom(set) => Some(set.len()),
            ComponentCatalog::AllowAll => None,
        }
    }

    /// Whether the catalog allows nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// The built-in type names, in declaration order
    #[must_use]
    pub fn builtin_types() -> impl Iterator<Item = &'static str> {
        BUILTIN_TYPES.iter().map(String::as_str)
    }
}

impl Default for ComponentCatalog {
    fn default() -> Self {
        ComponentCatalog::Builtin
    }
}
