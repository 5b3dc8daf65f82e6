//! Structural validator
//!
//! The fail-closed entry point for surface documents. A single pass collects
//! schema violations per node, then two graph passes check referential
//! integrity and reference cycles. Nothing fails fast: the verdict carries
//! every violation found, so callers can report them all at once.

use crate::error::ValidateError;
use crate::rules;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use surface_schema::graph::{adjacency_of, find_cycle_from};
use surface_schema::{ComponentCatalog, MessageKind, SurfaceDocument, SurfaceNode};
use tracing::{debug, warn};

/// Options controlling a validation pass
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Catalog used for the type allowlist check
    pub catalog: ComponentCatalog,
    /// Accept node types absent from the catalog
    ///
    /// This disables the validator's only security boundary. Leave off unless
    /// the caller enforces type trust elsewhere.
    pub allow_unregistered_types: bool,
    /// Treat any warning as a validation failure
    pub strict: bool,
}

impl ValidateOptions {
    /// Create default options: built-in catalog, boundary on, lenient warnings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: ComponentCatalog::Builtin,
            allow_unregistered_types: false,
            strict: false,
        }
    }

    /// With a custom catalog
    #[inline]
    #[must_use]
    pub fn with_catalog(mut self, catalog: ComponentCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Accept unregistered node types (unsafe; see field docs)
    #[inline]
    #[must_use]
    pub fn allow_unregistered_types(mut self) -> Self {
        self.allow_unregistered_types = true;
        self
    }

    /// Fail the verdict on warnings as well as errors
    #[inline]
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a validation pass
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// True iff no errors were collected (and, in strict mode, no warnings)
    pub valid: bool,
    /// Collected violations, in report order
    pub errors: Vec<String>,
    /// Structural observations that are not safety violations
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// The validated document, present only when `valid` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<SurfaceDocument>,
}

/// Fail-closed validator for surface documents
///
/// Stateless between calls; a single instance may be shared freely across
/// threads. The companion fail-open operation is
/// [`sanitize`](crate::sanitize::sanitize), kept as a separate function so
/// the two safety postures can never be mixed up through a mode flag.
#[derive(Debug, Clone, Default)]
pub struct SurfaceValidator {
    options: ValidateOptions,
}

impl SurfaceValidator {
    /// Create validator with default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create validator with specific options
    #[inline]
    #[must_use]
    pub fn with_options(options: ValidateOptions) -> Self {
        Self { options }
    }

    /// The options this validator applies
    #[inline]
    #[must_use]
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validate a raw document
    ///
    /// Never returns `Err` for malformed input; every violation lands in the
    /// verdict's `errors` list. `normalized` echoes the validated document
    /// only when the verdict is valid.
    #[must_use]
    pub fn validate(&self, input: &Value) -> Verdict {
        let Some(fields) = input.as_object() else {
            warn!("rejecting non-object surface document");
            return Verdict {
                valid: false,
                errors: vec!["document must be a JSON object".to_string()],
                warnings: Vec::new(),
                normalized: None,
            };
        };

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let kind = fields
            .get("kind")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<MessageKind>().ok());
        if kind.is_none() {
            errors.push(format!(
                "'kind' must be one of {}",
                MessageKind::ALL.map(|k| k.as_str()).join(", ")
            ));
        }

        let nodes = fields.get("nodes").and_then(Value::as_array);
        if nodes.is_none() {
            errors.push("'nodes' must be an array".to_string());
        }

        if let Some(nodes) = nodes {
            if nodes.is_empty() {
                warnings.push("document contains no nodes".to_string());
            }
            self.check_nodes(nodes, &mut errors);
            self.check_references(nodes, &mut errors);
        }

        let valid = errors.is_empty() && !(self.options.strict && !warnings.is_empty());
        let normalized = if valid {
            self.normalize(fields, kind.unwrap_or_default())
        } else {
            None
        };

        if valid {
            debug!(
                nodes = normalized.as_ref().map_or(0, SurfaceDocument::len),
                warnings = warnings.len(),
                "surface document accepted"
            );
        } else {
            warn!(errors = errors.len(), "surface document rejected");
        }

        Verdict {
            valid,
            errors,
            warnings,
            normalized,
        }
    }

    /// Validate and raise on rejection
    ///
    /// Thin wrapper over [`validate`](Self::validate) for fail-fast contexts:
    /// the same pass, with every collected violation aggregated into one
    /// error. Strict-mode warnings count as violations here.
    pub fn assert_valid(&self, input: &Value) -> Result<SurfaceDocument, ValidateError> {
        let verdict = self.validate(input);
        match verdict {
            Verdict {
                valid: true,
                normalized: Some(document),
                ..
            } => Ok(document),
            Verdict {
                mut errors,
                warnings,
                ..
            } => {
                if self.options.strict {
                    errors.extend(warnings);
                }
                Err(ValidateError::rejected(errors))
            }
        }
    }

    /// Per-node schema checks plus duplicate-id detection
    fn check_nodes(&self, nodes: &[Value], errors: &mut Vec<String>) {
        let mut seen: HashSet<&str> = HashSet::new();
        for (position, node) in nodes.iter().enumerate() {
            errors.extend(rules::node_violations(
                position,
                node,
                &self.options.catalog,
                self.options.allow_unregistered_types,
            ));
            if let Some(id) = declared_id(node) {
                if !seen.insert(id) {
                    errors.push(format!("duplicate node id '{id}' at position {position}"));
                }
            }
        }
    }

    /// Referential integrity and cycle detection over the children relation
    fn check_references(&self, nodes: &[Value], errors: &mut Vec<String>) {
        let declared: HashSet<&str> = nodes.iter().filter_map(declared_id).collect();

        let edges: Vec<(&str, Vec<String>)> = nodes
            .iter()
            .filter_map(|node| Some((declared_id(node)?, child_ids(node)?)))
            .collect();

        for (id, children) in &edges {
            for child in children {
                if !declared.contains(child.as_str()) {
                    errors.push(format!("node '{id}' references unknown child '{child}'"));
                }
            }
        }

        // Re-scan from every declared node rather than one global pass: the
        // messages then name the node at which each traversal closes a cycle.
        let adjacency = adjacency_of(edges.iter().map(|(id, children)| (*id, children.as_slice())));
        let mut reported: HashSet<String> = HashSet::new();
        for (id, _) in &edges {
            if let Some(at) = find_cycle_from(id, &adjacency) {
                let message = format!("circular reference detected at node '{at}'");
                if reported.insert(message.clone()) {
                    errors.push(message);
                }
            }
        }
    }

    /// Echo the validated input as a typed document
    fn normalize(
        &self,
        fields: &serde_json::Map<String, Value>,
        kind: MessageKind,
    ) -> Option<SurfaceDocument> {
        let nodes = fields
            .get("nodes")?
            .as_array()?
            .iter()
            .map(|node| serde_json::from_value::<SurfaceNode>(node.clone()))
            .collect::<Result<Vec<_>, _>>()
            .ok()?;

        Some(SurfaceDocument {
            kind,
            nodes,
            timestamp: fields
                .get("timestamp")
                .and_then(Value::as_str)
                .map(String::from),
            metadata: fields.get("metadata").and_then(Value::as_object).cloned(),
        })
    }
}

/// A node's id, when it is declared as a non-empty string
fn declared_id(node: &Value) -> Option<&str> {
    node.get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// A node's children, when declared as an array of strings
fn child_ids(node: &Value) -> Option<Vec<String>> {
    node.get("children")?
        .as_array()?
        .iter()
        .map(|child| child.as_str().map(String::from))
        .collect()
}
