//! Per-node rule set
//!
//! The one rule set shared by the fail-closed `validate` pass and the
//! fail-open `sanitize` pass. Each node is judged independently here;
//! cross-node rules (duplicate ids, dangling references, cycles) live with
//! the validator and are deliberately not consulted by `sanitize`.

use serde_json::Value;
use surface_schema::ComponentCatalog;

/// Collect every violation for one node, judged in isolation
///
/// `position` is the node's index in the document's node list; it anchors
/// every message so callers can locate the offender. Catalog membership is
/// an allowlist check: unknown type strings fail closed unless
/// `allow_unregistered` is set.
pub(crate) fn node_violations(
    position: usize,
    node: &Value,
    catalog: &ComponentCatalog,
    allow_unregistered: bool,
) -> Vec<String> {
    let mut violations = Vec::new();

    let Some(fields) = node.as_object() else {
        violations.push(format!("node {position}: must be an object"));
        return violations;
    };

    match fields.get("type").and_then(Value::as_str) {
        Some(node_type) if !node_type.is_empty() => {
            if !allow_unregistered && !catalog.allows(node_type) {
                violations.push(format!(
                    "node {position}: type '{node_type}' is not in the component catalog"
                ));
            }
        }
        _ => violations.push(format!("node {position}: 'type' must be a non-empty string")),
    }

    match fields.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => {}
        _ => violations.push(format!("node {position}: 'id' must be a non-empty string")),
    }

    if !fields.get("properties").is_some_and(Value::is_object) {
        violations.push(format!("node {position}: 'properties' must be an object"));
    }

    if let Some(children) = fields.get("children") {
        let all_strings = children
            .as_array()
            .is_some_and(|ids| ids.iter().all(Value::is_string));
        if !all_strings {
            violations.push(format!(
                "node {position}: 'children' must be an array of node id strings"
            ));
        }
    }

    violations
}

/// Whether a node passes the per-node rule set on its own
pub(crate) fn node_passes(
    position: usize,
    node: &Value,
    catalog: &ComponentCatalog,
    allow_unregistered: bool,
) -> bool {
    node_violations(position, node, catalog, allow_unregistered).is_empty()
}
