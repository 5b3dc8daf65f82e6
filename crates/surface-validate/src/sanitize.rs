//! Fail-open sanitizing
//!
//! Where `validate` rejects a document for any violation, `sanitize` keeps
//! whatever can be kept: each node is judged against the per-node rule set
//! in isolation, failing nodes are dropped, and a best-effort document is
//! always returned. Cross-node integrity (duplicates, dangling references,
//! cycles) is deliberately not consulted, so the survivors may still
//! reference each other badly; callers wanting guarantees use `validate`.

use crate::rules;
use serde_json::Value;
use surface_schema::{ComponentCatalog, MessageKind, SurfaceDocument, SurfaceNode};
use tracing::{debug, warn};

/// Keep the individually-valid subset of a possibly-invalid document
///
/// Availability-preserving and silent: dropped nodes are logged, not
/// reported. An unrecognized `kind` falls back to
/// [`MessageKind::InitialRender`]; non-object input yields an empty default
/// document.
#[must_use]
pub fn sanitize(input: &Value, catalog: &ComponentCatalog) -> SurfaceDocument {
    let Some(fields) = input.as_object() else {
        warn!("sanitizing non-object input to an empty document");
        return SurfaceDocument::default();
    };

    let kind = fields
        .get("kind")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<MessageKind>().ok())
        .unwrap_or_default();

    let mut nodes = Vec::new();
    let mut dropped = 0usize;
    if let Some(declared) = fields.get("nodes").and_then(Value::as_array) {
        for (position, node) in declared.iter().enumerate() {
            if !rules::node_passes(position, node, catalog, false) {
                dropped += 1;
                continue;
            }
            match serde_json::from_value::<SurfaceNode>(node.clone()) {
                Ok(node) => nodes.push(node),
                Err(_) => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        warn!(dropped, kept = nodes.len(), "sanitize dropped failing nodes");
    } else {
        debug!(kept = nodes.len(), "sanitize kept every node");
    }

    SurfaceDocument {
        kind,
        nodes,
        timestamp: fields
            .get("timestamp")
            .and_then(Value::as_str)
            .map(String::from),
        metadata: fields.get("metadata").and_then(Value::as_object).cloned(),
    }
}
