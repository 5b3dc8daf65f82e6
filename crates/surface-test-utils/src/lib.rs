//! Testing utilities for the surface-kit workspace
//!
//! Shared fixtures: raw document values (as `serde_json::Value`, the
//! validator's input shape) and task specs for the layout classifier.

#![allow(missing_docs)]

use serde_json::{json, Value};
use surface_layout::{Task, TaskSpec};

/// A raw node value passing every per-node rule
pub fn node_value(node_type: &str, id: &str) -> Value {
    json!({ "type": node_type, "id": id, "properties": {} })
}

/// A raw node value with children references
pub fn node_with_children(node_type: &str, id: &str, children: &[&str]) -> Value {
    json!({ "type": node_type, "id": id, "properties": {}, "children": children })
}

/// A minimal valid initial-render document
pub fn valid_document() -> Value {
    json!({
        "kind": "initial-render",
        "nodes": [
            node_with_children("container", "root", &["title", "body"]),
            node_value("heading", "title"),
            node_value("text", "body"),
        ]
    })
}

/// A document whose children relation closes a two-node cycle
pub fn cyclic_document() -> Value {
    json!({
        "kind": "initial-render",
        "nodes": [
            node_with_children("container", "a", &["b"]),
            node_with_children("container", "b", &["a"]),
        ]
    })
}

/// A document with one dangling child reference
pub fn dangling_document() -> Value {
    json!({
        "kind": "partial-update",
        "nodes": [
            node_with_children("container", "root", &["missing"]),
        ]
    })
}

/// A document declaring the same id twice
pub fn duplicate_id_document() -> Value {
    json!({
        "kind": "initial-render",
        "nodes": [
            node_value("text", "twin"),
            node_value("card", "twin"),
        ]
    })
}

/// A linear chain of `n` tasks, each depending on the previous
pub fn chain_spec(n: usize) -> TaskSpec {
    let mut spec = TaskSpec::new();
    for i in 0..n {
        let mut task = Task::new("work", format!("step {i}"));
        if i > 0 {
            task = task.depends_on(format!("step {}", i - 1));
        }
        spec = spec.with_task(task);
    }
    spec
}

/// One hub task with `n` dependents fanning out from it
pub fn fan_out_spec(n: usize) -> TaskSpec {
    let mut spec = TaskSpec::new().with_task(Task::new("work", "hub"));
    for i in 0..n {
        spec = spec.with_task(Task::new("work", format!("leaf {i}")).depends_on("hub"));
    }
    spec
}

/// `n` tasks with no dependencies at all
pub fn independent_spec(n: usize) -> TaskSpec {
    let mut spec = TaskSpec::new();
    for i in 0..n {
        spec = spec.with_task(Task::new("work", format!("task {i}")));
    }
    spec
}
