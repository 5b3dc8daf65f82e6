//! Integration tests for the validator's externally observable contract:
//! fail-closed verdicts, the allowlist boundary, and fail-open sanitizing.

use proptest::prelude::*;
use serde_json::{json, Value};
use surface_test_utils as fixtures;
use surface_validate::prelude::*;

fn validator() -> SurfaceValidator {
    SurfaceValidator::new()
}

#[test]
fn fixture_document_is_valid() {
    let verdict = validator().validate(&fixtures::valid_document());
    assert!(verdict.valid, "errors: {:?}", verdict.errors);
    assert!(verdict.warnings.is_empty());
    assert_eq!(verdict.normalized.unwrap().len(), 3);
}

#[test]
fn every_unregistered_type_reports_a_catalog_error() {
    let document = json!({
        "kind": "initial-render",
        "nodes": [
            fixtures::node_value("widget-a", "n1"),
            fixtures::node_value("widget-b", "n2"),
            fixtures::node_value("widget-c", "n3"),
        ]
    });
    let verdict = validator().validate(&document);
    assert!(!verdict.valid);
    let catalog_errors = verdict
        .errors
        .iter()
        .filter(|e| e.contains("not in the component catalog"))
        .count();
    assert_eq!(catalog_errors, 3);
}

#[test]
fn duplicate_ids_fail_with_one_error_per_extra_occurrence() {
    let verdict = validator().validate(&fixtures::duplicate_id_document());
    assert!(!verdict.valid);
    assert_eq!(
        verdict
            .errors
            .iter()
            .filter(|e| e.contains("duplicate node id 'twin'"))
            .count(),
        1
    );
}

#[test]
fn dangling_reference_names_parent_and_child() {
    let verdict = validator().validate(&fixtures::dangling_document());
    assert!(!verdict.valid);
    assert!(verdict
        .errors
        .iter()
        .any(|e| e.contains("'root'") && e.contains("'missing'")));
}

#[test]
fn two_node_cycle_is_rejected() {
    let verdict = validator().validate(&fixtures::cyclic_document());
    assert!(!verdict.valid);
    assert!(verdict
        .errors
        .iter()
        .any(|e| e.starts_with("circular reference detected")));
}

#[test]
fn sanitize_never_reports_and_always_returns() {
    let document = fixtures::cyclic_document();
    let sanitized = sanitize(&document, &ComponentCatalog::Builtin);
    // Individually both nodes pass; the cycle survives sanitizing.
    assert_eq!(sanitized.len(), 2);
}

#[test]
fn sanitize_of_malformed_input_is_the_default_document() {
    for input in [json!(null), json!(42), json!("doc"), json!([1, 2])] {
        let sanitized = sanitize(&input, &ComponentCatalog::Builtin);
        assert_eq!(sanitized.kind, MessageKind::InitialRender);
        assert!(sanitized.is_empty());
    }
}

#[test]
fn validate_and_sanitize_agree_on_per_node_rules() {
    let document = json!({
        "kind": "initial-render",
        "nodes": [
            fixtures::node_value("text", "good"),
            fixtures::node_value("not-a-component", "bad"),
        ]
    });
    let catalog = ComponentCatalog::Builtin;

    let verdict = validator().validate(&document);
    assert!(!verdict.valid);

    let sanitized = sanitize(&document, &catalog);
    assert_eq!(sanitized.len(), 1);
    assert_eq!(sanitized.nodes[0].id, "good");
}

#[test]
fn empty_document_round_trip_matches_spec_example() {
    let verdict = validator().validate(&json!({ "kind": "initial-render", "nodes": [] }));
    assert!(verdict.valid);
    assert!(verdict.errors.is_empty());
    assert_eq!(verdict.warnings.len(), 1);
    assert!(verdict.warnings[0].contains("no nodes"));
}

/// Strategy for node values spanning valid and broken shapes
fn node_strategy() -> impl Strategy<Value = Value> {
    let id = "[a-z]{1,4}";
    let known_type = prop::sample::select(vec!["text", "card", "container", "chart"]);
    prop_oneof![
        // Well-formed, catalog-approved node
        (known_type.clone(), id).prop_map(|(t, id)| json!({
            "type": t, "id": id, "properties": {}
        })),
        // Unregistered type
        (Just("mystery"), id).prop_map(|(t, id)| json!({
            "type": t, "id": id, "properties": {}
        })),
        // Missing properties
        (known_type, id).prop_map(|(t, id)| json!({ "type": t, "id": id })),
        // Not an object at all
        Just(json!("stray string")),
    ]
}

proptest! {
    #[test]
    fn validate_is_total_over_node_lists(nodes in prop::collection::vec(node_strategy(), 0..12)) {
        let document = json!({ "kind": "initial-render", "nodes": nodes });
        let verdict = validator().validate(&document);
        // Verdict is internally consistent, whatever the input was.
        prop_assert_eq!(verdict.valid, verdict.errors.is_empty());
        if verdict.valid {
            prop_assert!(verdict.normalized.is_some());
        } else {
            prop_assert!(verdict.normalized.is_none());
        }
    }

    #[test]
    fn sanitize_keeps_a_subset_of_declared_nodes(nodes in prop::collection::vec(node_strategy(), 0..12)) {
        let document = json!({ "kind": "initial-render", "nodes": nodes.clone() });
        let sanitized = sanitize(&document, &ComponentCatalog::Builtin);

        prop_assert!(sanitized.len() <= nodes.len());
        let declared_ids: Vec<&str> = nodes
            .iter()
            .filter_map(|n| n.get("id").and_then(Value::as_str))
            .collect();
        for node in &sanitized.nodes {
            prop_assert!(declared_ids.contains(&node.id.as_str()));
            // Every survivor passes the catalog boundary on its own.
            prop_assert!(ComponentCatalog::Builtin.allows(&node.node_type));
        }
    }

    #[test]
    fn duplicate_id_errors_survive_any_ordering(
        (extras, nodes) in (1usize..4).prop_flat_map(|extras| {
            let mut nodes: Vec<Value> = (0..4)
                .map(|i| fixtures::node_value("text", &format!("u{i}")))
                .collect();
            nodes.extend((0..=extras).map(|_| fixtures::node_value("card", "twin")));
            (Just(extras), Just(nodes).prop_shuffle())
        })
    ) {
        let verdict = validator().validate(&json!({ "kind": "initial-render", "nodes": nodes }));
        prop_assert!(!verdict.valid);
        let duplicate_errors = verdict
            .errors
            .iter()
            .filter(|e| e.contains("duplicate node id 'twin'"))
            .count();
        // One error per extra occurrence, wherever the copies land.
        prop_assert_eq!(duplicate_errors, extras);
    }

    #[test]
    fn acyclic_chains_never_report_cycles(len in 1usize..8) {
        let nodes: Vec<Value> = (0..len)
            .map(|i| {
                let id = format!("n{i}");
                if i + 1 < len {
                    let child = format!("n{}", i + 1);
                    fixtures::node_with_children("container", &id, &[child.as_str()])
                } else {
                    fixtures::node_value("text", &id)
                }
            })
            .collect();
        let verdict = validator().validate(&json!({ "kind": "initial-render", "nodes": nodes }));
        prop_assert!(verdict.errors.iter().all(|e| !e.contains("circular")));
        prop_assert!(verdict.valid);
    }
}
