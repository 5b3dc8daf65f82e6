//! Derived task graph
//!
//! Ephemeral: rebuilt per classification call, never persisted. Edges run
//! from a dependency to its dependent, so a task many others wait on has
//! out-degree above one, and roots are tasks that depend on nothing.

use crate::task::TaskSpec;
use std::collections::HashSet;
use surface_schema::graph::{longest_depth_from, roots_of, Adjacency};
use tracing::warn;

/// Dependency graph derived from a [`TaskSpec`]
#[derive(Debug, Clone)]
pub struct TaskGraph {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

impl TaskGraph {
    /// Build the graph from a spec
    ///
    /// Per-task `dependsOn` edges are added first, then the global map's, in
    /// that order; duplicate edges are kept. Edge endpoints that never appear
    /// as tasks still participate in the graph.
    #[must_use]
    pub fn from_spec(spec: &TaskSpec) -> Self {
        let mut nodes = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for task in &spec.tasks {
            let identity = task.identity();
            if seen.insert(identity) {
                nodes.push(identity.to_string());
            } else {
                warn!(identity, "two tasks share one identity key; their edges will merge");
            }
        }

        let mut edges = Vec::new();
        for task in &spec.tasks {
            for dependency in &task.depends_on {
                edges.push((dependency.clone(), task.identity().to_string()));
            }
        }
        for (identity, dependencies) in &spec.dependencies {
            for dependency in dependencies {
                edges.push((dependency.clone(), identity.clone()));
            }
        }

        for (from, to) in &edges {
            for endpoint in [from, to] {
                if !seen.contains(endpoint.as_str()) {
                    seen.insert(endpoint);
                    nodes.push(endpoint.clone());
                }
            }
        }

        Self { nodes, edges }
    }

    /// Node identity keys, tasks first, then edge-only endpoints
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// All edges, duplicates included
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Total edge count, duplicates included
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether any node has more than one outgoing edge
    #[must_use]
    pub fn has_branching(&self) -> bool {
        let mut out_degree: std::collections::HashMap<&str, usize> =
            std::collections::HashMap::new();
        for (from, _) in &self.edges {
            let degree = out_degree.entry(from.as_str()).or_insert(0);
            *degree += 1;
            if *degree > 1 {
                return true;
            }
        }
        false
    }

    /// Adjacency map over the dependency edges
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        let mut adjacency = Adjacency::new();
        for (from, to) in &self.edges {
            adjacency.entry(from.clone()).or_default().push(to.clone());
        }
        adjacency
    }

    /// Longest dependency chain (edge count) from any root
    ///
    /// Roots are nodes with no incoming edge; each root's walk carries its
    /// own visited set, so even disallowed cyclic input terminates.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        let adjacency = self.adjacency();
        roots_of(self.nodes.iter().map(String::as_str), &adjacency)
            .iter()
            .map(|root| longest_depth_from(root, &adjacency))
            .max()
            .unwrap_or(0)
    }
}
