//! Graph metrics
//!
//! The derived facts the decision policy runs on. Computed fresh per call
//! and returned with every decision so callers can audit or override it.

use crate::graph::TaskGraph;
use crate::task::TaskSpec;
use serde::{Deserialize, Serialize};

/// Structural facts derived from a task spec's dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetrics {
    /// Number of submitted tasks
    pub task_count: usize,
    /// Total dependency edges, duplicates included
    pub dependency_count: usize,
    /// Longest dependency chain (edge count) from any root
    pub max_dependency_depth: usize,
    /// Whether any node has more than one outgoing edge
    pub has_branching: bool,
    /// Dependencies exist and none of them branch
    pub is_linear: bool,
    /// Whether any task carries a duration estimate
    pub has_timelines: bool,
}

impl GraphMetrics {
    /// Compute metrics for a spec
    #[must_use]
    pub fn compute(spec: &TaskSpec) -> Self {
        let graph = TaskGraph::from_spec(spec);
        let dependency_count = graph.edge_count();
        let has_branching = graph.has_branching();
        Self {
            task_count: spec.tasks.len(),
            dependency_count,
            max_dependency_depth: graph.max_depth(),
            has_branching,
            is_linear: dependency_count > 0 && !has_branching,
            has_timelines: spec.tasks.iter().any(|t| t.estimated_hours.is_some()),
        }
    }

    /// One-line summary used in decision rationales
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} tasks, {} dependencies, depth {}",
            self.task_count, self.dependency_count, self.max_dependency_depth
        )
    }
}
