//! Layout classification
//!
//! An ordered decision policy over derived graph metrics. Rules are checked
//! in fixed priority order and the first match wins; confidences are
//! documented constants per rule, not a fitted estimate. The classifier has
//! no failure path: every input, including the empty spec, gets a decision.

use crate::metrics::GraphMetrics;
use crate::task::TaskSpec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visualization modes the classifier can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Tasks grouped by category/status on a board
    #[serde(rename = "grouped-status-board")]
    StatusBoard,
    /// Tasks ordered on a sequential timeline
    #[serde(rename = "sequential-timeline")]
    Timeline,
    /// Tasks and their dependencies drawn as a graph
    #[serde(rename = "relationship-graph")]
    RelationshipGraph,
}

impl LayoutMode {
    /// Wire name of this mode
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::StatusBoard => "grouped-status-board",
            LayoutMode::Timeline => "sequential-timeline",
            LayoutMode::RelationshipGraph => "relationship-graph",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layout choice with its confidence, rationale, and supporting metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDecision {
    /// Selected layout mode
    pub layout: LayoutMode,
    /// Constant confidence attached to the matched rule, in [0, 1]
    pub confidence: f64,
    /// Human-readable rationale for the choice
    pub reasoning: String,
    /// The metrics the decision was made on, for caller-side auditing
    pub metrics: GraphMetrics,
}

/// Stateless layout classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutClassifier;

impl LayoutClassifier {
    /// Create new classifier
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Select a layout for a task spec
    ///
    /// Builds the dependency graph, derives [`GraphMetrics`], and applies
    /// the rules below in order; the first match wins:
    ///
    /// 1. heavy, branching dependencies → relationship graph (0.90)
    /// 2. a single linear chain → sequential timeline (0.85)
    /// 3. duration estimates over many tasks → sequential timeline (0.80)
    /// 4. light dependencies → relationship graph (0.70)
    /// 5. many tasks with no dependencies → status board (0.75)
    /// 6. anything else, the empty spec included → status board (0.80)
    #[must_use]
    pub fn classify(&self, spec: &TaskSpec) -> LayoutDecision {
        let metrics = GraphMetrics::compute(spec);
        let decision = Self::decide(metrics);
        debug!(
            layout = %decision.layout,
            confidence = decision.confidence,
            summary = %metrics.summary(),
            "layout selected"
        );
        decision
    }

    fn decide(metrics: GraphMetrics) -> LayoutDecision {
        let (layout, confidence, reasoning) = if metrics.dependency_count > 5
            && metrics.has_branching
        {
            (
                LayoutMode::RelationshipGraph,
                0.90,
                format!(
                    "{} dependencies with branching paths are clearest as a relationship graph",
                    metrics.dependency_count
                ),
            )
        } else if metrics.is_linear && metrics.dependency_count > 0 {
            (
                LayoutMode::Timeline,
                0.85,
                "tasks form one linear chain, which reads naturally as a sequential timeline"
                    .to_string(),
            )
        } else if metrics.has_timelines && metrics.task_count > 10 {
            (
                LayoutMode::Timeline,
                0.80,
                format!(
                    "duration estimates across {} tasks favor a sequential timeline",
                    metrics.task_count
                ),
            )
        } else if metrics.dependency_count > 0 && metrics.dependency_count <= 5 {
            (
                LayoutMode::RelationshipGraph,
                0.70,
                format!(
                    "a light dependency structure ({} edges) still shows best as a relationship graph",
                    metrics.dependency_count
                ),
            )
        } else if metrics.task_count > 20 && metrics.dependency_count == 0 {
            (
                LayoutMode::StatusBoard,
                0.75,
                format!(
                    "{} independent tasks group best on a status board",
                    metrics.task_count
                ),
            )
        } else {
            (
                LayoutMode::StatusBoard,
                0.80,
                format!(
                    "{} tasks with no stronger structural signal; defaulting to a grouped status board",
                    metrics.task_count
                ),
            )
        };

        LayoutDecision {
            layout,
            confidence,
            reasoning,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn classify(spec: &TaskSpec) -> LayoutDecision {
        LayoutClassifier::new().classify(spec)
    }

    #[test]
    fn empty_spec_hits_default_rule() {
        let decision = classify(&TaskSpec::new());
        assert_eq!(decision.layout, LayoutMode::StatusBoard);
        assert!((decision.confidence - 0.80).abs() < f64::EPSILON);
        assert_eq!(decision.metrics.task_count, 0);
    }

    #[test]
    fn heavy_branching_selects_relationship_graph() {
        // One hub with six dependents: 6 edges, branching.
        let mut spec = TaskSpec::new().with_task(Task::new("work", "hub"));
        for i in 0..6 {
            spec = spec.with_task(Task::new("work", format!("leaf {i}")).depends_on("hub"));
        }
        let decision = classify(&spec);
        assert_eq!(decision.layout, LayoutMode::RelationshipGraph);
        assert!((decision.confidence - 0.90).abs() < f64::EPSILON);
        assert!(decision.reasoning.contains("6 dependencies"));
    }

    #[test]
    fn linear_chain_selects_timeline() {
        let spec = TaskSpec::new()
            .with_task(Task::new("work", "a"))
            .with_task(Task::new("work", "b").depends_on("a"))
            .with_task(Task::new("work", "c").depends_on("b"));
        let decision = classify(&spec);
        assert_eq!(decision.layout, LayoutMode::Timeline);
        assert!((decision.confidence - 0.85).abs() < f64::EPSILON);
        assert!(decision.metrics.is_linear);
        assert!(!decision.metrics.has_branching);
    }

    #[test]
    fn estimates_over_many_tasks_select_timeline() {
        let mut spec = TaskSpec::new();
        for i in 0..11 {
            spec = spec.with_task(Task::new("work", format!("task {i}")).with_estimate(1.0));
        }
        let decision = classify(&spec);
        assert_eq!(decision.layout, LayoutMode::Timeline);
        assert!((decision.confidence - 0.80).abs() < f64::EPSILON);
        assert!(decision.reasoning.contains("duration estimates"));
    }

    #[test]
    fn light_fan_out_selects_relationship_graph_at_lower_confidence() {
        // B, C, D all depend on A: 3 edges, branching, under the heavy
        // threshold, so the light-dependency rule fires instead.
        let spec = TaskSpec::new()
            .with_task(Task::new("work", "A"))
            .with_task(Task::new("work", "B").depends_on("A"))
            .with_task(Task::new("work", "C").depends_on("A"))
            .with_task(Task::new("work", "D").depends_on("A"));
        let decision = classify(&spec);
        assert_eq!(decision.layout, LayoutMode::RelationshipGraph);
        assert!((decision.confidence - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn many_independent_tasks_select_status_board() {
        let mut spec = TaskSpec::new();
        for i in 0..21 {
            spec = spec.with_task(Task::new("work", format!("task {i}")));
        }
        let decision = classify(&spec);
        assert_eq!(decision.layout, LayoutMode::StatusBoard);
        assert!((decision.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn few_independent_tasks_fall_through_to_default() {
        let spec = TaskSpec::new()
            .with_task(Task::new("work", "a"))
            .with_task(Task::new("work", "b"));
        let decision = classify(&spec);
        assert_eq!(decision.layout, LayoutMode::StatusBoard);
        assert!((decision.confidence - 0.80).abs() < f64::EPSILON);
    }

    #[test]
    fn decision_serializes_with_wire_names() {
        let json = serde_json::to_value(classify(&TaskSpec::new())).unwrap();
        assert_eq!(json["layout"], "grouped-status-board");
        assert!(json["metrics"]["taskCount"].is_number());
    }

    #[test]
    fn linear_rule_outranks_estimate_rule() {
        // A long estimated chain is still a chain.
        let mut spec = TaskSpec::new().with_task(Task::new("work", "step 0").with_estimate(1.0));
        for i in 1..12 {
            spec = spec.with_task(
                Task::new("work", format!("step {i}"))
                    .depends_on(format!("step {}", i - 1))
                    .with_estimate(1.0),
            );
        }
        let decision = classify(&spec);
        assert_eq!(decision.layout, LayoutMode::Timeline);
        assert!((decision.confidence - 0.85).abs() < f64::EPSILON);
    }
}
