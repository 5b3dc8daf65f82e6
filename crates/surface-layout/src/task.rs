//! Task model
//!
//! The classifier's input: a flat list of tasks, each optionally depending
//! on others, plus an optional global dependency map. Wire field names
//! (`dependsOn`, `estimatedHours`) match the surrounding message protocol.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One unit of work submitted to the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Grouping category (e.g. a tracker column)
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Stable identifier; preferred over the description as the identity key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identity keys of the tasks this one depends on
    #[serde(rename = "dependsOn", default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Estimated duration in hours
    #[serde(
        rename = "estimatedHours",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_hours: Option<f64>,
    /// Priority label, passed through unvalidated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl Task {
    /// Create new task
    #[inline]
    #[must_use]
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            id: None,
            depends_on: Vec::new(),
            estimated_hours: None,
            priority: None,
        }
    }

    /// With a stable identifier
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// With a dependency on another task's identity key
    #[inline]
    #[must_use]
    pub fn depends_on(mut self, identity: impl Into<String>) -> Self {
        self.depends_on.push(identity.into());
        self
    }

    /// With a duration estimate in hours
    #[inline]
    #[must_use]
    pub fn with_estimate(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// With a priority label
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Identity key used for graph-building
    ///
    /// The explicit `id` when present, otherwise the full description. The
    /// full text is used rather than a truncated prefix so two tasks whose
    /// descriptions merely share an opening cannot collide.
    #[inline]
    #[must_use]
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.description)
    }
}

/// A task list plus an optional global dependency map
///
/// Map entries read `identity -> [identities it depends on]`, the same
/// orientation as each task's `dependsOn`. A `BTreeMap` keeps iteration, and
/// therefore edge order, deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Tasks, in submission order
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Global dependency map, merged after the per-task declarations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, Vec<String>>,
}

impl TaskSpec {
    /// Create new empty spec
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a task appended
    #[inline]
    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// With a global dependency entry
    #[inline]
    #[must_use]
    pub fn with_dependency(
        mut self,
        identity: impl Into<String>,
        depends_on: impl Into<String>,
    ) -> Self {
        self.dependencies
            .entry(identity.into())
            .or_default()
            .push(depends_on.into());
        self
    }
}
