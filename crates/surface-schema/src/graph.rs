//! Shared graph utilities
//!
//! Both the structural validator and the layout classifier work over the same
//! shape of data: string-keyed nodes with directed references to other nodes.
//! This module holds the adjacency plumbing they share: building the map,
//! probing for cycles, finding roots, and measuring chain depth.

use std::collections::{HashMap, HashSet};

/// Directed adjacency: node id to the ids it points at
pub type Adjacency = HashMap<String, Vec<String>>;

/// Build an adjacency map from `(id, targets)` pairs
///
/// Later pairs for the same id extend its target list; duplicate targets are
/// kept as-is.
#[must_use]
pub fn adjacency_of<'a, I>(entries: I) -> Adjacency
where
    I: IntoIterator<Item = (&'a str, &'a [String])>,
{
    let mut adjacency = Adjacency::new();
    for (id, targets) in entries {
        adjacency
            .entry(id.to_string())
            .or_default()
            .extend(targets.iter().cloned());
    }
    adjacency
}

/// Probe for a cycle reachable from `start`
///
/// Iterative depth-first traversal with explicit backtracking: a node is on
/// the current path between its enter and leave steps, and meeting it again
/// while on-path closes a cycle. Returns the id at which the cycle was
/// detected, or `None` when everything reachable from `start` is acyclic.
/// Diamond-shaped sharing (two paths converging on one node) is not a cycle.
#[must_use]
pub fn find_cycle_from<'a>(start: &'a str, adjacency: &'a Adjacency) -> Option<String> {
    enum Step<'s> {
        Enter(&'s str),
        Leave(&'s str),
    }

    let mut on_path: HashSet<&str> = HashSet::new();
    let mut finished: HashSet<&str> = HashSet::new();
    let mut stack = vec![Step::Enter(start)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id) => {
                if on_path.contains(id) {
                    return Some(id.to_string());
                }
                if finished.contains(id) {
                    continue;
                }
                on_path.insert(id);
                stack.push(Step::Leave(id));
                if let Some(targets) = adjacency.get(id) {
                    for target in targets {
                        stack.push(Step::Enter(target));
                    }
                }
            }
            Step::Leave(id) => {
                on_path.remove(id);
                finished.insert(id);
            }
        }
    }
    None
}

/// Ids from `nodes` with no incoming edge in `adjacency`
#[must_use]
pub fn roots_of<'a, I>(nodes: I, adjacency: &Adjacency) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut has_incoming: HashSet<&str> = HashSet::new();
    for targets in adjacency.values() {
        for target in targets {
            has_incoming.insert(target);
        }
    }
    nodes
        .into_iter()
        .filter(|id| !has_incoming.contains(id))
        .map(String::from)
        .collect()
}

/// Longest chain (edge count) reachable from `root` without revisiting
///
/// Each node is descended at most once per walk, so the traversal
/// terminates even on cyclic input. This makes the result a revisit-free
/// approximation, not an exact longest path: when branches converge, a
/// shared suffix reached first via a shorter branch is not re-walked from
/// the longer one, which can undercount the true maximum even on a DAG.
#[must_use]
pub fn longest_depth_from(root: &str, adjacency: &Adjacency) -> usize {
    fn walk<'a>(id: &'a str, adjacency: &'a Adjacency, visited: &mut HashSet<&'a str>) -> usize {
        if !visited.insert(id) {
            return 0;
        }
        let mut best = 0;
        if let Some(targets) = adjacency.get(id) {
            for target in targets {
                best = best.max(1 + walk(target, adjacency, visited));
            }
        }
        best
    }

    let mut visited = HashSet::new();
    walk(root, adjacency, &mut visited)
}
