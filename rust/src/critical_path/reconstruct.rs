//! Critical path recovery from a distance table.

use crate::graph::{DependencyView, TaskGraph};
use crate::interner::TaskIdx;
use crate::models::CriticalPathReport;

use super::solver::DistanceTable;

/// An ordered chain of tasks and its total duration.
///
/// `total_duration` counts every task on the chain, the first one included:
/// it is the entry weight of the first task plus the weights of all edges
/// along the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriticalPath {
    tasks: Vec<TaskIdx>,
    total_duration: u64,
}

impl CriticalPath {
    /// Tasks from the entry task to the final task.
    pub fn tasks(&self) -> &[TaskIdx] {
        &self.tasks
    }

    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn start(&self) -> Option<TaskIdx> {
        self.tasks.first().copied()
    }

    pub fn end(&self) -> Option<TaskIdx> {
        self.tasks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of dependency edges walked: one less than the task count.
    pub fn edge_count(&self) -> usize {
        self.tasks.len().saturating_sub(1)
    }

    pub fn codes(&self, graph: &TaskGraph) -> Vec<String> {
        self.tasks
            .iter()
            .filter_map(|&t| graph.code(t).map(str::to_string))
            .collect()
    }

    pub fn names(&self, graph: &TaskGraph) -> Vec<String> {
        self.tasks
            .iter()
            .filter_map(|&t| graph.task(t).map(|task| task.name.clone()))
            .collect()
    }

    pub fn to_report(&self, graph: &TaskGraph) -> CriticalPathReport {
        CriticalPathReport {
            codes: self.codes(graph),
            names: self.names(graph),
            total_duration: self.total_duration,
        }
    }

    /// Drop a leading node that does not belong to the task graph.
    pub(super) fn strip_leading(&mut self, node: TaskIdx) {
        if self.start() == Some(node) {
            self.tasks.remove(0);
        }
    }
}

/// Walk back from the farthest node of `distances` to the run's source.
///
/// Among the farthest nodes, one without successors ends the path, lowest
/// index first. Zero-duration successors of a farthest node are themselves
/// farthest, so such a node always exists. At each step back the first
/// predecessor edge (in registration order) that accounts for the distance
/// is taken.
pub fn reconstruct<V: DependencyView>(view: &V, distances: &DistanceTable) -> CriticalPath {
    let is_sink = |node: TaskIdx| view.successors(node).is_empty();
    let (end, span) = distances
        .iter()
        .fold(None, |best: Option<(TaskIdx, u64)>, (node, dist)| match best {
            Some((best_node, best_dist))
                if best_dist > dist
                    || (best_dist == dist && (is_sink(best_node) || !is_sink(node))) =>
            {
                best
            }
            _ => Some((node, dist)),
        })
        .unwrap_or((distances.source(), 0));

    let mut tasks = vec![end];
    let mut current = end;

    // A DAG never revisits a node; the bound only matters for a cyclic view
    // with zero-weight edges.
    while tasks.len() <= view.node_count() {
        let Some(current_dist) = distances.get(current) else {
            break;
        };
        let step = view.predecessors(current).iter().find(|&&(pred, weight)| {
            distances
                .get(pred)
                .is_some_and(|d| d.saturating_add(weight) == current_dist)
        });
        match step {
            Some(&(pred, _)) => {
                tasks.push(pred);
                current = pred;
            }
            None => break,
        }
    }

    tasks.reverse();
    CriticalPath {
        tasks,
        total_duration: view.entry_weight(current).saturating_add(span),
    }
}
