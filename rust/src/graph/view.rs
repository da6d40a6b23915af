//! Read-only adjacency views consumed by the solver and reconstructor.

use crate::interner::TaskIdx;

use super::task_graph::TaskGraph;

/// Weighted adjacency over dense node indices `0..node_count()`.
pub trait DependencyView {
    fn node_count(&self) -> usize;

    /// Outgoing `(successor, weight)` edges in registration order.
    fn successors(&self, node: TaskIdx) -> &[(TaskIdx, u64)];

    /// Incoming `(predecessor, weight)` edges in registration order.
    fn predecessors(&self, node: TaskIdx) -> &[(TaskIdx, u64)];

    /// Weight of entering `node` from outside the graph.
    ///
    /// A path starting at `node` is worth this much before its first edge.
    fn entry_weight(&self, node: TaskIdx) -> u64;
}

impl DependencyView for TaskGraph {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn successors(&self, node: TaskIdx) -> &[(TaskIdx, u64)] {
        self.successor_slice(node)
    }

    fn predecessors(&self, node: TaskIdx) -> &[(TaskIdx, u64)] {
        self.predecessor_slice(node)
    }

    fn entry_weight(&self, node: TaskIdx) -> u64 {
        self.duration(node)
    }
}

/// A task graph plus one phantom node with an edge into every entry task.
///
/// The phantom node gets index `graph.len()`. Its edges weigh the entry
/// task's duration, so a single run from the phantom node covers every
/// entry task at once.
pub struct SuperSourceView<'a> {
    graph: &'a TaskGraph,
    phantom: TaskIdx,
    entry_edges: Vec<(TaskIdx, u64)>,
    /// Per task: the phantom edge into it, if it is an entry task.
    phantom_in: Vec<Option<(TaskIdx, u64)>>,
}

impl<'a> SuperSourceView<'a> {
    pub fn new(graph: &'a TaskGraph, sources: &[TaskIdx]) -> Self {
        let phantom = graph.len() as TaskIdx;
        let mut phantom_in = vec![None; graph.len()];
        let entry_edges: Vec<(TaskIdx, u64)> = sources
            .iter()
            .map(|&s| (s, graph.duration(s)))
            .collect();
        for &(s, weight) in &entry_edges {
            if let Some(slot) = phantom_in.get_mut(s as usize) {
                *slot = Some((phantom, weight));
            }
        }
        Self {
            graph,
            phantom,
            entry_edges,
            phantom_in,
        }
    }

    pub fn phantom(&self) -> TaskIdx {
        self.phantom
    }
}

impl DependencyView for SuperSourceView<'_> {
    fn node_count(&self) -> usize {
        self.graph.len() + 1
    }

    fn successors(&self, node: TaskIdx) -> &[(TaskIdx, u64)] {
        if node == self.phantom {
            self.entry_edges.as_slice()
        } else {
            self.graph.successor_slice(node)
        }
    }

    fn predecessors(&self, node: TaskIdx) -> &[(TaskIdx, u64)] {
        match self.phantom_in.get(node as usize) {
            // Entry tasks have no real predecessors.
            Some(Some(edge)) => std::slice::from_ref(edge),
            Some(None) => self.graph.predecessor_slice(node),
            None => &[],
        }
    }

    fn entry_weight(&self, node: TaskIdx) -> u64 {
        if node == self.phantom {
            0
        } else {
            self.graph.duration(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_disconnected() -> TaskGraph {
        let mut graph = TaskGraph::new();
        graph.add_task("A", "a", 2).unwrap();
        graph.add_task("B", "b", 3).unwrap();
        graph.add_task("X", "x", 4).unwrap();
        graph.add_dependency("A", "B").unwrap();
        graph
    }

    #[test]
    fn test_task_graph_view_matches_graph() {
        let graph = make_disconnected();
        assert_eq!(DependencyView::node_count(&graph), 3);
        assert_eq!(DependencyView::successors(&graph, 0), &[(1, 3)]);
        assert_eq!(DependencyView::predecessors(&graph, 1), &[(0, 3)]);
        assert_eq!(graph.entry_weight(2), 4);
    }

    #[test]
    fn test_super_source_wires_every_entry_task() {
        let graph = make_disconnected();
        let sources = graph.source_tasks().unwrap();
        let view = SuperSourceView::new(&graph, &sources);

        let phantom = view.phantom();
        assert_eq!(phantom, 3);
        assert_eq!(view.node_count(), 4);
        assert_eq!(view.successors(phantom), &[(0, 2), (2, 4)]);
        assert_eq!(view.predecessors(0), &[(phantom, 2)]);
        assert_eq!(view.predecessors(1), &[(0, 3)]);
        assert!(view.predecessors(phantom).is_empty());
        assert_eq!(view.entry_weight(phantom), 0);
    }
}
