//! Task graph construction and adjacency queries.

use thiserror::Error;

use crate::interner::{CodeInterner, TaskIdx};
use crate::models::TaskRecord;

/// Errors raised while building or validating a task graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Task already registered: {0}")]
    DuplicateTask(String),
    #[error("Unknown task: {0}")]
    UnknownTask(String),
    #[error("Task {code} has negative duration {duration}")]
    InvalidDuration { code: String, duration: i64 },
    #[error("Task graph is empty")]
    EmptyGraph,
    #[error("Every task has a predecessor; the graph has no entry task")]
    NoSource,
    #[error("Circular dependency detected among tasks: {0:?}")]
    CyclicGraph(Vec<String>),
}

/// A registered task. Immutable once added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub code: String,
    pub name: String,
    pub duration: u64,
}

/// Tasks plus weighted dependency edges.
///
/// An edge `pred -> succ` weighs `succ`'s duration: path lengths accumulate
/// the time spent in each task entered along the way. Adjacency lists keep
/// edge registration order, which is the tie-break order everywhere else.
#[derive(Clone, Debug, Default)]
pub struct TaskGraph {
    codes: CodeInterner,
    tasks: Vec<Task>,
    successors: Vec<Vec<(TaskIdx, u64)>>,
    predecessors: Vec<Vec<(TaskIdx, u64)>>,
    edges: Vec<(TaskIdx, TaskIdx)>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            codes: CodeInterner::with_capacity(capacity),
            tasks: Vec::with_capacity(capacity),
            successors: Vec::with_capacity(capacity),
            predecessors: Vec::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Build a graph from loader records.
    ///
    /// All tasks are registered before any dependency is wired, so a record
    /// may name a task that appears later in the batch. Dependency codes are
    /// trimmed and blank ones are ignored.
    pub fn from_records(records: &[TaskRecord]) -> Result<Self, GraphError> {
        let mut graph = Self::with_capacity(records.len());
        for record in records {
            graph.add_task(record.code.trim(), &record.name, record.duration)?;
        }
        for record in records {
            for dep in &record.dependencies {
                let dep = dep.trim();
                if dep.is_empty() {
                    continue;
                }
                graph.add_dependency(dep, record.code.trim())?;
            }
        }
        Ok(graph)
    }

    /// Register a task under a unique code.
    pub fn add_task(&mut self, code: &str, name: &str, duration: i64) -> Result<TaskIdx, GraphError> {
        let duration = u64::try_from(duration).map_err(|_| GraphError::InvalidDuration {
            code: code.to_string(),
            duration,
        })?;
        let idx = self
            .codes
            .insert_new(code)
            .ok_or_else(|| GraphError::DuplicateTask(code.to_string()))?;

        self.tasks.push(Task {
            code: code.to_string(),
            name: name.to_string(),
            duration,
        });
        self.successors.push(Vec::new());
        self.predecessors.push(Vec::new());
        Ok(idx)
    }

    /// Register `predecessor -> successor`, weighted by the successor's duration.
    pub fn add_dependency(&mut self, predecessor: &str, successor: &str) -> Result<(), GraphError> {
        let pred = self.require(predecessor)?;
        let succ = self.require(successor)?;
        let weight = self.tasks[succ as usize].duration;

        self.successors[pred as usize].push((succ, weight));
        self.predecessors[succ as usize].push((pred, weight));
        self.edges.push((pred, succ));
        Ok(())
    }

    fn require(&self, code: &str) -> Result<TaskIdx, GraphError> {
        self.codes
            .get(code)
            .ok_or_else(|| GraphError::UnknownTask(code.to_string()))
    }

    /// Tasks with no incoming edge, in registration order.
    ///
    /// An empty graph yields an empty list; a non-empty graph without any
    /// entry task is reported as `NoSource`.
    pub fn source_tasks(&self) -> Result<Vec<TaskIdx>, GraphError> {
        let sources: Vec<TaskIdx> = self.indices().filter(|&t| self.in_degree(t) == 0).collect();
        if sources.is_empty() && !self.is_empty() {
            return Err(GraphError::NoSource);
        }
        Ok(sources)
    }

    /// Tasks with no outgoing edge, in registration order.
    pub fn sink_tasks(&self) -> Vec<TaskIdx> {
        self.indices().filter(|&t| self.out_degree(t) == 0).collect()
    }

    /// Outgoing `(successor, weight)` pairs in edge registration order.
    pub fn neighbors(&self, task: TaskIdx) -> impl Iterator<Item = (TaskIdx, u64)> + '_ {
        self.successor_slice(task).iter().copied()
    }

    /// Incoming `(predecessor, weight)` pairs in edge registration order.
    pub fn predecessors(&self, task: TaskIdx) -> impl Iterator<Item = (TaskIdx, u64)> + '_ {
        self.predecessor_slice(task).iter().copied()
    }

    pub(crate) fn successor_slice(&self, task: TaskIdx) -> &[(TaskIdx, u64)] {
        self.successors.get(task as usize).map_or(&[], |s| s.as_slice())
    }

    pub(crate) fn predecessor_slice(&self, task: TaskIdx) -> &[(TaskIdx, u64)] {
        self.predecessors.get(task as usize).map_or(&[], |p| p.as_slice())
    }

    pub fn in_degree(&self, task: TaskIdx) -> usize {
        self.predecessor_slice(task).len()
    }

    pub fn out_degree(&self, task: TaskIdx) -> usize {
        self.successor_slice(task).len()
    }

    pub fn task(&self, task: TaskIdx) -> Option<&Task> {
        self.tasks.get(task as usize)
    }

    pub fn index_of(&self, code: &str) -> Option<TaskIdx> {
        self.codes.get(code)
    }

    pub fn code(&self, task: TaskIdx) -> Option<&str> {
        self.codes.resolve(task)
    }

    /// Duration of a task, 0 for an index that was never registered.
    pub fn duration(&self, task: TaskIdx) -> u64 {
        self.task(task).map_or(0, |t| t.duration)
    }

    /// All tasks with their index, in registration order.
    pub fn tasks(&self) -> impl Iterator<Item = (TaskIdx, &Task)> + '_ {
        self.tasks.iter().enumerate().map(|(i, t)| (i as TaskIdx, t))
    }

    /// All edges as `(predecessor, successor, weight)` in registration order.
    pub fn edges(&self) -> impl Iterator<Item = (TaskIdx, TaskIdx, u64)> + '_ {
        self.edges
            .iter()
            .map(|&(pred, succ)| (pred, succ, self.duration(succ)))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn indices(&self) -> impl Iterator<Item = TaskIdx> {
        0..self.tasks.len() as TaskIdx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(code: &str, duration: i64, deps: &[&str]) -> TaskRecord {
        TaskRecord::new(
            code,
            format!("Task {code}"),
            duration,
            deps.iter().map(|d| d.to_string()).collect(),
        )
    }

    #[test]
    fn test_edge_weight_is_successor_duration() {
        let mut graph = TaskGraph::new();
        let a = graph.add_task("A", "Design", 2).unwrap();
        let b = graph.add_task("B", "Build", 3).unwrap();
        graph.add_dependency("A", "B").unwrap();

        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![(b, 3)]);
        assert_eq!(graph.predecessors(b).collect::<Vec<_>>(), vec![(a, 3)]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(a, b, 3)]);
    }

    #[test]
    fn test_duplicate_task_rejected() {
        let mut graph = TaskGraph::new();
        graph.add_task("A", "first", 1).unwrap();
        assert_eq!(
            graph.add_task("A", "second", 4),
            Err(GraphError::DuplicateTask("A".to_string()))
        );
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.task(0).unwrap().name, "first");
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let mut graph = TaskGraph::new();
        graph.add_task("A", "a", 1).unwrap();
        assert_eq!(
            graph.add_dependency("A", "Z"),
            Err(GraphError::UnknownTask("Z".to_string()))
        );
        assert_eq!(
            graph.add_dependency("Q", "A"),
            Err(GraphError::UnknownTask("Q".to_string()))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let mut graph = TaskGraph::new();
        assert_eq!(
            graph.add_task("A", "a", -1),
            Err(GraphError::InvalidDuration {
                code: "A".to_string(),
                duration: -1
            })
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn test_from_records_allows_forward_references() {
        let records = vec![
            make_record("B", 3, &["A"]),
            make_record("A", 2, &[]),
            make_record("C", 1, &[" A ", "", "B"]),
        ];
        let graph = TaskGraph::from_records(&records).unwrap();

        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();
        let c = graph.index_of("C").unwrap();
        assert_eq!(graph.source_tasks().unwrap(), vec![a]);
        assert_eq!(graph.sink_tasks(), vec![c]);
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![(b, 3), (c, 1)]);
    }

    #[test]
    fn test_from_records_unknown_dependency() {
        let records = vec![make_record("A", 2, &["MISSING"])];
        assert_eq!(
            TaskGraph::from_records(&records).unwrap_err(),
            GraphError::UnknownTask("MISSING".to_string())
        );
    }

    #[test]
    fn test_no_source_when_every_task_has_predecessor() {
        let records = vec![make_record("A", 1, &["B"]), make_record("B", 1, &["A"])];
        let graph = TaskGraph::from_records(&records).unwrap();
        assert_eq!(graph.source_tasks(), Err(GraphError::NoSource));
    }

    #[test]
    fn test_empty_graph_has_no_sources_but_no_error() {
        let graph = TaskGraph::new();
        assert_eq!(graph.source_tasks(), Ok(vec![]));
        assert!(graph.sink_tasks().is_empty());
    }

    #[test]
    fn test_neighbors_restartable() {
        let records = vec![
            make_record("A", 1, &[]),
            make_record("B", 1, &["A"]),
            make_record("C", 1, &["A"]),
        ];
        let graph = TaskGraph::from_records(&records).unwrap();
        let first: Vec<_> = graph.neighbors(0).collect();
        let second: Vec<_> = graph.neighbors(0).collect();
        assert_eq!(first, second);
        assert_eq!(graph.neighbors(42).count(), 0);
    }
}
