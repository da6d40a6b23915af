//! Project-level critical path: validation plus the multi-source driver.

use crate::config::{CriticalPathConfig, Strategy};
use crate::graph::{topological_order, GraphError, SuperSourceView, TaskGraph};
use crate::interner::TaskIdx;
use crate::{log_changes, log_checks};

use super::error::CriticalPathError;
use super::reconstruct::{reconstruct, CriticalPath};
use super::solver::{longest_paths_with, SolverOptions};

/// Check that `graph` can be solved and return its entry tasks.
///
/// Fails on an empty graph and on a graph with a cycle anywhere, including
/// behind a valid entry task. A cycle is reported even when it leaves the
/// graph without any entry task.
pub fn validate(graph: &TaskGraph) -> Result<Vec<TaskIdx>, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    topological_order(graph)?;
    graph.source_tasks()
}

/// Find the project's critical path.
///
/// With several entry tasks the longest single chain wins; chains from
/// disconnected parts of the graph are never merged. On equal totals the
/// chain found first is kept (lowest entry task for `MultiSource`).
pub fn find_critical_path(
    graph: &TaskGraph,
    config: &CriticalPathConfig,
) -> Result<CriticalPath, CriticalPathError> {
    let strategy = config.strategy()?;
    let sources = validate(graph)?;

    log_checks!(
        config.verbosity,
        "Critical path: {} tasks, {} edges, {} entry tasks, {} final tasks",
        graph.len(),
        graph.edge_count(),
        sources.len(),
        graph.sink_tasks().len()
    );

    let options = SolverOptions {
        max_relaxations: config.max_relaxations,
        verbosity: config.verbosity,
    };

    let path = match strategy {
        Strategy::MultiSource => multi_source(graph, &sources, &options)?,
        Strategy::SuperSource => super_source(graph, &sources, &options)?,
    };

    log_changes!(
        config.verbosity,
        "Critical path ({:?}): {} = {}",
        strategy,
        path.codes(graph).join(" -> "),
        path.total_duration()
    );

    Ok(path)
}

/// One run per entry task, keeping the strictly longest.
fn multi_source(
    graph: &TaskGraph,
    sources: &[TaskIdx],
    options: &SolverOptions,
) -> Result<CriticalPath, CriticalPathError> {
    let mut best: Option<CriticalPath> = None;

    for &source in sources {
        let distances = longest_paths_with(graph, source, options)?;
        let candidate = reconstruct(graph, &distances);

        log_checks!(
            options.verbosity,
            "  from {}: {} ({} tasks)",
            graph.code(source).unwrap_or("?"),
            candidate.total_duration(),
            candidate.len()
        );

        let is_better = best
            .as_ref()
            .map_or(true, |b| candidate.total_duration() > b.total_duration());
        if is_better {
            best = Some(candidate);
        }
    }

    // `validate` guarantees at least one entry task.
    debug_assert!(!sources.is_empty());
    best.ok_or(CriticalPathError::Graph(GraphError::NoSource))
}

/// A single run from a phantom node wired into every entry task.
fn super_source(
    graph: &TaskGraph,
    sources: &[TaskIdx],
    options: &SolverOptions,
) -> Result<CriticalPath, CriticalPathError> {
    let view = SuperSourceView::new(graph, sources);
    let distances = longest_paths_with(&view, view.phantom(), options)?;
    let mut path = reconstruct(&view, &distances);
    path.strip_leading(view.phantom());
    Ok(path)
}
