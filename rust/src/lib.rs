//! Critical Path Method over task dependency graphs.
//!
//! Tasks carry integer durations; an edge `pred -> succ` weighs `succ`'s
//! duration. The crate validates the graph, computes longest distances from
//! each entry task and reports the longest chain as the critical path.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use std::collections::HashMap;

mod config;
pub mod critical_path;
pub mod graph;
mod interner;
pub mod logging;
mod models;

pub use config::{CriticalPathConfig, Strategy};
pub use critical_path::{
    find_critical_path, longest_paths, longest_paths_with, reconstruct, validate, CriticalPath,
    CriticalPathError, DistanceTable, SolverOptions, SolverStats,
};
pub use graph::{DependencyView, GraphError, SuperSourceView, Task, TaskGraph};
pub use interner::{CodeInterner, TaskIdx};
pub use models::{CriticalPathReport, TaskRecord};

/// Compute the critical path of a project.
///
/// # Arguments
/// * `records` - Every task of the project with the codes it depends on
/// * `config` - Strategy, verbosity and solver budget (defaults if omitted)
///
/// # Returns
/// * CriticalPathReport with task codes, names and the total duration
///
/// # Raises
/// * ValueError on duplicate/unknown codes, negative durations, an empty
///   project, a project without entry task, or a circular dependency
#[pyfunction]
#[pyo3(name = "find_critical_path", signature = (records, config=None))]
fn py_find_critical_path(
    records: Vec<TaskRecord>,
    config: Option<CriticalPathConfig>,
) -> PyResult<CriticalPathReport> {
    let config = config.unwrap_or_default();
    let result = TaskGraph::from_records(&records)
        .map_err(CriticalPathError::from)
        .and_then(|graph| {
            find_critical_path(&graph, &config).map(|path| path.to_report(&graph))
        });

    match result {
        Ok(report) => Ok(report),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Longest distance from one task to every task it reaches.
///
/// The source maps to 0; unreachable tasks are left out.
///
/// # Raises
/// * ValueError if the graph is invalid or `source` is not a known code
#[pyfunction]
#[pyo3(name = "longest_paths")]
fn py_longest_paths(records: Vec<TaskRecord>, source: String) -> PyResult<HashMap<String, u64>> {
    match distances_from(&records, &source) {
        Ok(distances) => Ok(distances),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

fn distances_from(
    records: &[TaskRecord],
    source: &str,
) -> Result<HashMap<String, u64>, CriticalPathError> {
    let graph = TaskGraph::from_records(records)?;
    validate(&graph)?;
    let source_idx = graph
        .index_of(source)
        .ok_or_else(|| CriticalPathError::UnknownSource(source.to_string()))?;

    let table = longest_paths(&graph, source_idx)?;
    Ok(table
        .iter()
        .filter_map(|(task, dist)| graph.code(task).map(|code| (code.to_string(), dist)))
        .collect())
}

/// The cpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<TaskRecord>()?;
    m.add_class::<CriticalPathReport>()?;

    // Config types
    m.add_class::<CriticalPathConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_find_critical_path, m)?)?;
    m.add_function(wrap_pyfunction!(py_longest_paths, m)?)?;

    Ok(())
}
