//! Boundary data types shared with the Python loader and presenter.

use pyo3::prelude::*;

/// One input row: a task and the codes of the tasks it depends on.
#[pyclass]
#[derive(Clone, Debug)]
pub struct TaskRecord {
    #[pyo3(get, set)]
    pub code: String,
    #[pyo3(get, set)]
    pub name: String,
    /// Signed so that negative input can be rejected rather than wrapped.
    #[pyo3(get, set)]
    pub duration: i64,
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

impl TaskRecord {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        duration: i64,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            duration,
            dependencies,
        }
    }
}

#[pymethods]
impl TaskRecord {
    #[new]
    #[pyo3(signature = (code, name, duration, dependencies=None))]
    fn py_new(code: String, name: String, duration: i64, dependencies: Option<Vec<String>>) -> Self {
        Self::new(code, name, duration, dependencies.unwrap_or_default())
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskRecord(code={:?}, name={:?}, duration={}, deps={:?})",
            self.code, self.name, self.duration, self.dependencies
        )
    }
}

/// The critical path as handed to a presenter.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPathReport {
    /// Task codes from the entry task to the final task.
    #[pyo3(get)]
    pub codes: Vec<String>,
    /// Display names, parallel to `codes`.
    #[pyo3(get)]
    pub names: Vec<String>,
    #[pyo3(get)]
    pub total_duration: u64,
}

#[pymethods]
impl CriticalPathReport {
    fn __len__(&self) -> usize {
        self.codes.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "CriticalPathReport(codes={:?}, total_duration={})",
            self.codes, self.total_duration
        )
    }
}
