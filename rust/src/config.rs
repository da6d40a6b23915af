//! Configuration types for the critical path driver.

use pyo3::prelude::*;
use std::str::FromStr;

use crate::critical_path::CriticalPathError;

/// How the driver explores multiple entry tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One solver run per source task; the longest run wins.
    #[default]
    MultiSource,
    /// A single run from a phantom node wired into every source task.
    SuperSource,
}

impl FromStr for Strategy {
    type Err = CriticalPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multi_source" => Ok(Self::MultiSource),
            "super_source" => Ok(Self::SuperSource),
            other => Err(CriticalPathError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Configuration for critical path computation.
#[pyclass]
#[derive(Clone, Debug)]
pub struct CriticalPathConfig {
    /// Driver strategy: "multi_source" or "super_source"
    #[pyo3(get, set)]
    pub strategy: String,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Abort a solver run after this many relaxations (None = unlimited).
    #[pyo3(get, set)]
    pub max_relaxations: Option<u64>,
}

impl Default for CriticalPathConfig {
    fn default() -> Self {
        Self {
            strategy: "multi_source".to_string(),
            verbosity: 0,
            max_relaxations: None,
        }
    }
}

impl CriticalPathConfig {
    /// Parse the configured strategy name.
    pub fn strategy(&self) -> Result<Strategy, CriticalPathError> {
        self.strategy.parse()
    }
}

#[pymethods]
impl CriticalPathConfig {
    #[new]
    #[pyo3(signature = (strategy=None, verbosity=None, max_relaxations=None))]
    fn new(strategy: Option<String>, verbosity: Option<u8>, max_relaxations: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            strategy: strategy.unwrap_or(defaults.strategy),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            max_relaxations,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CriticalPathConfig(strategy={:?}, verbosity={}, max_relaxations={:?})",
            self.strategy, self.verbosity, self.max_relaxations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CriticalPathConfig::default();
        assert_eq!(config.strategy().unwrap(), Strategy::MultiSource);
        assert_eq!(config.verbosity, 0);
        assert!(config.max_relaxations.is_none());
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("super_source".parse::<Strategy>().unwrap(), Strategy::SuperSource);
        assert!(matches!(
            "longest".parse::<Strategy>(),
            Err(CriticalPathError::UnknownStrategy(s)) if s == "longest"
        ));
    }
}
