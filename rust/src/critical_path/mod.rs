//! Critical path computation.
//!
//! The solver produces longest distances from one source, the reconstructor
//! turns a distance table into an ordered chain, and the driver validates the
//! graph and picks the longest chain over all entry tasks.

mod driver;
mod error;
mod reconstruct;
mod solver;

pub use driver::{find_critical_path, validate};
pub use error::CriticalPathError;
pub use reconstruct::{reconstruct, CriticalPath};
pub use solver::{longest_paths, longest_paths_with, DistanceTable, SolverOptions, SolverStats};
