//! Task graph: tasks, weighted dependency edges and structural validation.
//!
//! The graph is built once from loader records and is read-only afterwards.
//! Acyclicity is not checked per insertion; call [`topological_order`] (the
//! driver does) before solving.

mod task_graph;
mod topology;
mod view;

pub use task_graph::{GraphError, Task, TaskGraph};
pub use topology::topological_order;
pub use view::{DependencyView, SuperSourceView};
