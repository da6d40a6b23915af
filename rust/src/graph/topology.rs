//! Acyclicity check via Kahn's algorithm.

use std::collections::VecDeque;

use crate::interner::TaskIdx;

use super::task_graph::{GraphError, TaskGraph};

/// Order tasks so every predecessor comes before its successors.
///
/// Tasks left with a non-zero in-degree once all entry tasks and their
/// descendants are stripped sit on (or behind) a cycle; their codes are
/// returned in `GraphError::CyclicGraph`, in registration order.
pub fn topological_order(graph: &TaskGraph) -> Result<Vec<TaskIdx>, GraphError> {
    let n = graph.len();
    let mut in_degree: Vec<usize> = (0..n as TaskIdx).map(|t| graph.in_degree(t)).collect();

    let mut queue: VecDeque<TaskIdx> = (0..n as TaskIdx)
        .filter(|&t| in_degree[t as usize] == 0)
        .collect();

    let mut order: Vec<TaskIdx> = Vec::with_capacity(n);

    while let Some(task) = queue.pop_front() {
        order.push(task);
        for (next, _) in graph.neighbors(task) {
            let degree = &mut in_degree[next as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() != n {
        let residual = (0..n as TaskIdx)
            .filter(|&t| in_degree[t as usize] > 0)
            .filter_map(|t| graph.code(t).map(str::to_string))
            .collect();
        return Err(GraphError::CyclicGraph(residual));
    }

    Ok(order)
}
