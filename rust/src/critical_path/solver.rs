//! Single-source longest paths by max-priority relaxation.
//!
//! A max-heap variant of Dijkstra's procedure. It relies on the graph being
//! acyclic and every weight being non-negative, both of which the driver
//! checks before a run. `BinaryHeap` has no increase-key, so improved tasks
//! are pushed again and outdated entries are skipped when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::DependencyView;
use crate::interner::TaskIdx;
use crate::log_debug;

use super::error::CriticalPathError;

/// Limits and logging for one solver run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverOptions {
    /// Abort once this many relaxations have been made.
    pub max_relaxations: Option<u64>,
    pub verbosity: u8,
}

/// Counters collected during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub pops: u64,
    pub stale_skips: u64,
    pub relaxations: u64,
}

/// Best known distance from one source to every node.
///
/// `None` marks a node the source cannot reach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    source: TaskIdx,
    distances: Vec<Option<u64>>,
    stats: SolverStats,
}

impl DistanceTable {
    pub fn source(&self) -> TaskIdx {
        self.source
    }

    #[inline]
    pub fn get(&self, node: TaskIdx) -> Option<u64> {
        self.distances.get(node as usize).copied().flatten()
    }

    pub fn is_reached(&self, node: TaskIdx) -> bool {
        self.get(node).is_some()
    }

    /// Reached nodes and their distance, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskIdx, u64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (i as TaskIdx, d)))
    }

    /// Number of nodes covered by the table, reached or not.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }
}

/// Heap entry ordered by distance; equal distances pop the lower index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueEntry {
    distance: u64,
    node: TaskIdx,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Longest distance from `source` to every node of `view`.
///
/// The source itself sits at distance 0; each edge adds its weight.
pub fn longest_paths<V: DependencyView>(
    view: &V,
    source: TaskIdx,
) -> Result<DistanceTable, CriticalPathError> {
    longest_paths_with(view, source, &SolverOptions::default())
}

/// Same as [`longest_paths`], with a relaxation budget and logging.
pub fn longest_paths_with<V: DependencyView>(
    view: &V,
    source: TaskIdx,
    options: &SolverOptions,
) -> Result<DistanceTable, CriticalPathError> {
    let n = view.node_count();
    if source as usize >= n {
        return Err(CriticalPathError::UnknownSource(source.to_string()));
    }

    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut stats = SolverStats::default();
    let mut heap = BinaryHeap::with_capacity(n);

    distances[source as usize] = Some(0);
    heap.push(QueueEntry {
        distance: 0,
        node: source,
    });

    while let Some(QueueEntry { distance, node }) = heap.pop() {
        stats.pops += 1;
        if distances[node as usize] != Some(distance) {
            stats.stale_skips += 1;
            continue;
        }

        for &(next, weight) in view.successors(node) {
            let candidate = distance.saturating_add(weight);
            let slot = &mut distances[next as usize];
            if slot.map_or(true, |known| known < candidate) {
                stats.relaxations += 1;
                if let Some(limit) = options.max_relaxations {
                    if stats.relaxations > limit {
                        return Err(CriticalPathError::RelaxationLimitExceeded(limit));
                    }
                }
                *slot = Some(candidate);
                heap.push(QueueEntry {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    log_debug!(
        options.verbosity,
        "    solver[{}]: {} pops, {} stale, {} relaxations",
        source,
        stats.pops,
        stats.stale_skips,
        stats.relaxations
    );

    Ok(DistanceTable {
        source,
        distances,
        stats,
    })
}
