use std::collections::BTreeSet;

use cpm_rust::{find_critical_path, CriticalPathConfig, TaskGraph, TaskRecord};
use proptest::prelude::*;

// Random DAG as loader records. Acyclic by construction: task N only
// depends on tasks 0..N-1.
fn dag_records_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<TaskRecord>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        (
            proptest::collection::vec(0i64..20, num_tasks),
            proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..4), num_tasks),
        )
            .prop_map(|(durations, raw_deps)| {
                durations
                    .into_iter()
                    .zip(raw_deps)
                    .enumerate()
                    .map(|(i, (duration, potential))| {
                        let deps: BTreeSet<usize> = if i == 0 {
                            BTreeSet::new()
                        } else {
                            potential.into_iter().map(|d| d % i).collect()
                        };
                        TaskRecord::new(
                            format!("T{i}"),
                            format!("task {i}"),
                            duration,
                            deps.into_iter().map(|d| format!("T{d}")).collect(),
                        )
                    })
                    .collect()
            })
    })
}

fn config(strategy: &str) -> CriticalPathConfig {
    CriticalPathConfig {
        strategy: strategy.to_string(),
        ..CriticalPathConfig::default()
    }
}

/// Longest chain by dynamic programming; record order is a topological order.
fn brute_force_longest(records: &[TaskRecord]) -> u64 {
    let mut best: Vec<u64> = Vec::with_capacity(records.len());
    for record in records {
        let longest_pred = record
            .dependencies
            .iter()
            .map(|d| best[d[1..].parse::<usize>().unwrap()])
            .max()
            .unwrap_or(0);
        best.push(record.duration as u64 + longest_pred);
    }
    best.into_iter().max().unwrap_or(0)
}

proptest! {
    #[test]
    fn prop_total_matches_brute_force(records in dag_records_strategy(12)) {
        let graph = TaskGraph::from_records(&records).unwrap();
        let path = find_critical_path(&graph, &config("multi_source")).unwrap();
        prop_assert_eq!(path.total_duration(), brute_force_longest(&records));
    }

    #[test]
    fn prop_path_is_a_real_chain(records in dag_records_strategy(12)) {
        let graph = TaskGraph::from_records(&records).unwrap();
        let path = find_critical_path(&graph, &config("multi_source")).unwrap();

        let start = path.start().unwrap();
        prop_assert_eq!(graph.in_degree(start), 0);
        prop_assert_eq!(path.edge_count() + 1, path.len());

        let mut edge_sum = 0u64;
        for pair in path.tasks().windows(2) {
            let weight = graph.neighbors(pair[0]).find(|&(succ, _)| succ == pair[1]).map(|(_, w)| w);
            prop_assert!(weight.is_some());
            edge_sum += weight.unwrap_or(0);
        }
        prop_assert_eq!(graph.duration(start) + edge_sum, path.total_duration());

        let duration_sum: u64 = path.tasks().iter().map(|&t| graph.duration(t)).sum();
        prop_assert_eq!(duration_sum, path.total_duration());
    }

    #[test]
    fn prop_path_ends_at_a_sink(records in dag_records_strategy(12)) {
        let graph = TaskGraph::from_records(&records).unwrap();
        for strategy in ["multi_source", "super_source"] {
            let path = find_critical_path(&graph, &config(strategy)).unwrap();
            let end = path.end().unwrap();
            prop_assert_eq!(graph.out_degree(end), 0, "{} ended at {:?}", strategy, graph.code(end));
        }
    }

    #[test]
    fn prop_strategies_agree_on_total(records in dag_records_strategy(12)) {
        let graph = TaskGraph::from_records(&records).unwrap();
        let multi = find_critical_path(&graph, &config("multi_source")).unwrap();
        let single = find_critical_path(&graph, &config("super_source")).unwrap();
        prop_assert_eq!(multi.total_duration(), single.total_duration());
    }

    #[test]
    fn prop_deterministic(records in dag_records_strategy(12)) {
        let graph = TaskGraph::from_records(&records).unwrap();
        for strategy in ["multi_source", "super_source"] {
            let first = find_critical_path(&graph, &config(strategy)).unwrap();
            let second = find_critical_path(&graph, &config(strategy)).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
