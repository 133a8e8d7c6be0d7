//! Property tests for cascade traversal over random dependency graphs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use lesswatch::domain::entities::DependencyGraph;

fn node(i: usize) -> PathBuf {
    PathBuf::from(format!("/styles/f{i}.less"))
}

/// Edges `(imported, importer)` over a small node set, cycles included
fn edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0usize..12, 0usize..12), 0..48)
}

fn build(edges: &[(usize, usize)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (imported, importer) in edges {
        graph.register(node(*imported), &node(*importer));
    }
    graph
}

/// Everything reachable from `start` following importer edges
fn reachable(graph: &DependencyGraph, start: &Path) -> HashSet<PathBuf> {
    let mut seen = HashSet::new();
    let mut stack = vec![start.to_path_buf()];
    while let Some(current) = stack.pop() {
        if seen.insert(current.clone()) {
            stack.extend(graph.dependents_of(&current).map(Path::to_path_buf));
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A cascade compiles each file at most once, even with cycles.
    #[test]
    fn property_cascade_has_no_duplicates(edges in edges(), trigger in 0usize..12) {
        let graph = build(&edges);
        let order = graph.cascade(&node(trigger));

        let unique: HashSet<_> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len());
    }

    /// PROPERTY: The trigger is compiled first.
    #[test]
    fn property_cascade_starts_with_trigger(edges in edges(), trigger in 0usize..12) {
        let graph = build(&edges);
        let order = graph.cascade(&node(trigger));

        prop_assert_eq!(order.first(), Some(&node(trigger)));
    }

    /// PROPERTY: The cascade visits exactly the transitive dependents.
    #[test]
    fn property_cascade_covers_transitive_dependents(edges in edges(), trigger in 0usize..12) {
        let graph = build(&edges);
        let order: HashSet<PathBuf> = graph.cascade(&node(trigger)).into_iter().collect();

        prop_assert_eq!(order, reachable(&graph, &node(trigger)));
    }

    /// PROPERTY: Registering the same edges twice changes nothing.
    #[test]
    fn property_register_is_idempotent(edges in edges()) {
        let once = build(&edges);
        let mut twice = build(&edges);
        for (imported, importer) in &edges {
            prop_assert!(!twice.register(node(*imported), &node(*importer)));
        }
        prop_assert_eq!(once.edge_count(), twice.edge_count());
    }
}
