// tests/property/graph.rs

use std::collections::BTreeSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;
use workplan::dag::DependencyGraph;
use workplan::errors::WorkplanError;

const NODES: usize = 8;

fn node(i: usize) -> String {
    format!("t{i}")
}

fn edge_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..NODES, 0..NODES), 0..40)
}

fn is_acyclic(graph: &DependencyGraph) -> bool {
    let edges = graph.edges();
    let mut g: DiGraphMap<&str, ()> = DiGraphMap::new();
    for e in &edges {
        g.add_edge(e.predecessor.as_str(), e.successor.as_str(), ());
    }
    toposort(&g, None).is_ok()
}

fn snapshot(graph: &DependencyGraph) -> Vec<BTreeSet<String>> {
    (0..NODES).map(|i| graph.direct_successors(&node(i))).collect()
}

proptest! {
    #[test]
    fn insertion_keeps_graph_acyclic(pairs in edge_strategy()) {
        let mut graph = DependencyGraph::new();

        for (p, s) in pairs {
            let (p, s) = (node(p), node(s));
            let would_cycle = graph.can_reach(&s, &p);
            let before = snapshot(&graph);

            match graph.add_edge(&p, &s) {
                Ok(()) => {
                    prop_assert!(p != s);
                    prop_assert!(!would_cycle);
                    prop_assert!(graph.direct_successors(&p).contains(&s));
                }
                Err(WorkplanError::SelfDependency(t)) => {
                    prop_assert_eq!(&t, &p);
                    prop_assert_eq!(&p, &s);
                    prop_assert_eq!(snapshot(&graph), before);
                }
                Err(WorkplanError::CyclicDependency { .. }) => {
                    prop_assert!(would_cycle);
                    prop_assert_eq!(snapshot(&graph), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
            }

            prop_assert!(is_acyclic(&graph));
        }
    }

    #[test]
    fn remove_all_edges_for_leaves_no_mention(pairs in edge_strategy(), victim in 0..NODES) {
        let mut graph = DependencyGraph::new();
        for (p, s) in pairs {
            let _ = graph.add_edge(&node(p), &node(s));
        }
        let total = graph.edge_count();
        let victim = node(victim);
        let mentioning = graph
            .edges()
            .iter()
            .filter(|e| e.predecessor == victim || e.successor == victim)
            .count();

        let removed = graph.remove_all_edges_for(&victim);

        prop_assert_eq!(removed, mentioning);
        prop_assert_eq!(graph.edge_count(), total - removed);
        prop_assert!(graph
            .edges()
            .iter()
            .all(|e| e.predecessor != victim && e.successor != victim));
        prop_assert!(graph.direct_predecessors(&victim).is_empty());
    }
}
