//! Property tests over randomly generated graphs.

use std::collections::VecDeque;

use matrix_graph_core::{bfs, dfs, shortest_path, Graph};
use proptest::prelude::*;

/// A graph of `n` vertices labeled `0..n` with the given index pairs connected.
fn build(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(n);
    for i in 0..n {
        graph.add_vertex(i.to_string()).unwrap();
    }
    for &(a, b) in edges {
        graph.add_edge(&(a % n).to_string(), &(b % n).to_string(), &[]);
    }
    graph
}

/// Hop distance by plain BFS, as an oracle.
fn distance(graph: &Graph, from: usize, to: usize) -> Option<usize> {
    let mut dist = vec![None; graph.size()];
    let mut queue = VecDeque::from([from]);
    dist[from] = Some(0);
    while let Some(v) = queue.pop_front() {
        let d = dist[v].unwrap();
        for w in graph.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }
    dist[to]
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..48)))
}

proptest! {
    #[test]
    fn adjacency_is_symmetric((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(graph.has_edge(i, j), graph.has_edge(j, i));
            }
        }
    }

    #[test]
    fn distinct_endpoints_never_self_loop((n, edges) in graph_strategy()) {
        let distinct: Vec<_> = edges.into_iter().filter(|(a, b)| a != b).collect();
        let graph = build(n, &distinct);
        for i in 0..n {
            prop_assert!(!graph.has_edge(i, i));
        }
    }

    #[test]
    fn traversals_are_repeatable((n, edges) in graph_strategy(), start in 0usize..24) {
        let graph = build(n, &edges);
        let label = (start % n).to_string();
        prop_assert_eq!(dfs(&graph, &label).unwrap(), dfs(&graph, &label).unwrap());
        prop_assert_eq!(bfs(&graph, &label).unwrap(), bfs(&graph, &label).unwrap());
    }

    #[test]
    fn dfs_and_bfs_reach_the_same_set((n, edges) in graph_strategy(), start in 0usize..24) {
        let graph = build(n, &edges);
        let label = (start % n).to_string();
        let mut d: Vec<_> = dfs(&graph, &label).unwrap().steps.iter().map(|s| s.vertex_id).collect();
        let mut b: Vec<_> = bfs(&graph, &label).unwrap().steps.iter().map(|s| s.vertex_id).collect();
        d.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(d, b);
    }

    #[test]
    fn shortest_path_is_valid_and_minimal(
        (n, edges) in graph_strategy(),
        from in 0usize..24,
        to in 0usize..24,
    ) {
        let graph = build(n, &edges);
        let (from, to) = (from % n, to % n);
        let path = shortest_path(&graph, &from.to_string(), &to.to_string()).unwrap();
        match (path, distance(&graph, from, to)) {
            (Some(steps), Some(hops)) => {
                prop_assert_eq!(steps.len(), hops + 1);
                prop_assert_eq!(steps[0].vertex_id, from);
                prop_assert_eq!(steps[steps.len() - 1].vertex_id, to);
                for pair in steps.windows(2) {
                    prop_assert!(graph.has_edge(pair[0].vertex_id, pair[1].vertex_id));
                }
            }
            (None, None) => {}
            (path, hops) => prop_assert!(false, "path {:?} disagrees with distance {:?}", path, hops),
        }
    }
}
