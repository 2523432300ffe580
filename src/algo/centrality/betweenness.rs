//! Betweenness centrality: measuring brokerage and bridging.
//!
//! # Intuition
//!
//! Betweenness measures how often a city lies on shortest paths between
//! other cities. High betweenness = corridor, chokepoint, transit hub.
//!
//! # Definition
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! Where σ_st is the number of shortest paths from s to t and σ_st(v) the
//! number of those passing through v.
//!
//! # Brandes' algorithm
//!
//! Naive all-pairs counting is O(V³). Brandes reduces it to one
//! single-source pass per origin:
//!
//! 1. a weight-ordered pass from each origin records, per city, the number
//!    of distinct shortest paths (σ) and the immediate predecessors on
//!    them;
//! 2. walking the settle order backwards (farthest first) accumulates each
//!    city's dependency on its predecessors:
//!
//! ```text
//! δ(v) += (σ(v) / σ(w)) × (1 + δ(w))
//! ```
//!
//! Every city's accumulated dependency (origins excluded) adds into its
//! total. Because the network is undirected each pair is counted from both
//! endpoints, so the totals are halved at the end.
//!
//! # References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality"

use super::MinScored;
use crate::{City, CityId, RoadNetwork};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BinaryHeap, HashMap};

/// Compute betweenness centrality for all cities.
///
/// # Complexity
///
/// O(V·(V+E) log V) time, O(V + E) space per pass.
pub fn betweenness(network: &RoadNetwork) -> HashMap<CityId, f64> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    if n < 2 {
        return network.cities().map(|c| (c.id().clone(), 0.0)).collect();
    }

    let mut scores = vec![0.0_f64; n];

    for s in graph.node_indices() {
        let (sigma, predecessors, order) = shortest_path_counts(graph, s);

        // Backward pass: accumulate dependencies, farthest-settled first.
        let mut delta = vec![0.0_f64; n];
        for &w in order.iter().rev() {
            let w_idx = w.index();
            for &v in &predecessors[w_idx] {
                let v_idx = v.index();
                delta[v_idx] += sigma[v_idx] / sigma[w_idx] * (1.0 + delta[w_idx]);
            }
            if w != s {
                scores[w_idx] += delta[w_idx];
            }
        }
    }

    // Each unordered pair was counted from both endpoints.
    for score in &mut scores {
        *score /= 2.0;
    }

    graph
        .node_indices()
        .map(|idx| (graph[idx].id().clone(), scores[idx.index()]))
        .collect()
}

/// Weight-ordered single-source pass from `source`.
///
/// Returns:
/// - sigma: number of distinct shortest paths from the source to each city
/// - predecessors: immediate predecessors on those paths
/// - order: cities in settle order (for the backward pass)
fn shortest_path_counts(
    graph: &UnGraph<City, f64>,
    source: NodeIndex,
) -> (Vec<f64>, Vec<Vec<NodeIndex>>, Vec<NodeIndex>) {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut sigma = vec![0.0_f64; n];
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut settled = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut frontier = BinaryHeap::new();

    dist[source.index()] = 0.0;
    sigma[source.index()] = 1.0;
    frontier.push(MinScored(0.0, source));

    while let Some(MinScored(_, v)) = frontier.pop() {
        if settled[v.index()] {
            continue;
        }
        settled[v.index()] = true;
        order.push(v);

        for edge in graph.edges(v) {
            let w = if edge.source() == v {
                edge.target()
            } else {
                edge.source()
            };
            if settled[w.index()] {
                continue;
            }
            let candidate = dist[v.index()] + *edge.weight();

            if candidate < dist[w.index()] {
                // Strictly better path: w's counts restart from v.
                dist[w.index()] = candidate;
                sigma[w.index()] = sigma[v.index()];
                predecessors[w.index()].clear();
                predecessors[w.index()].push(v);
                frontier.push(MinScored(candidate, w));
            } else if candidate == dist[w.index()] {
                // Another shortest path to w, through v.
                sigma[w.index()] += sigma[v.index()];
                predecessors[w.index()].push(v);
            }
        }
    }

    (sigma, predecessors, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{City, Country, Road};

    fn network(roads: &[(&str, &str, f64)], cities: &[&str]) -> RoadNetwork {
        RoadNetwork::build(
            cities
                .iter()
                .map(|id| City::new(*id, *id, "x", (0.0, 0.0))),
            vec![Country::new("x", "Xanadu")],
            roads
                .iter()
                .map(|(a, b, d)| Road::new(*a, *b, *d).unwrap())
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn test_line_interior_cities_carry_traffic() {
        // A -- B -- C -- D, unit weights.
        let net = network(
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)],
            &["A", "B", "C", "D"],
        );
        let scores = betweenness(&net);

        // B carries pairs (A,C) and (A,D); C carries (A,D) and (B,D).
        assert_eq!(scores["A"], 0.0);
        assert_eq!(scores["D"], 0.0);
        assert_eq!(scores["B"], 2.0);
        assert_eq!(scores["C"], 2.0);
    }

    #[test]
    fn test_weighted_detour_shifts_traffic() {
        // The direct A--C road is longer than the route through B.
        let net = network(
            &[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 3.0)],
            &["A", "B", "C"],
        );
        let scores = betweenness(&net);
        assert_eq!(scores["B"], 1.0);
        assert_eq!(scores["A"], 0.0);
        assert_eq!(scores["C"], 0.0);
    }

    #[test]
    fn test_equal_paths_split_credit() {
        // Square: two equal-cost routes A->D, through B and through C.
        let net = network(
            &[
                ("A", "B", 1.0),
                ("B", "D", 1.0),
                ("A", "C", 1.0),
                ("C", "D", 1.0),
            ],
            &["A", "B", "C", "D"],
        );
        let scores = betweenness(&net);
        assert!((scores["B"] - 0.5).abs() < 1e-9);
        assert!((scores["C"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_star_hub_carries_everything() {
        let net = network(
            &[("H", "A", 1.0), ("H", "B", 1.0), ("H", "C", 1.0)],
            &["H", "A", "B", "C"],
        );
        let scores = betweenness(&net);
        // Hub is interior to all three leaf pairs.
        assert_eq!(scores["H"], 3.0);
        assert_eq!(scores["A"], 0.0);
    }

    #[test]
    fn test_single_city_scores_zero() {
        let net = network(&[], &["A"]);
        let scores = betweenness(&net);
        assert_eq!(scores["A"], 0.0);
    }

    #[test]
    fn test_disconnected_pairs_contribute_nothing() {
        let net = network(&[("A", "B", 1.0)], &["A", "B", "C"]);
        let scores = betweenness(&net);
        for score in scores.values() {
            assert_eq!(*score, 0.0);
        }
    }
}
