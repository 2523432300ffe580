//! Closeness centrality: proximity to every reachable city.
//!
//! # Metric
//!
//! Search order follows road distances (the same weight-ordered pass the
//! rest of the crate uses), but the summed quantity is the *hop count* of
//! each shortest path — the number of roads on it. The score is
//!
//! ```text
//! C(v) = reachable(v) / Σ hops(v, u)
//! ```
//!
//! over all cities u reachable from v. Unreachable cities contribute
//! nothing: they neither enter the sum nor the numerator, so disconnected
//! networks cannot inflate scores. A city with no reachable others — or a
//! single-city network — scores 0.

use super::MinScored;
use crate::{City, CityId, RoadNetwork};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BinaryHeap, HashMap};

/// Compute closeness centrality for all cities.
///
/// # Complexity
///
/// One single-source pass per city: O(V·(V+E) log V) overall.
pub fn closeness(network: &RoadNetwork) -> HashMap<CityId, f64> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    let mut result = HashMap::with_capacity(n);
    if n < 2 {
        for city in network.cities() {
            result.insert(city.id().clone(), 0.0);
        }
        return result;
    }

    for source in graph.node_indices() {
        let hops = hop_counts(graph, source);

        let mut reachable = 0_usize;
        let mut hop_sum = 0_u64;
        for (idx, hop) in hops.iter().enumerate() {
            if idx == source.index() {
                continue;
            }
            if let Some(hop) = hop {
                reachable += 1;
                hop_sum += u64::from(*hop);
            }
        }

        let score = if hop_sum > 0 {
            reachable as f64 / hop_sum as f64
        } else {
            0.0
        };
        result.insert(graph[source].id().clone(), score);
    }

    result
}

/// Weight-ordered single-source pass; returns the hop count of each city's
/// shortest path from `source` (`None` = unreachable, `Some(0)` = the
/// source itself).
fn hop_counts(graph: &UnGraph<City, f64>, source: NodeIndex) -> Vec<Option<u32>> {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut hops: Vec<Option<u32>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut frontier = BinaryHeap::new();

    dist[source.index()] = 0.0;
    hops[source.index()] = Some(0);
    frontier.push(MinScored(0.0, source));

    while let Some(MinScored(_, v)) = frontier.pop() {
        if settled[v.index()] {
            continue;
        }
        settled[v.index()] = true;

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
                dist[w.index()] = candidate;
                hops[w.index()] = hops[v.index()].map(|h| h + 1);
                frontier.push(MinScored(candidate, w));
            }
        }
    }

    hops
}
