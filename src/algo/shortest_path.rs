//! Shortest paths between cities: uninformed and heuristic-guided search.
//!
//! # Algorithm
//!
//! Both entry points run the same search, differing only in the priority
//! function. A city moves through three states: unvisited, on the frontier,
//! settled. The frontier is a binary heap ordered by `g + h` where `g` is
//! the accumulated road distance from the source and `h` the heuristic
//! estimate to the target (zero for Dijkstra). A city may sit on the
//! frontier several times with different tentative costs; stale entries are
//! skipped when popped instead of being removed eagerly (lazy deletion).
//! Once settled, a city's cost is final.
//!
//! Equal priorities are broken by node index, so equal-cost alternatives
//! always resolve to the same path. Optimality does not depend on the
//! tie-break; reproducibility does.
//!
//! # Results
//!
//! A found path is the ordered sequence of `(city, cumulative cost)` steps
//! from source to target; the trivial query `source == target` yields the
//! single step `(source, 0)`. An empty path means no route exists, which is
//! a valid outcome, not an error. Unknown endpoints are errors.

use crate::{City, CityId, Error, Result, RoadNetwork};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// One step of a reconstructed path: a city and the cumulative road
/// distance from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub city: CityId,
    pub cost: f64,
}

/// Estimate of the remaining cost from a city to the target.
///
/// Estimates must be non-negative, and admissible (never overestimating
/// the true remaining road distance) for guided search to return optimal
/// paths; consistency additionally guarantees no city is re-expanded.
pub trait Heuristic {
    fn estimate(&self, from: &City, target: &City) -> f64;
}

/// Zero estimate: turns the guided search into plain Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEstimate;

impl Heuristic for NoEstimate {
    fn estimate(&self, _from: &City, _target: &City) -> f64 {
        0.0
    }
}

/// Manhattan distance over city coordinates.
///
/// Admissible only while coordinate units are compatible with road
/// distances, i.e. every road is at least as long as the coordinate gap it
/// spans. That is a precondition on the data; the search does not verify
/// it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn estimate(&self, from: &City, target: &City) -> f64 {
        let (x1, y1) = from.coordinate;
        let (x2, y2) = target.coordinate;
        (x1 - x2).abs() + (y1 - y2).abs()
    }
}

/// Frontier entry for the min-heap: smallest `g + h` pops first, ties
/// broken by node index.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    priority: f64,
    node: NodeIndex,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Uninformed shortest path between two cities.
///
/// Fails with [`Error::UnknownCity`] if either endpoint is absent. An
/// empty path means the cities are not connected.
pub fn dijkstra(network: &RoadNetwork, source: &CityId, target: &CityId) -> Result<Vec<PathStep>> {
    astar(network, source, target, &NoEstimate)
}

/// Heuristic-guided shortest path between two cities.
///
/// With an admissible `heuristic` the returned path has the same cost as
/// [`dijkstra`]'s while usually expanding fewer cities.
pub fn astar<H: Heuristic>(
    network: &RoadNetwork,
    source: &CityId,
    target: &CityId,
    heuristic: &H,
) -> Result<Vec<PathStep>> {
    let graph = network.as_petgraph();
    let s = network
        .node_index(source)
        .ok_or_else(|| Error::UnknownCity(source.clone()))?;
    let t = network
        .node_index(target)
        .ok_or_else(|| Error::UnknownCity(target.clone()))?;
    let target_city = &graph[t];

    let n = graph.node_count();
    let mut g = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    let mut pred: Vec<Option<NodeIndex>> = vec![None; n];
    let mut frontier = BinaryHeap::new();

    g[s.index()] = 0.0;
    frontier.push(FrontierEntry {
        priority: heuristic.estimate(&graph[s], target_city),
        node: s,
    });

    while let Some(FrontierEntry { node: v, .. }) = frontier.pop() {
        if settled[v.index()] {
            continue;
        }
        settled[v.index()] = true;

        if v == t {
            return Ok(reconstruct(network, &g, &pred, t));
        }

        for edge in graph.edges(v) {
            let w = if edge.source() == v {
                edge.target()
            } else {
                edge.source()
            };
            if settled[w.index()] {
                continue;
            }
            let tentative = g[v.index()] + *edge.weight();
            if tentative < g[w.index()] {
                g[w.index()] = tentative;
                pred[w.index()] = Some(v);
                frontier.push(FrontierEntry {
                    priority: tentative + heuristic.estimate(&graph[w], target_city),
                    node: w,
                });
            }
        }
    }

    debug!(source = %source, target = %target, "no path");
    Ok(Vec::new())
}

/// Follow predecessor links from the target back to the source, then
/// reverse.
fn reconstruct(
    network: &RoadNetwork,
    g: &[f64],
    pred: &[Option<NodeIndex>],
    target: NodeIndex,
) -> Vec<PathStep> {
    let graph = network.as_petgraph();
    let mut steps = Vec::new();
    let mut cursor = Some(target);
    while let Some(node) = cursor {
        steps.push(PathStep {
            city: graph[node].id().clone(),
            cost: g[node.index()],
        });
        cursor = pred[node.index()];
    }
    steps.reverse();
    steps
}
