//! Connected components of the road network.
//!
//! Roads are undirected, so reachability is symmetric: a component is a
//! maximal set of mutually reachable cities. Each component also reports
//! the set of countries its cities belong to.

use crate::{CityId, CountryId, RoadNetwork};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A maximal set of mutually reachable cities and the countries they span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub cities: HashSet<CityId>,
    pub countries: HashSet<CountryId>,
}

/// Discover connected components via depth-first traversal.
///
/// Every city belongs to exactly one component; an isolated city forms a
/// singleton. Components come back in discovery order; no order is
/// guaranteed within a component. The traversal is iterative, so deep
/// components cannot overflow the stack.
pub fn connected_components(network: &RoadNetwork) -> Vec<Component> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in graph.node_indices() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;

        let mut cities = HashSet::new();
        let mut countries = HashSet::new();
        let mut stack = vec![start];

        while let Some(v) = stack.pop() {
            let city = &graph[v];
            cities.insert(city.id().clone());
            countries.insert(city.country().clone());

            for w in graph.neighbors(v) {
                if !visited[w.index()] {
                    visited[w.index()] = true;
                    stack.push(w);
                }
            }
        }

        components.push(Component { cities, countries });
    }

    components
}

/// Statistics about a set of components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentStats {
    /// Number of components.
    pub component_count: usize,
    /// City count of the largest component.
    pub max_cities: usize,
    /// City count of the smallest component.
    pub min_cities: usize,
    /// Average cities per component.
    pub avg_cities: f64,
    /// Fraction of all cities in the largest component.
    pub largest_fraction: f64,
}

/// Summarize components. Returns zeroed stats for an empty slice.
pub fn component_stats(components: &[Component]) -> ComponentStats {
    if components.is_empty() {
        return ComponentStats {
            component_count: 0,
            max_cities: 0,
            min_cities: 0,
            avg_cities: 0.0,
            largest_fraction: 0.0,
        };
    }

    let sizes: Vec<usize> = components.iter().map(|c| c.cities.len()).collect();
    let total: usize = sizes.iter().sum();
    let max_cities = sizes.iter().copied().max().unwrap_or(0);
    let min_cities = sizes.iter().copied().min().unwrap_or(0);

    ComponentStats {
        component_count: components.len(),
        max_cities,
        min_cities,
        avg_cities: total as f64 / components.len() as f64,
        largest_fraction: if total > 0 {
            max_cities as f64 / total as f64
        } else {
            0.0
        },
    }
}
