//! The road network: cities, countries, roads, and the derived adjacency index.
//!
//! The road list is the authoritative edge record; the petgraph structure
//! and the id index are derived from it and rebuilt whenever the road set
//! changes. Invariant: every road's endpoints resolve to graph nodes and
//! the corresponding edge carries the road's distance, symmetrically.

use crate::{City, CityId, Country, CountryId, Error, Result, Road};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A weighted road network of cities and countries.
///
/// Built once from validated input, transformed by removal operations
/// (each producing a new independently owned network), then queried
/// read-only by the search, centrality and connectivity algorithms.
///
/// # Example
///
/// ```rust
/// use viaria::{City, Country, Road, RoadNetwork};
///
/// let network = RoadNetwork::build(
///     vec![
///         City::new("a", "Aachen", "de", (0.0, 0.0)),
///         City::new("b", "Bonn", "de", (1.0, 1.0)),
///     ],
///     vec![Country::new("de", "Germany")],
///     vec![Road::new("a", "b", 91.0)?],
/// )?;
///
/// assert_eq!(network.city_count(), 2);
/// assert_eq!(network.distance(&"a".into(), &"b".into()), Some(91.0));
/// # Ok::<(), viaria::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    /// The underlying undirected graph. Node weights are the cities,
    /// edge weights the road distances.
    graph: UnGraph<City, f64>,

    /// Map from city id to node index. Derived, rebuilt with the graph.
    city_index: HashMap<CityId, NodeIndex>,

    countries: HashMap<CountryId, Country>,

    /// The authoritative road list; graph edges are derived from it.
    roads: Vec<Road>,
}

impl RoadNetwork {
    /// Build a network from cities, countries and roads.
    ///
    /// Fails with [`Error::DuplicateId`] if two cities or two countries
    /// share an identifier, or [`Error::DanglingReference`] if a road
    /// references an unknown city.
    pub fn build(
        cities: impl IntoIterator<Item = City>,
        countries: impl IntoIterator<Item = Country>,
        roads: impl IntoIterator<Item = Road>,
    ) -> Result<Self> {
        let mut graph = UnGraph::<City, f64>::new_undirected();
        let mut city_index = HashMap::new();

        for city in cities {
            if city_index.contains_key(city.id()) {
                return Err(Error::DuplicateId(city.id().to_string()));
            }
            let id = city.id().clone();
            let idx = graph.add_node(city);
            city_index.insert(id, idx);
        }

        let mut country_map = HashMap::new();
        for country in countries {
            if country_map.contains_key(country.id()) {
                return Err(Error::DuplicateId(country.id().to_string()));
            }
            country_map.insert(country.id().clone(), country);
        }

        let roads: Vec<Road> = roads.into_iter().collect();
        for road in &roads {
            let a = *city_index
                .get(&road.point_a)
                .ok_or_else(|| Error::DanglingReference(road.point_a.clone()))?;
            let b = *city_index
                .get(&road.point_b)
                .ok_or_else(|| Error::DanglingReference(road.point_b.clone()))?;
            graph.add_edge(a, b, road.distance());
        }

        Ok(Self {
            graph,
            city_index,
            countries: country_map,
            roads,
        })
    }

    /// Recompute the adjacency index from the current road list. O(roads).
    ///
    /// Fails with [`Error::InconsistentGraph`] if a road references a city
    /// that is no longer present; the network is left unchanged in that
    /// case.
    pub fn rebuild_adjacency(&mut self) -> Result<()> {
        let cities: Vec<City> = self.graph.node_weights().cloned().collect();
        let mut graph = UnGraph::<City, f64>::new_undirected();
        let mut city_index = HashMap::with_capacity(cities.len());

        for city in cities {
            let id = city.id().clone();
            let idx = graph.add_node(city);
            city_index.insert(id, idx);
        }

        for road in &self.roads {
            let a = *city_index.get(&road.point_a).ok_or_else(|| {
                Error::InconsistentGraph(format!("road endpoint {} is not a city", road.point_a))
            })?;
            let b = *city_index.get(&road.point_b).ok_or_else(|| {
                Error::InconsistentGraph(format!("road endpoint {} is not a city", road.point_b))
            })?;
            graph.add_edge(a, b, road.distance());
        }

        self.graph = graph;
        self.city_index = city_index;
        Ok(())
    }

    /// Get a city by ID.
    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.city_index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Whether a city with this ID exists.
    pub fn contains_city(&self, id: &CityId) -> bool {
        self.city_index.contains_key(id)
    }

    /// Iterate over all cities.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.graph.node_weights()
    }

    /// Get a country by ID.
    pub fn country(&self, id: &CountryId) -> Option<&Country> {
        self.countries.get(id)
    }

    /// Iterate over all countries.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// The road list.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of countries.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of roads.
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Neighbors of a city with the connecting road distance. O(d).
    /// Unknown cities have no neighbors.
    pub fn neighbors(&self, id: &CityId) -> Vec<(CityId, f64)> {
        match self.city_index.get(id) {
            Some(&idx) => self
                .graph
                .edges(idx)
                .map(|edge| {
                    let other = if edge.source() == idx {
                        edge.target()
                    } else {
                        edge.source()
                    };
                    (self.graph[other].id().clone(), *edge.weight())
                })
                .collect(),
            None => vec![],
        }
    }

    /// Number of roads incident to a city. O(d). Zero for unknown cities.
    pub fn degree(&self, id: &CityId) -> usize {
        match self.city_index.get(id) {
            Some(&idx) => self.graph.edges(idx).count(),
            None => 0,
        }
    }

    /// Road distance between two adjacent cities; the minimum if parallel
    /// roads exist. `None` if either city is unknown or no road connects
    /// them.
    pub fn distance(&self, a: &CityId, b: &CityId) -> Option<f64> {
        let &ia = self.city_index.get(a)?;
        let &ib = self.city_index.get(b)?;
        self.graph
            .edges_connecting(ia, ib)
            .map(|edge| *edge.weight())
            .reduce(f64::min)
    }

    /// Get the node index for a city, for traversal over [`Self::as_petgraph`].
    pub fn node_index(&self, id: &CityId) -> Option<NodeIndex> {
        self.city_index.get(id).copied()
    }

    /// The underlying petgraph structure, for advanced graph operations.
    pub fn as_petgraph(&self) -> &UnGraph<City, f64> {
        &self.graph
    }
}

/// Statistics about a road network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Number of cities.
    pub city_count: usize,
    /// Number of countries.
    pub country_count: usize,
    /// Number of roads.
    pub road_count: usize,
    /// Average number of roads per city.
    pub avg_degree: f64,
}

impl RoadNetwork {
    /// Compute statistics about the network.
    pub fn stats(&self) -> NetworkStats {
        let city_count = self.city_count();
        let road_count = self.road_count();

        let avg_degree = if city_count > 0 {
            2.0 * road_count as f64 / city_count as f64
        } else {
            0.0
        };

        NetworkStats {
            city_count,
            country_count: self.country_count(),
            road_count,
            avg_degree,
        }
    }
}
