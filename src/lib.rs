// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

//! Road network analysis: shortest paths, centrality, connectivity.
//!
//! This crate models a weighted, undirected road network of cities and
//! countries and provides the passes to analyze it:
//!
//! - [`RoadNetwork`] — the validated network value: cities, countries,
//!   roads, and a derived adjacency index kept consistent with the road
//!   list
//! - [`RoadNetwork::remove_country`] — delete a country with its cities
//!   and roads, yielding a fresh consistent network plus the cities the
//!   removal stranded
//! - [`algo::shortest_path`] — Dijkstra and A* between two cities
//! - [`algo::centrality`] — betweenness (Brandes) and closeness
//! - [`algo::components`] — connected components with country membership
//! - [`algo::distribution`] — city counts and road kinds per country
//!
//! # Example
//!
//! ```rust
//! use viaria::{City, Country, Road, RoadNetwork};
//! use viaria::algo::shortest_path::dijkstra;
//!
//! let network = RoadNetwork::build(
//!     vec![
//!         City::new("a", "Aachen", "de", (0.0, 0.0)),
//!         City::new("b", "Bonn", "de", (1.0, 1.0)),
//!         City::new("c", "Calais", "fr", (3.0, 1.0)),
//!     ],
//!     vec![Country::new("de", "Germany"), Country::new("fr", "France")],
//!     vec![
//!         Road::new("a", "b", 91.0)?,
//!         Road::new("b", "c", 404.0)?,
//!     ],
//! )?;
//!
//! let path = dijkstra(&network, &"a".into(), &"c".into())?;
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.last().unwrap().cost, 495.0);
//! # Ok::<(), viaria::Error>(())
//! ```

pub mod algo;
mod city;
mod country;
mod error;
mod mutation;
mod network;
mod road;

pub use city::{City, CityId};
pub use country::{Country, CountryId};
pub use error::{Error, Result};
pub use mutation::Removal;
pub use network::{NetworkStats, RoadNetwork};
pub use road::Road;

// Re-export petgraph for advanced graph operations
pub use petgraph;
