//! Property-based tests for the road network invariants.
//!
//! Networks are generated on an integer grid with every road at least as
//! long as the Manhattan gap between its endpoints, which makes the
//! Manhattan estimate admissible and consistent by construction.

use proptest::prelude::*;
use std::collections::HashSet;

use viaria::algo::centrality::{betweenness, closeness};
use viaria::algo::shortest_path::{astar, dijkstra, ManhattanDistance};
use viaria::{City, CityId, Country, Road, RoadNetwork};

#[derive(Debug, Clone)]
struct RawNetwork {
    coords: Vec<(i32, i32)>,
    edges: Vec<(usize, usize, f64)>,
}

fn arb_raw_network() -> impl Strategy<Value = RawNetwork> {
    (2_usize..=8).prop_flat_map(|n| {
        (
            prop::collection::vec((0_i32..=6, 0_i32..=6), n),
            prop::collection::vec((0..n, 0..n, 0.0_f64..4.0), 0..=2 * n),
        )
            .prop_map(|(coords, edges)| RawNetwork { coords, edges })
    })
}

/// Materialize a raw network, optionally prefixing every city id.
fn build(raw: &RawNetwork, prefix: &str) -> RoadNetwork {
    let cities: Vec<City> = raw
        .coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let country = if i % 2 == 0 { "x" } else { "y" };
            City::new(
                format!("{prefix}c{i}"),
                format!("City {i}"),
                country,
                (f64::from(x), f64::from(y)),
            )
        })
        .collect();

    let roads: Vec<Road> = raw
        .edges
        .iter()
        .filter(|(a, b, _)| a != b)
        .map(|&(a, b, extra)| {
            let (xa, ya) = raw.coords[a];
            let (xb, yb) = raw.coords[b];
            let gap = f64::from((xa - xb).abs() + (ya - yb).abs());
            Road::new(format!("{prefix}c{a}"), format!("{prefix}c{b}"), gap + extra).unwrap()
        })
        .collect();

    RoadNetwork::build(
        cities,
        vec![Country::new("x", "Xanadu"), Country::new("y", "Ypres")],
        roads,
    )
    .unwrap()
}

fn sorted_ids(network: &RoadNetwork) -> Vec<CityId> {
    let mut ids: Vec<CityId> = network.cities().map(|c| c.id().clone()).collect();
    ids.sort();
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// With an admissible heuristic, guided search finds the same cost as
    /// uninformed search for every pair.
    #[test]
    fn astar_cost_equals_dijkstra_cost(raw in arb_raw_network()) {
        let network = build(&raw, "");
        let ids = sorted_ids(&network);

        for source in &ids {
            for target in &ids {
                let plain = dijkstra(&network, source, target).unwrap();
                let guided = astar(&network, source, target, &ManhattanDistance).unwrap();

                prop_assert_eq!(plain.is_empty(), guided.is_empty());
                if let (Some(p), Some(g)) = (plain.last(), guided.last()) {
                    prop_assert!(
                        (p.cost - g.cost).abs() < 1e-9,
                        "{} -> {}: dijkstra {} vs astar {}",
                        source, target, p.cost, g.cost
                    );
                }
            }
        }
    }

    /// Querying the same pair twice on an unmutated network is identical.
    #[test]
    fn shortest_path_is_idempotent(raw in arb_raw_network()) {
        let network = build(&raw, "");
        let ids = sorted_ids(&network);

        for source in &ids {
            for target in &ids {
                let first = dijkstra(&network, source, target).unwrap();
                let second = dijkstra(&network, source, target).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }

    /// A path's cumulative costs start at zero and never decrease.
    #[test]
    fn path_costs_are_monotone(raw in arb_raw_network()) {
        let network = build(&raw, "");
        let ids = sorted_ids(&network);

        for source in &ids {
            for target in &ids {
                let path = dijkstra(&network, source, target).unwrap();
                if let Some(first) = path.first() {
                    prop_assert_eq!(first.cost, 0.0);
                    prop_assert_eq!(&first.city, source);
                }
                for pair in path.windows(2) {
                    prop_assert!(pair[0].cost <= pair[1].cost);
                }
            }
        }
    }

    /// The betweenness total only depends on structure, not on the city
    /// identifiers.
    #[test]
    fn betweenness_total_survives_relabeling(raw in arb_raw_network()) {
        let original: f64 = betweenness(&build(&raw, "")).values().sum();
        let relabeled: f64 = betweenness(&build(&raw, "z_")).values().sum();
        prop_assert!(
            (original - relabeled).abs() < 1e-6,
            "totals diverge: {original} vs {relabeled}"
        );
    }

    /// Closeness is zero exactly for cities with no reachable others.
    #[test]
    fn closeness_zero_iff_isolated(raw in arb_raw_network()) {
        let network = build(&raw, "");
        let scores = closeness(&network);

        for city in network.cities() {
            let isolated = network.degree(city.id()) == 0;
            if isolated {
                prop_assert_eq!(scores[city.id()], 0.0);
            } else {
                prop_assert!(scores[city.id()] > 0.0, "{} has roads", city.id());
            }
        }
    }

    /// Removing a country then reading the derived adjacency gives the
    /// same index as building a network fresh from the surviving roads.
    #[test]
    fn removal_adjacency_matches_fresh_build(raw in arb_raw_network()) {
        let network = build(&raw, "");
        let removal = network.remove_country(&"x".into()).unwrap();

        let fresh = RoadNetwork::build(
            removal.network.cities().cloned().collect::<Vec<_>>(),
            removal.network.countries().cloned().collect::<Vec<_>>(),
            removal.network.roads().to_vec(),
        )
        .unwrap();

        for city in fresh.cities() {
            let mut rebuilt = removal.network.neighbors(city.id());
            let mut expected = fresh.neighbors(city.id());
            rebuilt.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
            expected.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
            prop_assert_eq!(rebuilt, expected);
        }
    }

    /// After a removal no surviving road touches a deleted city, and the
    /// disconnected report is exactly the zero-degree survivors.
    #[test]
    fn removal_leaves_no_dangling_roads(raw in arb_raw_network()) {
        let network = build(&raw, "");
        let removal = network.remove_country(&"y".into()).unwrap();

        let survivors: HashSet<CityId> = removal
            .network
            .cities()
            .map(|c| c.id().clone())
            .collect();

        for road in removal.network.roads() {
            prop_assert!(survivors.contains(&road.point_a));
            prop_assert!(survivors.contains(&road.point_b));
        }

        let mut expected: Vec<CityId> = removal
            .network
            .cities()
            .filter(|c| removal.network.degree(c.id()) == 0)
            .map(|c| c.id().clone())
            .collect();
        expected.sort();
        prop_assert_eq!(removal.disconnected.clone(), expected);
    }
}
