//! City and road distribution across countries.

use crate::{CountryId, RoadNetwork};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of cities per country, most populous first, ties by country id.
/// Countries without cities are still listed with a zero count.
pub fn cities_per_country(network: &RoadNetwork) -> Vec<(CountryId, usize)> {
    let mut counts: HashMap<CountryId, usize> = network
        .countries()
        .map(|country| (country.id().clone(), 0))
        .collect();

    for city in network.cities() {
        *counts.entry(city.country().clone()).or_insert(0) += 1;
    }

    let mut ordered: Vec<(CountryId, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered
}

/// Within- vs cross-country road counts for one country.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadKinds {
    /// Roads with both endpoints in this country.
    pub within: usize,
    /// Roads with exactly one endpoint in this country.
    pub cross: usize,
}

/// Road classification for the whole network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadKindTally {
    pub per_country: HashMap<CountryId, RoadKinds>,
    pub within_total: usize,
    pub cross_total: usize,
}

/// Classify every road as within-country or cross-country.
///
/// A cross-country road counts toward both endpoint countries; the totals
/// count each road once.
pub fn road_kind_counts(network: &RoadNetwork) -> RoadKindTally {
    let mut tally = RoadKindTally::default();
    for country in network.countries() {
        tally
            .per_country
            .insert(country.id().clone(), RoadKinds::default());
    }

    for road in network.roads() {
        let country_a = network.city(&road.point_a).map(|c| c.country().clone());
        let country_b = network.city(&road.point_b).map(|c| c.country().clone());
        // Network invariant: road endpoints always resolve.
        let (Some(country_a), Some(country_b)) = (country_a, country_b) else {
            continue;
        };

        if country_a == country_b {
            tally.per_country.entry(country_a).or_default().within += 1;
            tally.within_total += 1;
        } else {
            tally.per_country.entry(country_a).or_default().cross += 1;
            tally.per_country.entry(country_b).or_default().cross += 1;
            tally.cross_total += 1;
        }
    }

    tally
}
