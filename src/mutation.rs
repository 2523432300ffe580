//! Country removal: derive a consistent survivor network.
//!
//! Removing a country deletes the country itself, every city belonging to
//! it, and every road incident to a deleted city. A road is deleted if
//! either endpoint is deleted; partial roads never survive. The operation
//! reads its input and returns a fresh network, so earlier snapshots stay
//! valid and sequential removals chain by feeding each result back in.

use crate::{City, CityId, Country, CountryId, Error, Result, Road, RoadNetwork};
use std::collections::HashSet;
use tracing::info;

/// Result of a country removal.
#[derive(Debug, Clone)]
pub struct Removal {
    /// The surviving network, rebuilt and consistent.
    pub network: RoadNetwork,

    /// Surviving cities left without any incident road, sorted by id.
    /// They are reported, not removed.
    pub disconnected: Vec<CityId>,
}

impl RoadNetwork {
    /// Remove a country and everything that depends on it.
    ///
    /// Fails with [`Error::UnknownCountry`] if the country does not exist,
    /// or [`Error::InconsistentGraph`] if the survivor set cannot form a
    /// valid network; the input network is untouched either way.
    pub fn remove_country(&self, country: &CountryId) -> Result<Removal> {
        if self.country(country).is_none() {
            return Err(Error::UnknownCountry(country.clone()));
        }

        let doomed: HashSet<&CityId> = self
            .cities()
            .filter(|city| city.country() == country)
            .map(City::id)
            .collect();

        let surviving_cities: Vec<City> = self
            .cities()
            .filter(|city| city.country() != country)
            .cloned()
            .collect();

        let surviving_countries: Vec<Country> = self
            .countries()
            .filter(|c| c.id() != country)
            .cloned()
            .collect();

        let surviving_roads: Vec<Road> = self
            .roads()
            .iter()
            .filter(|road| !doomed.contains(&road.point_a) && !doomed.contains(&road.point_b))
            .cloned()
            .collect();

        let cities_removed = doomed.len();
        let roads_removed = self.road_count() - surviving_roads.len();

        // Building through the validating constructor keeps the operation
        // atomic: any inconsistency fails here, before anything is returned.
        let network = RoadNetwork::build(surviving_cities, surviving_countries, surviving_roads)
            .map_err(|e| {
                Error::InconsistentGraph(format!("rebuild after removing {country} failed: {e}"))
            })?;

        let mut disconnected: Vec<CityId> = network
            .cities()
            .filter(|city| network.degree(city.id()) == 0)
            .map(|city| city.id().clone())
            .collect();
        disconnected.sort();

        info!(
            country = %country,
            cities_removed,
            roads_removed,
            disconnected = disconnected.len(),
            "country removed"
        );

        Ok(Removal {
            network,
            disconnected,
        })
    }
}
