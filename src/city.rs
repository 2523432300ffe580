//! City types for road networks.

use crate::CountryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a city.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub String);

impl CityId {
    /// Create a new city ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets maps keyed by CityId be queried with plain &str.
impl std::borrow::Borrow<str> for CityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A city (node) in a road network.
///
/// The identity never changes after construction; name and coordinate are
/// plain data and may be updated in place. The country field is a lookup
/// key into the network's country table, not an owning reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: CityId,

    /// Human-readable name.
    pub name: String,

    country: CountryId,

    /// 2D position. Only used as heuristic input for guided search.
    pub coordinate: (f64, f64),
}

impl City {
    /// Create a new city.
    pub fn new(
        id: impl Into<CityId>,
        name: impl Into<String>,
        country: impl Into<CountryId>,
        coordinate: (f64, f64),
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            coordinate,
        }
    }

    /// The city's identifier.
    pub fn id(&self) -> &CityId {
        &self.id
    }

    /// The identifier of the country this city belongs to.
    pub fn country(&self) -> &CountryId {
        &self.country
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
