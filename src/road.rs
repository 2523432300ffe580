//! Road type: a weighted, bidirectional connection between two cities.

use crate::{CityId, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A road between two cities.
///
/// Roads are undirected: traversal cost is the same in both directions.
/// The distance is validated on construction and on update; it must be
/// finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// One endpoint.
    pub point_a: CityId,

    /// The other endpoint.
    pub point_b: CityId,

    distance: f64,
}

impl Road {
    /// Create a new road. Fails with [`Error::InvalidWeight`] if the
    /// distance is negative or not finite.
    pub fn new(point_a: impl Into<CityId>, point_b: impl Into<CityId>, distance: f64) -> Result<Self> {
        let point_a = point_a.into();
        let point_b = point_b.into();
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidWeight {
                point_a,
                point_b,
                distance,
            });
        }
        Ok(Self {
            point_a,
            point_b,
            distance,
        })
    }

    /// The road's length.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Update the road's length, with the same validation as [`Road::new`].
    pub fn set_distance(&mut self, distance: f64) -> Result<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidWeight {
                point_a: self.point_a.clone(),
                point_b: self.point_b.clone(),
                distance,
            });
        }
        self.distance = distance;
        Ok(())
    }

    /// Whether the given city is one of the road's endpoints.
    pub fn touches(&self, city: &CityId) -> bool {
        self.point_a == *city || self.point_b == *city
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} ({})", self.point_a, self.point_b, self.distance)
    }
}
