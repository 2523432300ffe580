//! Error types for road network operations.

use crate::{CityId, CountryId};
use thiserror::Error;

/// Error type for road network operations.
///
/// "No path between two cities" is not an error; shortest-path queries
/// report it as an empty path.
#[derive(Error, Debug)]
pub enum Error {
    /// City id not present in the network.
    #[error("unknown city: {0}")]
    UnknownCity(CityId),

    /// Country id not present in the network.
    #[error("unknown country: {0}")]
    UnknownCountry(CountryId),

    /// Road distance must be finite and non-negative.
    #[error("invalid road distance {distance} between {point_a} and {point_b}")]
    InvalidWeight {
        point_a: CityId,
        point_b: CityId,
        distance: f64,
    },

    /// Two cities or two countries share an identifier.
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    /// A road references a city that is not part of the network.
    #[error("road references unknown city: {0}")]
    DanglingReference(CityId),

    /// An internal invariant was violated while rebuilding the network.
    /// The operation that produced this left its input untouched.
    #[error("inconsistent graph: {0}")]
    InconsistentGraph(String),
}

/// Result type for road network operations.
pub type Result<T> = std::result::Result<T, Error>;
