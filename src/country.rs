//! Country types for road networks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryId(pub String);

impl CountryId {
    /// Create a new country ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets maps keyed by CountryId be queried with plain &str.
impl std::borrow::Borrow<str> for CountryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CountryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CountryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A country. Cities reference it by id; deleting a country does not by
/// itself delete its cities (removal handles both together).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    id: CountryId,

    /// Human-readable name.
    pub name: String,
}

impl Country {
    /// Create a new country.
    pub fn new(id: impl Into<CountryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The country's identifier.
    pub fn id(&self) -> &CountryId {
        &self.id
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
