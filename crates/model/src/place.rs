use serde::Serialize;
use utility::id::HasId;

/// A named, geolocated pick-up or drop-off point of a bike sharing system.
/// Table: `places`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

impl HasId for Place {
    type IdType = i64;
}

/// A latitude/longitude pair. Stored as a postgres `POINT(latitude, longitude)`,
/// so the order of the two components matters and is never swapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Compares with a tolerance, as coordinates read back from the database
    /// went through a float round-trip.
    pub fn approx_eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-9;
        (self.latitude - other.latitude).abs() < EPSILON
            && (self.longitude - other.longitude).abs() < EPSILON
    }
}
