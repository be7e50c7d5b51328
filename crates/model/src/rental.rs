use chrono::NaiveDateTime;
use serde::Serialize;
use utility::id::{HasId, Id};

use crate::place::{Coordinates, Place};

/// A single trip in the normalized layout. Places are referenced by id only.
/// Table: `rentals`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    pub start_place: Id<Place>,
    pub end_place: Id<Place>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub bike: Option<String>,
}

impl HasId for Rental {
    type IdType = i64;
}

/// A single trip in the single-table layout, with both endpoints inlined.
/// Table: `rentals`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalSummary {
    pub start_place: Id<Place>,
    pub start_place_name: String,
    pub start_place_coordinates: Coordinates,
    pub end_place: Id<Place>,
    pub end_place_name: String,
    pub end_place_coordinates: Coordinates,
}

impl HasId for RentalSummary {
    type IdType = i64;
}
