//! Rows of the json files the rental map is drawn from.

use chrono::NaiveDateTime;
use serde::Serialize;
use utility::id::Id;

use crate::{place::Place, rental::Rental};

/// A place together with how many rentals started and ended there.
/// Written to `places_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceActivity {
    pub id: Id<Place>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_count: i64,
    pub end_count: i64,
}

/// Written to `rentals_data.json`. Missing values are written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalTrip {
    pub id: Id<Rental>,
    pub start_place_id: Id<Place>,
    pub end_place_id: Id<Place>,
    #[serde(serialize_with = "utility::serde::date_time::serialize_naive_option")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(serialize_with = "utility::serde::date_time::serialize_naive_option")]
    pub end_time: Option<NaiveDateTime>,
    pub bike: Option<String>,
}
