use chrono::NaiveDateTime;
use model::{
    map::RentalTrip,
    place::Coordinates,
    rental::{Rental, RentalSummary},
};
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: `rentals` (normalized layout)
#[derive(Debug, Clone, FromRow)]
pub struct RentalRow {
    pub id: i64,
    pub start_place_id: i64,
    pub end_place_id: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub bike: Option<String>,
}

impl DatabaseRow for RentalRow {
    type Model = Rental;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Rental {
            start_place: Id::new(self.start_place_id),
            end_place: Id::new(self.end_place_id),
            start_time: self.start_time,
            end_time: self.end_time,
            bike: self.bike,
        }
    }
}

impl From<RentalRow> for RentalTrip {
    fn from(row: RentalRow) -> Self {
        RentalTrip {
            id: Id::new(row.id),
            start_place_id: Id::new(row.start_place_id),
            end_place_id: Id::new(row.end_place_id),
            start_time: row.start_time,
            end_time: row.end_time,
            bike: row.bike,
        }
    }
}

/// Table: `rentals` (single-table layout)
#[derive(Debug, Clone, FromRow)]
pub struct RentalSummaryRow {
    pub id: i64,
    pub start_place_id: i64,
    pub start_place_name: String,
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_place_id: i64,
    pub end_place_name: String,
    pub end_latitude: f64,
    pub end_longitude: f64,
}

impl DatabaseRow for RentalSummaryRow {
    type Model = RentalSummary;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        RentalSummary {
            start_place: Id::new(self.start_place_id),
            start_place_name: self.start_place_name,
            start_place_coordinates: Coordinates::new(
                self.start_latitude,
                self.start_longitude,
            ),
            end_place: Id::new(self.end_place_id),
            end_place_name: self.end_place_name,
            end_place_coordinates: Coordinates::new(
                self.end_latitude,
                self.end_longitude,
            ),
        }
    }
}
