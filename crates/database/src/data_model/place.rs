use model::{
    map::PlaceActivity,
    place::{Coordinates, Place},
};
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// A place with its point split into latitude and longitude.
/// Table: `places`
#[derive(Debug, Clone, FromRow)]
pub struct PlaceRow {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_type: Option<String>,
}

impl DatabaseRow for PlaceRow {
    type Model = Place;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Place {
            name: self.name,
            coordinates: Coordinates::new(self.latitude, self.longitude),
            place_type: self.place_type,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PlaceActivityRow {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_count: i64,
    pub end_count: i64,
}

impl From<PlaceActivityRow> for PlaceActivity {
    fn from(row: PlaceActivityRow) -> Self {
        PlaceActivity {
            id: Id::new(row.id),
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            start_count: row.start_count,
            end_count: row.end_count,
        }
    }
}
