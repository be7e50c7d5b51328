use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use utility::{id::Id, time::from_epoch_ticks};

use crate::{
    place::{Coordinates, Place},
    rental::{Rental, RentalSummary},
    WithId,
};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid record: {0}")]
    Invalid(#[source] serde_json::Error),
    #[error("`{field}` is not a valid epoch timestamp: {ticks}")]
    InvalidTimestamp { field: &'static str, ticks: i64 },
}

/// A single rental as exported by the bike sharing system.
///
/// The fields only the normalized layout needs are optional, so that files
/// without them can still be loaded into the single-table layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: i64,
    pub start_place: i64,
    pub start_place_name: String,
    pub start_place_lat: f64,
    pub start_place_lng: f64,
    #[serde(default)]
    pub start_place_type: Option<String>,
    pub end_place: i64,
    pub end_place_name: String,
    pub end_place_lat: f64,
    pub end_place_lng: f64,
    #[serde(default)]
    pub end_place_type: Option<String>,
    /// Unix epoch seconds.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Unix epoch seconds.
    #[serde(default)]
    pub end_time: Option<i64>,
    #[serde(
        default,
        deserialize_with = "utility::serde::string_or_number::deserialize_option"
    )]
    pub bike: Option<String>,
}

impl Record {
    /// Fields referenced by the single-table insert.
    pub const SUMMARY_FIELDS: &'static [&'static str] = &[
        "id",
        "start_place",
        "start_place_name",
        "start_place_lat",
        "start_place_lng",
        "end_place",
        "end_place_name",
        "end_place_lat",
        "end_place_lng",
    ];

    /// Fields referenced by the normalized inserts.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "start_place",
        "start_place_name",
        "start_place_lat",
        "start_place_lng",
        "start_place_type",
        "end_place",
        "end_place_name",
        "end_place_lat",
        "end_place_lng",
        "end_place_type",
        "start_time",
        "end_time",
        "bike",
    ];

    /// Decodes a record from a json object. Every name in `fields` has to be
    /// present as a key, even if its value is `null`.
    pub fn from_object(
        object: Map<String, Value>,
        fields: &[&'static str],
    ) -> Result<Self, RecordError> {
        if let Some(field) = fields.iter().find(|field| !object.contains_key(**field)) {
            return Err(RecordError::MissingField(*field));
        }
        serde_json::from_value(Value::Object(object)).map_err(RecordError::Invalid)
    }

    pub fn start_coordinates(&self) -> Coordinates {
        Coordinates::new(self.start_place_lat, self.start_place_lng)
    }

    pub fn end_coordinates(&self) -> Coordinates {
        Coordinates::new(self.end_place_lat, self.end_place_lng)
    }

    pub fn summary(&self) -> WithId<RentalSummary> {
        WithId::new(
            Id::new(self.id),
            RentalSummary {
                start_place: Id::new(self.start_place),
                start_place_name: self.start_place_name.clone(),
                start_place_coordinates: self.start_coordinates(),
                end_place: Id::new(self.end_place),
                end_place_name: self.end_place_name.clone(),
                end_place_coordinates: self.end_coordinates(),
            },
        )
    }

    pub fn rental(&self) -> Result<WithId<Rental>, RecordError> {
        Ok(WithId::new(
            Id::new(self.id),
            Rental {
                start_place: Id::new(self.start_place),
                end_place: Id::new(self.end_place),
                start_time: convert_ticks("start_time", self.start_time)?,
                end_time: convert_ticks("end_time", self.end_time)?,
                bike: self.bike.clone(),
            },
        ))
    }

    pub fn start_place(&self) -> WithId<Place> {
        WithId::new(
            Id::new(self.start_place),
            Place {
                name: self.start_place_name.clone(),
                coordinates: self.start_coordinates(),
                place_type: self.start_place_type.clone(),
            },
        )
    }

    pub fn end_place(&self) -> WithId<Place> {
        WithId::new(
            Id::new(self.end_place),
            Place {
                name: self.end_place_name.clone(),
                coordinates: self.end_coordinates(),
                place_type: self.end_place_type.clone(),
            },
        )
    }
}

fn convert_ticks(
    field: &'static str,
    ticks: Option<i64>,
) -> Result<Option<NaiveDateTime>, RecordError> {
    match ticks {
        Some(ticks) => from_epoch_ticks(ticks)
            .map(Some)
            .ok_or(RecordError::InvalidTimestamp { field, ticks }),
        None => Ok(None),
    }
}
