use std::{fmt, str::FromStr};

use model::record::Record;
use thiserror::Error;

/// The table layout rentals are loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaVariant {
    /// One `rentals` table holding both endpoints inline.
    SingleTable,
    /// `rentals` referencing `places` by id.
    #[default]
    Normalized,
}

impl SchemaVariant {
    /// The record fields the inserts of this layout reference.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            SchemaVariant::SingleTable => Record::SUMMARY_FIELDS,
            SchemaVariant::Normalized => Record::FIELDS,
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown schema variant `{0}`, expected `single-table` or `normalized`")]
pub struct UnknownSchemaVariant(pub String);

impl FromStr for SchemaVariant {
    type Err = UnknownSchemaVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-table" | "single_table" | "a" => Ok(Self::SingleTable),
            "normalized" | "b" => Ok(Self::Normalized),
            _ => Err(UnknownSchemaVariant(s.to_owned())),
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVariant::SingleTable => write!(f, "single-table"),
            SchemaVariant::Normalized => write!(f, "normalized"),
        }
    }
}
