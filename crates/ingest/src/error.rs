use std::{io, path::PathBuf};

use model::record::RecordError;
use thiserror::Error;

use crate::database::DatabaseError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input is not a json array of objects: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("record {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index} has an invalid `{field}`: {ticks} is not a valid epoch timestamp")]
    InvalidTimestamp {
        index: usize,
        field: &'static str,
        ticks: i64,
    },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl LoadError {
    pub(crate) fn record(index: usize, why: RecordError) -> Self {
        match why {
            RecordError::MissingField(field) => Self::MissingField { index, field },
            RecordError::Invalid(source) => Self::InvalidRecord { index, source },
            RecordError::InvalidTimestamp { field, ticks } => {
                Self::InvalidTimestamp {
                    index,
                    field,
                    ticks,
                }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("could not serialize map data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
