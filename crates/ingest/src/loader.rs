use std::path::Path;

use log::{debug, info};
use model::record::Record;
use serde_json::{Map, Value};

use crate::{
    database::{Database, DatabaseTransaction as _, PlaceRepo as _, RentalRepo as _},
    error::LoadError,
    variant::SchemaVariant,
};

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of records processed, which is every record of the file.
    pub records: usize,
    /// Rental rows that did not exist before.
    pub rentals_inserted: usize,
    /// Place rows that did not exist before. Always zero for the single-table layout.
    pub places_inserted: usize,
}

/// Loads all rentals from the json file at `source` into the database.
///
/// The whole file is loaded in a single transaction: either every record is
/// committed or, if any step fails, none is. Rows whose id already exists are
/// skipped, so loading the same file again is a no-op. The connection is
/// closed on every exit path once it was established.
pub async fn load<D: Database>(
    source: &Path,
    connection_info: &D::ConnectionInfo,
    variant: SchemaVariant,
) -> Result<LoadSummary, LoadError> {
    let content = tokio::fs::read_to_string(source).await.map_err(|why| {
        LoadError::Read {
            path: source.to_path_buf(),
            source: why,
        }
    })?;
    let records: Vec<Map<String, Value>> =
        serde_json::from_str(&content).map_err(LoadError::MalformedJson)?;
    info!(
        "read {} records from {}, loading into {} layout",
        records.len(),
        source.display(),
        variant
    );

    let mut database = D::connect(connection_info).await?;
    let result = insert_all(&mut database, records, variant).await;
    database.close().await;
    result
}

async fn insert_all<D: Database>(
    database: &mut D,
    records: Vec<Map<String, Value>>,
    variant: SchemaVariant,
) -> Result<LoadSummary, LoadError> {
    let mut tx = database.transaction().await?;
    let mut summary = LoadSummary::default();

    for (index, object) in records.into_iter().enumerate() {
        let record = Record::from_object(object, variant.required_fields())
            .map_err(|why| LoadError::record(index, why))?;

        match variant {
            SchemaVariant::SingleTable => {
                if tx.put_rental_summary(&record.summary()).await? {
                    summary.rentals_inserted += 1;
                }
            }
            SchemaVariant::Normalized => {
                let rental = record
                    .rental()
                    .map_err(|why| LoadError::record(index, why))?;
                if tx.put_rental(&rental).await? {
                    summary.rentals_inserted += 1;
                }
                for place in [record.start_place(), record.end_place()] {
                    if tx.put_place(&place).await? {
                        summary.places_inserted += 1;
                    }
                }
            }
        }

        debug!("record {} (rental {}) processed", index, record.id);
        summary.records += 1;
    }

    tx.commit().await?;
    info!(
        "committed {} records: {} new rentals, {} new places",
        summary.records, summary.rentals_inserted, summary.places_inserted
    );
    Ok(summary)
}
