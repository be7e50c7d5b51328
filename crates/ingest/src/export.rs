//! Writes the json files the rental map is drawn from.

use std::path::{Path, PathBuf};

use log::info;
use model::map::{PlaceActivity, RentalTrip};
use serde::Serialize;

use crate::{
    database::{self, Database, MapDataRepo as _},
    error::ExportError,
};

pub const PLACES_FILE: &str = "places_data.json";
pub const RENTALS_FILE: &str = "rentals_data.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub places: usize,
    pub rentals: usize,
}

/// Exports all places (with rental counts) and all rentals of the normalized
/// layout into `out_dir`, creating the directory if needed.
pub async fn export<D: Database>(
    out_dir: &Path,
    connection_info: &D::ConnectionInfo,
) -> Result<ExportSummary, ExportError> {
    let mut database = D::connect(connection_info).await?;
    let result = read_map_data(&mut database).await;
    database.close().await;
    let (places, rentals) = result?;

    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|why| ExportError::Write {
            path: out_dir.to_path_buf(),
            source: why,
        })?;
    write_json(out_dir.join(PLACES_FILE), &places).await?;
    write_json(out_dir.join(RENTALS_FILE), &rentals).await?;

    info!(
        "exported {} places and {} rentals to {}",
        places.len(),
        rentals.len(),
        out_dir.display()
    );
    Ok(ExportSummary {
        places: places.len(),
        rentals: rentals.len(),
    })
}

async fn read_map_data<D: Database>(
    database: &mut D,
) -> database::Result<(Vec<PlaceActivity>, Vec<RentalTrip>)> {
    let mut auto = database.auto();
    let places = auto.place_activities().await?;
    let rentals = auto.rental_trips().await?;
    Ok((places, rentals))
}

async fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<(), ExportError> {
    let json = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|why| ExportError::Write { path, source: why })
}
