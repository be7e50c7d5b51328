use ingest::database::Result;
use model::{
    map::RentalTrip,
    rental::{Rental, RentalSummary},
    WithId,
};
use sqlx::{Executor, Postgres};
use utility::id::Id;

use crate::data_model::{
    rental::{RentalRow, RentalSummaryRow},
    with_id,
};

use super::convert_error;

// normalized layout

pub async fn get<'c, E>(executor: E, id: &Id<Rental>) -> Result<WithId<Rental>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id::BIGINT AS id,
            start_place_id::BIGINT AS start_place_id,
            end_place_id::BIGINT AS end_place_id,
            start_time,
            end_time,
            bike
        FROM
            rentals
        WHERE
            id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: RentalRow| with_id(row))
}

/// Inserts a rental, leaving an existing rental with the same id untouched.
/// Returns whether the rental was inserted.
pub async fn put<'c, E>(executor: E, rental: &WithId<Rental>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query(
        "
        INSERT INTO rentals(
            id,
            start_place_id,
            end_place_id,
            start_time,
            end_time,
            bike
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO NOTHING;
        ",
    )
    .bind(rental.id.raw())
    .bind(rental.content.start_place.raw())
    .bind(rental.content.end_place.raw())
    .bind(rental.content.start_time)
    .bind(rental.content.end_time)
    .bind(rental.content.bike.as_deref())
    .execute(executor)
    .await
    .map_err(convert_error)
    .map(|result| result.rows_affected() == 1)
}

pub async fn get_trips<'c, E>(executor: E) -> Result<Vec<RentalTrip>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id::BIGINT AS id,
            start_place_id::BIGINT AS start_place_id,
            end_place_id::BIGINT AS end_place_id,
            start_time,
            end_time,
            bike
        FROM
            rentals
        ORDER BY
            start_time ASC, id ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)
    .map(|rows: Vec<RentalRow>| rows.into_iter().map(Into::into).collect())
}

pub async fn count<'c, E>(executor: E) -> Result<i64>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM rentals;")
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}

// single-table layout

pub async fn get_summary<'c, E>(
    executor: E,
    id: &Id<RentalSummary>,
) -> Result<WithId<RentalSummary>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id::BIGINT AS id,
            start_place_id::BIGINT AS start_place_id,
            start_place_name,
            start_place_coordinates[0] AS start_latitude,
            start_place_coordinates[1] AS start_longitude,
            end_place_id::BIGINT AS end_place_id,
            end_place_name,
            end_place_coordinates[0] AS end_latitude,
            end_place_coordinates[1] AS end_longitude
        FROM
            rentals
        WHERE
            id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: RentalSummaryRow| with_id(row))
}

/// Inserts a rental with both endpoints inline, leaving an existing rental
/// with the same id untouched. Returns whether the rental was inserted.
pub async fn put_summary<'c, E>(
    executor: E,
    summary: &WithId<RentalSummary>,
) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query(
        "
        INSERT INTO rentals(
            id,
            start_place_id,
            start_place_name,
            start_place_coordinates,
            end_place_id,
            end_place_name,
            end_place_coordinates
        )
        VALUES ($1, $2, $3, POINT($4, $5), $6, $7, POINT($8, $9))
        ON CONFLICT (id) DO NOTHING;
        ",
    )
    .bind(summary.id.raw())
    .bind(summary.content.start_place.raw())
    .bind(&summary.content.start_place_name)
    .bind(summary.content.start_place_coordinates.latitude)
    .bind(summary.content.start_place_coordinates.longitude)
    .bind(summary.content.end_place.raw())
    .bind(&summary.content.end_place_name)
    .bind(summary.content.end_place_coordinates.latitude)
    .bind(summary.content.end_place_coordinates.longitude)
    .execute(executor)
    .await
    .map_err(convert_error)
    .map(|result| result.rows_affected() == 1)
}
