use ingest::database::Result;
use model::{map::PlaceActivity, place::Place, WithId};
use sqlx::{Executor, Postgres};
use utility::id::Id;

use crate::data_model::{
    place::{PlaceActivityRow, PlaceRow},
    with_id,
};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: &Id<Place>) -> Result<WithId<Place>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id::BIGINT AS id,
            name,
            coordinates[0] AS latitude,
            coordinates[1] AS longitude,
            type AS place_type
        FROM
            places
        WHERE
            id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: PlaceRow| with_id(row))
}

pub async fn count<'c, E>(executor: E) -> Result<i64>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM places;")
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}

/// Inserts a place, leaving an existing place with the same id untouched.
/// Returns whether the place was inserted.
pub async fn put<'c, E>(executor: E, place: &WithId<Place>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query(
        "
        INSERT INTO places(
            id,
            name,
            coordinates,
            type
        )
        VALUES ($1, $2, POINT($3, $4), $5)
        ON CONFLICT (id) DO NOTHING;
        ",
    )
    .bind(place.id.raw())
    .bind(&place.content.name)
    .bind(place.content.coordinates.latitude)
    .bind(place.content.coordinates.longitude)
    .bind(place.content.place_type.as_deref())
    .execute(executor)
    .await
    .map_err(convert_error)
    .map(|result| result.rows_affected() == 1)
}

pub async fn get_activities<'c, E>(executor: E) -> Result<Vec<PlaceActivity>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            places.id::BIGINT AS id,
            places.name,
            places.coordinates[0] AS latitude,
            places.coordinates[1] AS longitude,
            (
                SELECT COUNT(*) FROM rentals
                WHERE rentals.start_place_id = places.id
            ) AS start_count,
            (
                SELECT COUNT(*) FROM rentals
                WHERE rentals.end_place_id = places.id
            ) AS end_count
        FROM
            places
        ORDER BY
            places.id ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)
    .map(|rows: Vec<PlaceActivityRow>| rows.into_iter().map(Into::into).collect())
}
