use ingest::database::DatabaseError;

pub mod place;
pub mod rental;

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        _ => DatabaseError::statement(why),
    }
}
