use std::{error, result};

use async_trait::async_trait;
use model::{
    map::{PlaceActivity, RentalTrip},
    place::Place,
    rental::{Rental, RentalSummary},
    WithId,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("not found")]
    NotFound,
    #[error("could not connect to the database: {0}")]
    Connection(Box<dyn error::Error + Send + Sync>),
    #[error("database statement failed: {0}")]
    Statement(Box<dyn error::Error + Send + Sync>),
}

impl DatabaseError {
    pub fn connection<T: error::Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Connection(Box::new(why))
    }

    pub fn statement<T: error::Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Statement(Box::new(why))
    }
}

pub type Result<T> = result::Result<T, DatabaseError>;

/// All `put_*` operations insert a row unless a row with the same id already
/// exists, in which case the existing row is left untouched. They return
/// whether a row was actually inserted.
#[async_trait]
pub trait RentalRepo {
    /// Insert into the normalized `rentals` table.
    async fn put_rental(&mut self, rental: &WithId<Rental>) -> Result<bool>;

    /// Insert into the single-table `rentals` table.
    async fn put_rental_summary(
        &mut self,
        summary: &WithId<RentalSummary>,
    ) -> Result<bool>;
}

#[async_trait]
pub trait PlaceRepo {
    async fn put_place(&mut self, place: &WithId<Place>) -> Result<bool>;
}

/// Read access to the normalized tables, shaped for the rental map.
#[async_trait]
pub trait MapDataRepo {
    /// All places with the number of rentals starting and ending there,
    /// ordered by id.
    async fn place_activities(&mut self) -> Result<Vec<PlaceActivity>>;

    /// All rentals ordered by start time.
    async fn rental_trips(&mut self) -> Result<Vec<RentalTrip>>;
}

#[async_trait]
pub trait DatabaseTransaction: RentalRepo + PlaceRepo {
    async fn commit(self) -> Result<()>;
}

pub trait DatabaseAutocommit: MapDataRepo {}

/// A connection to the rental database.
///
/// Dropping a transaction without committing it rolls it back. `close` has to
/// be called on every exit path once the connection is no longer needed.
#[async_trait]
pub trait Database: Send + Sized {
    type ConnectionInfo: Send + Sync;
    type Transaction<'a>: DatabaseTransaction + Send
    where
        Self: 'a;
    type Autocommit<'a>: DatabaseAutocommit + Send
    where
        Self: 'a;

    /// Opens the connection. Makes a single attempt and never retries.
    async fn connect(info: &Self::ConnectionInfo) -> Result<Self>;

    async fn transaction<'a>(&'a mut self) -> Result<Self::Transaction<'a>>;

    fn auto(&mut self) -> Self::Autocommit<'_>;

    async fn close(self);
}
