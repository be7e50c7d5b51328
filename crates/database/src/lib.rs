use std::{env, fmt, num::ParseIntError};

use async_trait::async_trait;
use ingest::database::{
    Database, DatabaseAutocommit, DatabaseError, DatabaseTransaction, MapDataRepo,
    PlaceRepo, RentalRepo, Result,
};
use log::{debug, warn};
use model::{
    map::{PlaceActivity, RentalTrip},
    place::Place,
    rental::{Rental, RentalSummary},
    WithId,
};
use queries::convert_error;
use sqlx::{
    postgres::{PgConnectOptions, PgConnection},
    Connection, Transaction,
};
use thiserror::Error;

pub mod data_model;
pub mod queries;

pub const DATABASE_NAME: &str = "DB_NAME";
pub const DATABASE_USER: &str = "DB_USER";
pub const DATABASE_PASSWORD: &str = "DB_PASSWORD";
pub const DATABASE_HOST: &str = "DB_HOST";
pub const DATABASE_PORT: &str = "DB_PORT";

/// Connection parameters as found in the environment.
///
/// Nothing is validated up front. A parameter that is not set is left to the
/// driver, which falls back to the `PG*` environment variables and its
/// defaults, and any problem surfaces as a connection error.
#[derive(Clone, Default)]
pub struct DatabaseConnectionInfo {
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    base: Option<PgConnectOptions>,
}

#[derive(Debug, Error)]
#[error("invalid port `{port}`: {source}")]
pub struct InvalidPort {
    port: String,
    #[source]
    source: ParseIntError,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database: lookup(DATABASE_NAME),
            username: lookup(DATABASE_USER),
            password: lookup(DATABASE_PASSWORD),
            hostname: lookup(DATABASE_HOST),
            port: lookup(DATABASE_PORT),
            base: None,
        }
    }

    /// Use `options` instead of the driver defaults for every parameter that
    /// is not set.
    pub fn with_base_options(mut self, options: PgConnectOptions) -> Self {
        self.base = Some(options);
        self
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        let mut options = self.base.clone().unwrap_or_else(PgConnectOptions::new);
        if let Some(hostname) = &self.hostname {
            options = options.host(hostname);
        }
        if let Some(port) = &self.port {
            let port = port.parse::<u16>().map_err(|why| {
                DatabaseError::connection(InvalidPort {
                    port: port.clone(),
                    source: why,
                })
            })?;
            options = options.port(port);
        }
        if let Some(username) = &self.username {
            options = options.username(username);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        Ok(options)
    }
}

impl fmt::Debug for DatabaseConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnectionInfo")
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .finish()
    }
}

/// A single postgres connection. Connecting makes exactly one attempt.
pub struct PgDatabase {
    connection: PgConnection,
}

impl PgDatabase {
    async fn connect_with(options: &PgConnectOptions) -> Result<Self> {
        let connection = PgConnection::connect_with(options)
            .await
            .map_err(DatabaseError::connection)?;
        Ok(Self { connection })
    }
}

pub struct PgDatabaseTransaction<'c> {
    tx: Transaction<'c, sqlx::Postgres>,
}

#[async_trait]
impl<'c> DatabaseTransaction for PgDatabaseTransaction<'c> {
    async fn commit(self) -> Result<()> {
        self.tx.commit().await.map_err(convert_error)
    }
}

pub struct PgDatabaseAutocommit<'c> {
    connection: &'c mut PgConnection,
}

impl<'c> DatabaseAutocommit for PgDatabaseAutocommit<'c> {}

#[async_trait]
impl Database for PgDatabase {
    type ConnectionInfo = DatabaseConnectionInfo;
    type Transaction<'a> = PgDatabaseTransaction<'a>;
    type Autocommit<'a> = PgDatabaseAutocommit<'a>;

    async fn connect(info: &DatabaseConnectionInfo) -> Result<Self> {
        debug!("connecting to database with {:?}", info);
        let options = info.connect_options()?;
        Self::connect_with(&options).await
    }

    async fn transaction<'a>(&'a mut self) -> Result<PgDatabaseTransaction<'a>> {
        let tx = self.connection.begin().await.map_err(convert_error)?;
        Ok(PgDatabaseTransaction { tx })
    }

    fn auto(&mut self) -> PgDatabaseAutocommit<'_> {
        PgDatabaseAutocommit {
            connection: &mut self.connection,
        }
    }

    async fn close(self) {
        match self.connection.close().await {
            Ok(()) => debug!("database connection closed"),
            Err(why) => warn!("closing the database connection failed: {}", why),
        }
    }
}

#[async_trait]
impl<'a> RentalRepo for PgDatabaseTransaction<'a> {
    async fn put_rental(&mut self, rental: &WithId<Rental>) -> Result<bool> {
        queries::rental::put(&mut *self.tx, rental).await
    }

    async fn put_rental_summary(
        &mut self,
        summary: &WithId<RentalSummary>,
    ) -> Result<bool> {
        queries::rental::put_summary(&mut *self.tx, summary).await
    }
}

#[async_trait]
impl<'a> PlaceRepo for PgDatabaseTransaction<'a> {
    async fn put_place(&mut self, place: &WithId<Place>) -> Result<bool> {
        queries::place::put(&mut *self.tx, place).await
    }
}

#[async_trait]
impl<'c> MapDataRepo for PgDatabaseAutocommit<'c> {
    async fn place_activities(&mut self) -> Result<Vec<PlaceActivity>> {
        queries::place::get_activities(&mut *self.connection).await
    }

    async fn rental_trips(&mut self) -> Result<Vec<RentalTrip>> {
        queries::rental::get_trips(&mut *self.connection).await
    }
}
