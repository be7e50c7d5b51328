//! In-memory stand-in for the rental database.

use std::{
    collections::BTreeMap,
    io,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use model::{
    map::{PlaceActivity, RentalTrip},
    place::Place,
    rental::{Rental, RentalSummary},
    WithId,
};
use utility::id::Id;

use crate::database::{
    Database, DatabaseAutocommit, DatabaseError, DatabaseTransaction, MapDataRepo,
    PlaceRepo, RentalRepo, Result,
};

/// Committed state plus bookkeeping about how the database was used.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub rentals: BTreeMap<i64, Rental>,
    pub summaries: BTreeMap<i64, RentalSummary>,
    pub places: BTreeMap<i64, Place>,
    /// Every executed insert of all committed transactions, in order.
    pub statements: Vec<String>,
    pub connections: usize,
    pub closed: usize,
    pub commits: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeConnectionInfo {
    pub shared: Arc<Mutex<Tables>>,
    pub refuse_connection: bool,
    /// Inserting the place with this id fails.
    pub fail_on_place: Option<i64>,
}

impl FakeConnectionInfo {
    pub fn tables(&self) -> MutexGuard<'_, Tables> {
        self.shared.lock().unwrap()
    }
}

pub struct FakeDatabase {
    info: FakeConnectionInfo,
}

pub struct FakeTransaction {
    info: FakeConnectionInfo,
    staged: Tables,
}

pub struct FakeAutocommit {
    info: FakeConnectionInfo,
}

fn failure(message: &str) -> DatabaseError {
    DatabaseError::statement(io::Error::new(io::ErrorKind::Other, message.to_owned()))
}

#[async_trait]
impl Database for FakeDatabase {
    type ConnectionInfo = FakeConnectionInfo;
    type Transaction<'a> = FakeTransaction;
    type Autocommit<'a> = FakeAutocommit;

    async fn connect(info: &FakeConnectionInfo) -> Result<Self> {
        if info.refuse_connection {
            return Err(DatabaseError::connection(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }
        info.tables().connections += 1;
        Ok(Self { info: info.clone() })
    }

    async fn transaction<'a>(&'a mut self) -> Result<FakeTransaction> {
        Ok(FakeTransaction {
            info: self.info.clone(),
            staged: Tables::default(),
        })
    }

    fn auto(&mut self) -> FakeAutocommit {
        FakeAutocommit {
            info: self.info.clone(),
        }
    }

    async fn close(self) {
        self.info.tables().closed += 1;
    }
}

#[async_trait]
impl RentalRepo for FakeTransaction {
    async fn put_rental(&mut self, rental: &WithId<Rental>) -> Result<bool> {
        let id = rental.id.raw();
        self.staged.statements.push(format!("rental {}", id));
        if self.info.tables().rentals.contains_key(&id)
            || self.staged.rentals.contains_key(&id)
        {
            return Ok(false);
        }
        self.staged.rentals.insert(id, rental.content.clone());
        Ok(true)
    }

    async fn put_rental_summary(
        &mut self,
        summary: &WithId<RentalSummary>,
    ) -> Result<bool> {
        let id = summary.id.raw();
        self.staged.statements.push(format!("rental summary {}", id));
        if self.info.tables().summaries.contains_key(&id)
            || self.staged.summaries.contains_key(&id)
        {
            return Ok(false);
        }
        self.staged.summaries.insert(id, summary.content.clone());
        Ok(true)
    }
}

#[async_trait]
impl PlaceRepo for FakeTransaction {
    async fn put_place(&mut self, place: &WithId<Place>) -> Result<bool> {
        let id = place.id.raw();
        if self.info.fail_on_place == Some(id) {
            return Err(failure("place violates a constraint"));
        }
        self.staged.statements.push(format!("place {}", id));
        if self.info.tables().places.contains_key(&id)
            || self.staged.places.contains_key(&id)
        {
            return Ok(false);
        }
        self.staged.places.insert(id, place.content.clone());
        Ok(true)
    }
}

#[async_trait]
impl DatabaseTransaction for FakeTransaction {
    async fn commit(self) -> Result<()> {
        let mut tables = self.info.tables();
        tables.rentals.extend(self.staged.rentals);
        tables.summaries.extend(self.staged.summaries);
        tables.places.extend(self.staged.places);
        tables.statements.extend(self.staged.statements);
        tables.commits += 1;
        Ok(())
    }
}

#[async_trait]
impl MapDataRepo for FakeAutocommit {
    async fn place_activities(&mut self) -> Result<Vec<PlaceActivity>> {
        let tables = self.info.tables();
        let count = |select: fn(&Rental) -> &Id<Place>, id: i64| {
            tables
                .rentals
                .values()
                .filter(|rental| *select(rental).raw_ref() == id)
                .count() as i64
        };
        Ok(tables
            .places
            .iter()
            .map(|(id, place)| PlaceActivity {
                id: Id::new(*id),
                name: place.name.clone(),
                latitude: place.coordinates.latitude,
                longitude: place.coordinates.longitude,
                start_count: count(|rental| &rental.start_place, *id),
                end_count: count(|rental| &rental.end_place, *id),
            })
            .collect())
    }

    async fn rental_trips(&mut self) -> Result<Vec<RentalTrip>> {
        let tables = self.info.tables();
        let mut trips = tables
            .rentals
            .iter()
            .map(|(id, rental)| RentalTrip {
                id: Id::new(*id),
                start_place_id: rental.start_place,
                end_place_id: rental.end_place,
                start_time: rental.start_time,
                end_time: rental.end_time,
                bike: rental.bike.clone(),
            })
            .collect::<Vec<_>>();
        // postgres sorts NULL last in ascending order
        trips.sort_by_key(|trip| (trip.start_time.is_none(), trip.start_time, trip.id));
        Ok(trips)
    }
}

impl DatabaseAutocommit for FakeAutocommit {}
