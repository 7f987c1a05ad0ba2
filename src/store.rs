//! In-memory record store standing in for the persistence collaborator.
//!
//! Records are read as snapshots and written back wholesale, which matches
//! the replace-wholesale semantics of locations, routes and itineraries.
//! Drivers and passengers share one lock so registration can check username
//! uniqueness and insert under a single write guard.
//! Listings are returned in username order so ranking output is reproducible.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::entities::{Driver, Itinerary, Passenger, User};
use crate::error::{duplicate_user_error, Error};

#[derive(Debug, Default)]
struct Records {
    drivers: HashMap<String, Driver>,
    passengers: HashMap<String, Passenger>,
}

impl Records {
    fn username_taken(&self, username: &str) -> bool {
        self.drivers.contains_key(username) || self.passengers.contains_key(username)
    }
}

#[derive(Debug, Default)]
pub struct Store {
    records: RwLock<Records>,
    itineraries: RwLock<HashMap<String, Vec<Itinerary>>>,
}

impl Store {
    pub async fn insert_driver(&self, driver: Driver) -> Result<(), Error> {
        let mut records = self.records.write().await;

        if records.username_taken(&driver.username) {
            return Err(duplicate_user_error());
        }

        records.drivers.insert(driver.username.clone(), driver);

        Ok(())
    }

    pub async fn insert_passenger(&self, passenger: Passenger) -> Result<(), Error> {
        let mut records = self.records.write().await;

        if records.username_taken(&passenger.username) {
            return Err(duplicate_user_error());
        }

        records
            .passengers
            .insert(passenger.username.clone(), passenger);

        Ok(())
    }

    pub async fn driver(&self, username: &str) -> Option<Driver> {
        self.records.read().await.drivers.get(username).cloned()
    }

    pub async fn passenger(&self, username: &str) -> Option<Passenger> {
        self.records.read().await.passengers.get(username).cloned()
    }

    pub async fn save_driver(&self, driver: Driver) {
        self.records
            .write()
            .await
            .drivers
            .insert(driver.username.clone(), driver);
    }

    pub async fn save_passenger(&self, passenger: Passenger) {
        self.records
            .write()
            .await
            .passengers
            .insert(passenger.username.clone(), passenger);
    }

    pub async fn list_drivers(&self) -> Vec<Driver> {
        let mut drivers: Vec<_> = self.records.read().await.drivers.values().cloned().collect();
        drivers.sort_by(|a, b| a.username.cmp(&b.username));
        drivers
    }

    pub async fn list_passengers(&self) -> Vec<Passenger> {
        let mut passengers: Vec<_> = self
            .records
            .read()
            .await
            .passengers
            .values()
            .cloned()
            .collect();
        passengers.sort_by(|a, b| a.username.cmp(&b.username));
        passengers
    }

    pub async fn list_users(&self) -> Vec<User> {
        let mut users: Vec<_> = self
            .list_drivers()
            .await
            .into_iter()
            .map(User::Driver)
            .chain(self.list_passengers().await.into_iter().map(User::Passenger))
            .collect();
        users.sort_by(|a, b| a.username().cmp(b.username()));
        users
    }

    pub async fn itineraries(&self, username: &str) -> Vec<Itinerary> {
        self.itineraries
            .read()
            .await
            .get(username)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn save_itineraries(&self, username: &str, itineraries: Vec<Itinerary>) {
        self.itineraries
            .write()
            .await
            .insert(username.into(), itineraries);
    }
}
