//! The network entity.
//!
//! A network owns an ordered list of stations, partitioned by station kind,
//! and an ordered list of users. It carries the randomized bicycle
//! distribution algorithm and the station orderings.
//!
//! ## Station partition
//!
//! Stations live in one full list (insertion order, reordered only by the
//! sort operations). Alongside it the network keeps one id list per kind,
//! appended in insertion order. Every station id appears in exactly one kind
//! list, so the partition is exhaustive and disjoint by construction; the
//! kind lists survive full-list sorts unchanged.
//!
//! ## Bicycle distribution
//!
//! `distribute_random_bikes` keeps the probabilistic sweep shape: walk the
//! station list repeatedly, and at each station flip a coin; on heads, dock
//! one randomly-typed bicycle if the station still has a free slot and the
//! target count is not yet reached. The capacity precondition is checked up
//! front, so every sweep over a non-saturated list has positive probability
//! of progress and the loop terminates almost surely. Saturated stations are
//! skipped, so a station can never exceed its slot count.

use std::cmp::Ordering;
use std::str::FromStr;

use log::{debug, info};
use rand::Rng;

use crate::bicycle::{Bicycle, BicycleKind};
use crate::error::NetworkError;
use crate::id::IdGenerator;
use crate::station::{Station, StationKind, StationKindFilter};
use crate::user::User;

/// Station ordering selector for [`Network::sort_by`].
///
/// The `FromStr` adapter accepts "Least Occupied" and "Most Used"
/// case-insensitively, for the CLI boundary; anything else is an
/// `UnsupportedSelector` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    LeastOccupied,
    MostUsed,
}

impl FromStr for SortOrder {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "least occupied" => Ok(SortOrder::LeastOccupied),
            "most used" => Ok(SortOrder::MostUsed),
            _ => Err(NetworkError::UnsupportedSelector(s.to_string())),
        }
    }
}

/// A named collection of stations and users.
///
/// Networks are created through [`crate::registry::NetworkRegistry`], which
/// enforces case-insensitive name uniqueness and issues the id.
#[derive(Debug)]
pub struct Network {
    id: u64,
    name: String,
    stations: Vec<Station>,
    standard_ids: Vec<u64>,
    plus_ids: Vec<u64>,
    users: Vec<User>,
}

impl Network {
    pub(crate) fn new(id: u64, name: impl Into<String>) -> Self {
        Network {
            id,
            name: name.into(),
            stations: Vec::new(),
            standard_ids: Vec::new(),
            plus_ids: Vec::new(),
            users: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Append a station to the full list and to its kind partition.
    pub fn add_station(&mut self, station: Station) {
        match station.kind() {
            StationKind::Standard => self.standard_ids.push(station.id()),
            StationKind::Plus => self.plus_ids.push(station.id()),
        }
        debug!(
            "Network '{}': added {:?} station {}",
            self.name,
            station.kind(),
            station.id()
        );
        self.stations.push(station);
    }

    pub fn add_user(&mut self, user: User) {
        debug!("Network '{}': added user {}", self.name, user.id());
        self.users.push(user);
    }

    /// Stations matching `filter`, in the partition's insertion order for a
    /// kind filter and in current list order for `All`.
    pub fn stations_of_kind(&self, filter: StationKindFilter) -> Vec<&Station> {
        match filter {
            StationKindFilter::All => self.stations.iter().collect(),
            StationKindFilter::Standard => self.stations_by_ids(&self.standard_ids),
            StationKindFilter::Plus => self.stations_by_ids(&self.plus_ids),
        }
    }

    fn stations_by_ids(&self, ids: &[u64]) -> Vec<&Station> {
        ids.iter()
            .filter_map(|id| self.stations.iter().find(|s| s.id() == *id))
            .collect()
    }

    /// Look up a station owned by this network.
    pub fn find_station_by_id(&self, id: u64) -> Result<&Station, NetworkError> {
        self.stations
            .iter()
            .find(|s| s.id() == id)
            .ok_or(NetworkError::IdNotFound {
                entity: "station",
                id,
            })
    }

    pub(crate) fn find_station_by_id_mut(&mut self, id: u64) -> Result<&mut Station, NetworkError> {
        self.stations
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(NetworkError::IdNotFound {
                entity: "station",
                id,
            })
    }

    /// Look up a user owned by this network.
    pub fn find_user_by_id(&self, id: u64) -> Result<&User, NetworkError> {
        self.users
            .iter()
            .find(|u| u.id() == id)
            .ok_or(NetworkError::IdNotFound { entity: "user", id })
    }

    /// Free slots summed over every station.
    pub fn free_slot_count(&self) -> usize {
        self.stations.iter().map(|s| s.free_slot_count()).sum()
    }

    /// Total docked bicycles summed over every station.
    pub fn bicycle_count(&self) -> usize {
        self.stations.iter().map(|s| s.bicycle_count()).sum()
    }

    /// Place exactly `count` randomly-typed bicycles across the stations.
    ///
    /// Fails with `NotEnoughSlots` before any placement when `count` exceeds
    /// the current total free-slot capacity. Otherwise runs the probabilistic
    /// sweep described in the module docs until every bicycle is docked.
    pub fn distribute_random_bikes(
        &mut self,
        count: usize,
        ids: &mut IdGenerator,
        rng: &mut impl Rng,
    ) -> Result<(), NetworkError> {
        let available = self.free_slot_count();
        if count > available {
            return Err(NetworkError::NotEnoughSlots {
                requested: count,
                available,
            });
        }

        let mut placed = 0;
        while placed < count {
            for station in &mut self.stations {
                if placed == count {
                    break;
                }
                if station.free_slot_count() == 0 || !rng.gen_bool(0.5) {
                    continue;
                }
                let bicycle = Bicycle::new(ids.next_id(), BicycleKind::random(rng));
                debug!(
                    "Network '{}': docking {:?} bicycle {} at station {}",
                    self.name,
                    bicycle.kind(),
                    bicycle.id(),
                    station.id()
                );
                station.add_bicycle(bicycle)?;
                placed += 1;
            }
        }

        info!(
            "Network '{}': distributed {} bicycles across {} stations ({} free slots remain)",
            self.name,
            count,
            self.stations.len(),
            self.free_slot_count()
        );
        Ok(())
    }

    /// Reorder the station list by ascending occupancy rate over the window.
    pub fn sort_by_least_occupied(&mut self, begin: u64, end: u64) {
        self.stations.sort_by(|a, b| {
            let ra = a.stats().occupancy_rate(a.slot_count(), begin, end);
            let rb = b.stats().occupancy_rate(b.slot_count(), begin, end);
            ra.partial_cmp(&rb).unwrap_or(Ordering::Equal)
        });
    }

    /// Reorder the station list by descending total usage.
    pub fn sort_by_most_used(&mut self) {
        self.stations
            .sort_by(|a, b| b.stats().total_operations().cmp(&a.stats().total_operations()));
    }

    /// Reorder the station list by the given selector. `LeastOccupied` uses
    /// the full recorded history as its window.
    pub fn sort_by(&mut self, order: SortOrder) {
        match order {
            SortOrder::LeastOccupied => self.sort_by_least_occupied(0, u64::MAX),
            SortOrder::MostUsed => self.sort_by_most_used(),
        }
    }
}
