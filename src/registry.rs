//! Network registry and setup orchestration.
//!
//! The registry owns every network in the process, together with the shared
//! [`IdGenerator`] all entities draw from. It enforces case-insensitive name
//! uniqueness at creation time, answers id lookups across all networks, and
//! carries the bulk `setup_network` operation that builds a fully-stocked
//! network in one call.
//!
//! There is no global instance: callers construct a registry and pass it by
//! reference to whatever needs it, and tests build a fresh one each.
//!
//! ## Setup atomicity
//!
//! `setup_network` validates the capacity precondition and the name before
//! constructing anything, and assembles the network as a local value before
//! registering it. No failure path leaves a partially-built network in the
//! registry.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::error::NetworkError;
use crate::geo::GeoArea;
use crate::id::IdGenerator;
use crate::network::Network;
use crate::station::{Station, StationKind};
use crate::user::User;

/// Owner of all networks and the shared id-space.
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: Vec<Network>,
    ids: IdGenerator,
}

/// Parameters for one `setup_network` call.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    pub name: String,
    pub station_count: usize,
    pub slots_per_station: usize,
    pub side_km: f64,
    pub bike_count: usize,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        NetworkRegistry {
            networks: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// All registered networks, in registration order.
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    /// Issue a fresh id from the shared id-space.
    ///
    /// Used when constructing stations or users outside `setup_network`.
    pub fn next_id(&mut self) -> u64 {
        self.ids.next_id()
    }

    fn ensure_name_free(&self, name: &str) -> Result<(), NetworkError> {
        if self
            .networks
            .iter()
            .any(|n| n.name().eq_ignore_ascii_case(name))
        {
            return Err(NetworkError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Create and register an empty network with a unique name.
    pub fn create(&mut self, name: &str) -> Result<&mut Network, NetworkError> {
        self.ensure_name_free(name)?;
        let network = Network::new(self.ids.next_id(), name);
        info!("Registered network '{}' (id {})", name, network.id());
        self.networks.push(network);
        Ok(self.networks.last_mut().expect("network just pushed"))
    }

    /// Find a network by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Result<&Network, NetworkError> {
        self.networks
            .iter()
            .find(|n| n.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| NetworkError::NameNotFound(name.to_string()))
    }

    /// Mutable variant of [`Self::find_by_name`].
    pub fn find_by_name_mut(&mut self, name: &str) -> Result<&mut Network, NetworkError> {
        self.networks
            .iter_mut()
            .find(|n| n.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| NetworkError::NameNotFound(name.to_string()))
    }

    /// Find a station across all networks, in registration then insertion order.
    pub fn find_station_by_id(&self, id: u64) -> Result<&Station, NetworkError> {
        self.networks
            .iter()
            .flat_map(|n| n.stations().iter())
            .find(|s| s.id() == id)
            .ok_or(NetworkError::IdNotFound {
                entity: "station",
                id,
            })
    }

    /// Find a user across all networks.
    pub fn find_user_by_id(&self, id: u64) -> Result<&User, NetworkError> {
        self.networks
            .iter()
            .flat_map(|n| n.users().iter())
            .find(|u| u.id() == id)
            .ok_or(NetworkError::IdNotFound { entity: "user", id })
    }

    /// Replace the registry contents wholesale. Test-support operation.
    pub fn reset_all(&mut self, replacement: Vec<Network>) {
        self.networks = replacement;
    }

    /// Build, stock, and register a network in one operation.
    ///
    /// Validates `bike_count <= station_count * slots_per_station` before
    /// touching any state, then creates `station_count` stations of random
    /// kind at random positions inside the square region, attaches
    /// `slots_per_station` slots to each, and distributes `bike_count`
    /// randomly-typed bicycles across them.
    pub fn setup_network(
        &mut self,
        plan: &SetupPlan,
        rng: &mut impl Rng,
    ) -> Result<&Network, NetworkError> {
        let capacity = plan.station_count * plan.slots_per_station;
        if plan.bike_count > capacity {
            return Err(NetworkError::NotEnoughSlots {
                requested: plan.bike_count,
                available: capacity,
            });
        }
        self.ensure_name_free(&plan.name)?;

        info!(
            "Setting up network '{}': {} stations, {} slots each, {} bicycles, {} km region",
            plan.name, plan.station_count, plan.slots_per_station, plan.bike_count, plan.side_km
        );

        let area = GeoArea::new(plan.side_km);
        let mut network = Network::new(self.ids.next_id(), &plan.name);
        for _ in 0..plan.station_count {
            let kind = StationKind::random(rng);
            let location = area.random_location(rng);
            let mut station = Station::new(self.ids.next_id(), kind, location);
            for _ in 0..plan.slots_per_station {
                station.add_parking_slot();
            }
            debug!(
                "Network '{}': created {:?} station {} at ({:.5}, {:.5})",
                plan.name,
                kind,
                station.id(),
                location.latitude,
                location.longitude
            );
            network.add_station(station);
        }
        network.distribute_random_bikes(plan.bike_count, &mut self.ids, rng)?;

        self.networks.push(network);
        Ok(self.networks.last().expect("network just pushed"))
    }

    /// Serializable summary of the whole registry.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            networks: self
                .networks
                .iter()
                .map(|n| NetworkSummary {
                    id: n.id(),
                    name: n.name().to_string(),
                    stations: n
                        .stations()
                        .iter()
                        .map(|s| StationSummary {
                            id: s.id(),
                            kind: s.kind(),
                            latitude: s.location().latitude,
                            longitude: s.location().longitude,
                            slots: s.slot_count(),
                            bicycles: s.bicycle_count(),
                            free_slots: s.free_slot_count(),
                        })
                        .collect(),
                    users: n
                        .users()
                        .iter()
                        .map(|u| UserSummary {
                            id: u.id(),
                            name: u.name().to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// JSON-serializable view of the registry, written by the CLI.
#[derive(Debug, Serialize)]
pub struct RegistrySnapshot {
    pub networks: Vec<NetworkSummary>,
}

#[derive(Debug, Serialize)]
pub struct NetworkSummary {
    pub id: u64,
    pub name: String,
    pub stations: Vec<StationSummary>,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Serialize)]
pub struct StationSummary {
    pub id: u64,
    pub kind: StationKind,
    pub latitude: f64,
    pub longitude: f64,
    pub slots: usize,
    pub bicycles: usize,
    pub free_slots: usize,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
}
