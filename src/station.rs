//! Station entities and their parking capacity.
//!
//! A station owns a fixed number of parking slots, each of which can dock at
//! most one bicycle. The free-slot counter drives the bicycle distribution
//! algorithm in [`crate::network`]: a station must never be offered a bicycle
//! when it has zero free slots, and every successful docking reduces the free
//! count by exactly one.
//!
//! Stations also keep compact usage counters ([`UsageStats`]) that feed the
//! two station orderings (least occupied over a window, most used overall).

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bicycle::Bicycle;
use crate::error::NetworkError;
use crate::geo::GpsLocation;

/// Closed set of station kinds.
///
/// `Plus` stations grant service bonuses handled outside this core; here the
/// kind only drives the per-kind partition inside a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationKind {
    Standard,
    Plus,
}

impl StationKind {
    /// Draw a kind uniformly at random, used during network setup.
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            StationKind::Standard
        } else {
            StationKind::Plus
        }
    }
}

/// Station selection filter for [`crate::network::Network::stations_of_kind`].
///
/// The `FromStr` adapter accepts the user-facing strings ("All", "Standard",
/// "Plus") case-insensitively; anything else is an `UnsupportedKind` error.
/// The adapter exists for the CLI boundary only, the core always works with
/// the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationKindFilter {
    All,
    Standard,
    Plus,
}

impl FromStr for StationKindFilter {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StationKindFilter::All),
            "standard" => Ok(StationKindFilter::Standard),
            "plus" => Ok(StationKindFilter::Plus),
            _ => Err(NetworkError::UnsupportedKind(s.to_string())),
        }
    }
}

/// A single parking unit. Holds at most one docked bicycle.
#[derive(Debug, Default)]
pub struct ParkingSlot {
    bicycle: Option<Bicycle>,
}

impl ParkingSlot {
    pub fn is_free(&self) -> bool {
        self.bicycle.is_none()
    }

    pub fn bicycle(&self) -> Option<&Bicycle> {
        self.bicycle.as_ref()
    }
}

/// Usage counters backing the station orderings.
///
/// Every rental and return is recorded together with the number of bicycles
/// docked right after the operation. Occupancy over a time window is the mean
/// docked count across the samples inside the window, normalized by capacity.
#[derive(Debug, Default)]
pub struct UsageStats {
    rentals: u64,
    returns: u64,
    occupancy_samples: Vec<(u64, usize)>,
}

impl UsageStats {
    fn record(&mut self, at: u64, docked: usize) {
        self.occupancy_samples.push((at, docked));
    }

    /// Total rentals plus returns, the "most used" metric.
    pub fn total_operations(&self) -> u64 {
        self.rentals + self.returns
    }

    /// Mean occupancy rate over `[begin, end]`, in `0.0..=1.0`.
    ///
    /// Returns 0.0 when the station has no capacity or no sample falls in the
    /// window, which sorts never-touched stations as least occupied.
    pub fn occupancy_rate(&self, capacity: usize, begin: u64, end: u64) -> f64 {
        if capacity == 0 {
            return 0.0;
        }
        let in_window: Vec<usize> = self
            .occupancy_samples
            .iter()
            .filter(|(at, _)| *at >= begin && *at <= end)
            .map(|(_, docked)| *docked)
            .collect();
        if in_window.is_empty() {
            return 0.0;
        }
        let total: usize = in_window.iter().sum();
        total as f64 / (in_window.len() * capacity) as f64
    }
}

/// A bicycle station: identity, kind, position, slots, usage counters.
#[derive(Debug)]
pub struct Station {
    id: u64,
    kind: StationKind,
    location: GpsLocation,
    slots: Vec<ParkingSlot>,
    stats: UsageStats,
}

impl Station {
    /// Construct a station with no parking slots attached yet.
    pub fn new(id: u64, kind: StationKind, location: GpsLocation) -> Self {
        Station {
            id,
            kind,
            location,
            slots: Vec::new(),
            stats: UsageStats::default(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> StationKind {
        self.kind
    }

    pub fn location(&self) -> GpsLocation {
        self.location
    }

    /// Attach one empty parking slot.
    pub fn add_parking_slot(&mut self) {
        self.slots.push(ParkingSlot::default());
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn free_slot_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_free()).count()
    }

    pub fn bicycle_count(&self) -> usize {
        self.slots.len() - self.free_slot_count()
    }

    pub fn stats(&self) -> &UsageStats {
        &self.stats
    }

    /// Dock a bicycle into the first free slot.
    ///
    /// Fails with `StationFull` when every slot is taken; callers that
    /// respect the free-slot counter never hit that path.
    pub fn add_bicycle(&mut self, bicycle: Bicycle) -> Result<(), NetworkError> {
        match self.slots.iter_mut().find(|s| s.is_free()) {
            Some(slot) => {
                slot.bicycle = Some(bicycle);
                Ok(())
            }
            None => Err(NetworkError::StationFull(self.id)),
        }
    }

    /// Take a bicycle out for a rental at time `at`, recording the operation.
    pub fn rent_bicycle(&mut self, at: u64) -> Result<Bicycle, NetworkError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| !s.is_free())
            .ok_or(NetworkError::StationEmpty(self.id))?;
        let bicycle = slot.bicycle.take().expect("occupied slot holds a bicycle");
        self.stats.rentals += 1;
        let docked = self.bicycle_count();
        self.stats.record(at, docked);
        Ok(bicycle)
    }

    /// Dock a returned bicycle at time `at`, recording the operation.
    pub fn return_bicycle(&mut self, bicycle: Bicycle, at: u64) -> Result<(), NetworkError> {
        self.add_bicycle(bicycle)?;
        self.stats.returns += 1;
        let docked = self.bicycle_count();
        self.stats.record(at, docked);
        Ok(())
    }
}
