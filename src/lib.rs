//! # Velonet - Network registry and resource allocation for bike-sharing simulations
//!
//! This library models the core of a bike-sharing network: uniquely-named
//! networks that own stations and users, random geographic placement of
//! stations, and random distribution of bicycles across station slots under a
//! capacity constraint.
//!
//! ## Overview
//!
//! Velonet builds city-scale bike-share topologies for simulation and
//! testing. A [`registry::NetworkRegistry`] owns every network and the shared
//! id-space; `setup_network` creates a network, scatters randomly-kinded
//! stations across a square service region, attaches parking slots, and
//! stocks the stations with bicycles. All randomness flows through an
//! injected `rand::Rng`, so seeded runs are reproducible.
//!
//! ## Architecture
//!
//! - `id`: shared monotonically-increasing id issuer
//! - `error`: typed errors for creation, lookup, and allocation
//! - `geo`: square service region and random placement
//! - `bicycle`: bicycle entities and kinds
//! - `station`: stations, parking slots, usage counters
//! - `user`: rider entities
//! - `network`: the network entity, bicycle distribution, station orderings
//! - `registry`: network ownership, name uniqueness, cross-network lookup,
//!   setup orchestration, JSON snapshots
//! - `config`: YAML scenario files driving the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use velonet::registry::{NetworkRegistry, SetupPlan};
//!
//! let mut registry = NetworkRegistry::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! let plan = SetupPlan {
//!     name: "Paris".to_string(),
//!     station_count: 10,
//!     slots_per_station: 10,
//!     side_km: 10.0,
//!     bike_count: 75,
//! };
//! let network = registry.setup_network(&plan, &mut rng)?;
//! assert_eq!(network.stations().len(), 10);
//! # Ok::<(), velonet::error::NetworkError>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible library operations return [`error::NetworkError`], a `thiserror`
//! enum; the binary wraps everything in `color_eyre::Result` for reporting.

pub mod bicycle;
pub mod config;
pub mod error;
pub mod geo;
pub mod id;
pub mod network;
pub mod registry;
pub mod station;
pub mod user;
