//! Bicycle entities.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed set of bicycle kinds the network stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BicycleKind {
    Mechanical,
    Electrical,
}

impl BicycleKind {
    /// Draw a kind uniformly at random, used when stocking a network.
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            BicycleKind::Mechanical
        } else {
            BicycleKind::Electrical
        }
    }
}

/// A single bicycle. Owned by the parking slot it is docked in.
#[derive(Debug, Clone, PartialEq)]
pub struct Bicycle {
    id: u64,
    kind: BicycleKind,
}

impl Bicycle {
    pub fn new(id: u64, kind: BicycleKind) -> Self {
        Bicycle { id, kind }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> BicycleKind {
        self.kind
    }
}
