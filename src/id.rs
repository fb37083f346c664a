//! Identifier generation.
//!
//! This file provides the process-wide identifier issuer used by every
//! entity in the system. Networks, stations, users, and bicycles all draw
//! from a single shared id-space, so no two live entities share an id
//! regardless of kind.

/// First id handed out by a fresh generator.
pub const ID_BASE: u64 = 1;

/// Strictly increasing integer id issuer.
///
/// The generator is owned by the [`NetworkRegistry`](crate::registry::NetworkRegistry)
/// and passed by mutable reference to every construction site that needs a
/// fresh id. Tests create their own instance instead of sharing global state.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator { next: ID_BASE }
    }

    /// Return the next unused id. Must be called exactly once per new entity.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut gen = IdGenerator::new();
        let a = gen.next_id();
        let b = gen.next_id();
        let c = gen.next_id();
        assert_eq!(a, ID_BASE);
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn test_independent_generators_do_not_interfere() {
        let mut first = IdGenerator::new();
        let mut second = IdGenerator::new();
        first.next_id();
        first.next_id();
        assert_eq!(second.next_id(), ID_BASE);
    }
}
