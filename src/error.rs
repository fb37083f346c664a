//! Typed errors for the registry and allocation core.
//!
//! All fallible operations in this crate return [`NetworkError`]. Errors are
//! propagated to the caller, never swallowed; collaborator misuse (for
//! example placing a bicycle into a station the caller already knows is full)
//! is reported the same way so callers can decide whether it is fatal.

/// Errors produced by network creation, lookup, and bicycle allocation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NetworkError {
    /// A network with the same name (compared case-insensitively) already exists.
    #[error("network name '{0}' is already in use")]
    DuplicateName(String),

    /// A bicycle allocation asked for more bicycles than there are free slots.
    #[error("not enough free slots: requested {requested} bicycles but only {available} slots are available")]
    NotEnoughSlots { requested: usize, available: usize },

    /// An id lookup found no matching entity.
    #[error("no {entity} with id {id}")]
    IdNotFound { entity: &'static str, id: u64 },

    /// A name lookup found no matching network.
    #[error("no network named '{0}'")]
    NameNotFound(String),

    /// A string did not name a supported station kind.
    #[error("unsupported station kind '{0}'")]
    UnsupportedKind(String),

    /// A string did not name a supported sort order.
    #[error("unsupported sort selector '{0}'")]
    UnsupportedSelector(String),

    /// A bicycle was offered to a station with no free slot.
    #[error("station {0} has no free parking slot")]
    StationFull(u64),

    /// A rental was requested from a station with no docked bicycle.
    #[error("station {0} has no bicycle to rent")]
    StationEmpty(u64),
}
