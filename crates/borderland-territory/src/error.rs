//! Error types for territory operations.

use borderland_topology::HexPoint;
use thiserror::Error;

use crate::BuildingKind;

/// Result type for territory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations. An operation that returns one of these has not
/// touched the territory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Nothing is built on the hex
    #[error("no building at {0}")]
    Vacant(HexPoint),

    /// The building on the hex does not claim territory
    #[error("{kind} at {hex} does not claim territory")]
    NotClaimant { hex: HexPoint, kind: BuildingKind },

    /// The hex already holds a claimant
    #[error("{kind} at {hex} already claims territory")]
    AlreadyClaimant { hex: HexPoint, kind: BuildingKind },

    /// The hex lies outside the supported coordinate range
    #[error("{0} is outside the lattice")]
    OutOfRange(HexPoint),

    /// Blank placeholders are managed by the territory itself
    #[error("cannot place a placeholder at {0}")]
    Placeholder(HexPoint),

    /// Configuration rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
