//! Borderland Territory
//!
//! Claimed territory on the hex lattice, maintained incrementally.
//!
//! # Model
//!
//! - **Registry**: which building stands on which hex. Claim disks are
//!   padded with `Blank` placeholders so every claimed hex is registered.
//! - **Border**: the outer edge of the union of all claim disks. A hex in any
//!   claimant's inner disk is never border.
//! - **Pending destruction**: hexes that just dropped out of the territory,
//!   drained by whoever draws them.
//!
//! # Locality
//!
//! Placing or removing a claimant only inspects claimants within twice the
//! claim radius of the changed hex. Nothing ever rescans the whole map.
//!
//! # Usage
//!
//! ```
//! use borderland_territory::{Claimant, TerritoryState};
//! use borderland_topology::HexPoint;
//!
//! let mut state = TerritoryState::new();
//! state.place_claimant(HexPoint::ORIGIN, Claimant::TownCenter)?;
//! assert_eq!(state.registry().len(), 19);
//! assert_eq!(state.border().len(), 12);
//! # Ok::<(), borderland_territory::Error>(())
//! ```

mod border;
mod building;
mod error;
mod events;
mod registry;
mod render;
mod state;

pub use border::{ClaimShape, CLAIM_RADIUS, MAX_CLAIM_RADIUS};
pub use building::{Building, BuildingKind, Claimant, Resource};
pub use error::{Error, Result};
pub use events::{TerritoryEvent, TerritorySnapshot};
pub use registry::TerritoryRegistry;
pub use render::{Detached, DrawList, Drawable, RenderAttachment, RenderHandle};
pub use state::{SeedStep, TerritoryConfig, TerritoryState, DEMO_SEED};
