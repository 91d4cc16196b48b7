//! Building kinds and their definitions.

use std::fmt;

use borderland_topology::HexPoint;
use serde::{Deserialize, Serialize};

use crate::render::RenderHandle;

/// Construction materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Wood,
    Stone,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Wood => "wood",
            Resource::Stone => "stone",
        })
    }
}

/// Everything that can occupy a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildingKind {
    /// Placeholder marking a claimed hex with nothing on it
    Blank,
    TownCenter,
    LumberjackHut,
    Tower,
}

impl BuildingKind {
    pub const ALL: [Self; 4] = [
        Self::Blank,
        Self::TownCenter,
        Self::LumberjackHut,
        Self::Tower,
    ];

    /// Whether this building projects territory around itself.
    pub fn is_claimant(&self) -> bool {
        match self {
            BuildingKind::TownCenter | BuildingKind::Tower => true,
            BuildingKind::Blank | BuildingKind::LumberjackHut => false,
        }
    }

    /// Label drawn on the hex.
    pub fn label(&self) -> &'static str {
        match self {
            BuildingKind::Blank => "-",
            BuildingKind::TownCenter => "town center",
            BuildingKind::LumberjackHut => "lumberjack's hut",
            BuildingKind::Tower => "tower",
        }
    }

    /// Materials consumed to construct one.
    pub fn requirements(&self) -> &'static [(Resource, u32)] {
        match self {
            BuildingKind::Blank | BuildingKind::TownCenter => &[],
            BuildingKind::LumberjackHut => &[(Resource::Wood, 2), (Resource::Stone, 2)],
            BuildingKind::Tower => &[(Resource::Wood, 2), (Resource::Stone, 3)],
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The building kinds that claim territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Claimant {
    TownCenter,
    Tower,
}

impl From<Claimant> for BuildingKind {
    fn from(claimant: Claimant) -> Self {
        match claimant {
            Claimant::TownCenter => BuildingKind::TownCenter,
            Claimant::Tower => BuildingKind::Tower,
        }
    }
}

impl TryFrom<BuildingKind> for Claimant {
    type Error = BuildingKind;

    fn try_from(kind: BuildingKind) -> Result<Self, Self::Error> {
        match kind {
            BuildingKind::TownCenter => Ok(Claimant::TownCenter),
            BuildingKind::Tower => Ok(Claimant::Tower),
            BuildingKind::Blank | BuildingKind::LumberjackHut => Err(kind),
        }
    }
}

/// A building standing on one hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub kind: BuildingKind,
    pub hex: HexPoint,
    /// Handle of the drawable attached for this building
    pub handle: RenderHandle,
}
