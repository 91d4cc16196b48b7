//! Borderland Visualization
//!
//! Drawing-side model of the territory border.
//!
//! # Architecture
//!
//! - **Outline**: border hexes stroked along edges that face unclaimed space
//! - **Animation**: crawling dash offset derived from the frame counter
//! - **Scheduler**: per-frame callbacks fed a monotonically increasing frame
//! - **Scene**: a territory, its layout and its animation in one place
//!
//! Animation is cosmetic. Nothing here mutates territory state except the
//! explicit claimant calls on [`BorderScene`].

mod animation;
mod outline;
mod scene;
mod scheduler;

pub use animation::{DashAnimation, DashStyle};
pub use outline::{border_outline, open_edges, Segment};
pub use scene::{BorderScene, Label, SceneFrame, VisConfig};
pub use scheduler::{CallbackId, FrameScheduler, MIN_TICK_PERIOD};

#[cfg(test)]
mod tests {
    use super::*;
    use borderland_territory::Claimant;
    use borderland_topology::HexPoint;

    #[test]
    fn outline_follows_territory_changes() {
        let mut scene = BorderScene::new(&VisConfig::default()).unwrap();
        scene.place_claimant(HexPoint::ORIGIN, Claimant::TownCenter).unwrap();
        let single = scene.render().outline.len();

        scene.place_claimant(HexPoint::new(4, 0), Claimant::Tower).unwrap();
        let merged = scene.render().outline.len();
        // Two touching claims share a seam, so the merged outline is shorter
        // than two separate ones
        assert!(merged < 2 * single);

        scene.remove_claimant(HexPoint::new(4, 0)).unwrap();
        assert_eq!(scene.render().outline.len(), single);
    }
}
