//! The demo flow end to end: initialize, animate, render.

use std::time::Duration;

use borderland_territory::{BuildingKind, Error};
use borderland_topology::HexPoint;
use borderland_vis::{BorderScene, FrameScheduler, VisConfig};

#[test]
fn demo_territory_animates_and_renders() {
    let config: VisConfig = serde_json::from_str(r#"{ "frames": 48, "tick_ms": 1 }"#).unwrap();
    assert_eq!(config.dash.dash_length, 6.0);

    let mut scene = BorderScene::new(&config).unwrap();
    scene.initialize().unwrap();

    let state = scene.state();
    assert_eq!(state.registry().claimants().count(), 2);
    assert_eq!(
        state.registry().kind_at(HexPoint::new(2, -2)),
        Some(BuildingKind::Blank)
    );
    // Every hex only the removed tower claimed was handed over
    assert!(!scene.take_destroyed().is_empty());

    let mut scheduler = FrameScheduler::new();
    scene.animate_with(&mut scheduler);
    let last = tokio_test::block_on(
        scheduler.run_for(config.frames, Duration::from_millis(config.tick_ms)),
    );
    assert_eq!(last, 48);

    let frame = scene.render();
    assert_eq!(frame.frame, 48);
    // 48 frames at 10/48 per frame is exactly one period
    assert!(frame.dash_offset.abs() < 1e-9 || (frame.dash_offset - 10.0).abs() < 1e-9);

    let json = serde_json::to_value(&frame).unwrap();
    assert!(json["outline"].as_array().is_some_and(|s| !s.is_empty()));
    assert!(json["labels"]
        .as_array()
        .is_some_and(|labels| labels.iter().any(|l| l["text"] == "tower")));
}

#[test]
fn out_of_bounds_claim_radius_is_rejected() {
    for radius in ["0", "65", "4294967295"] {
        let json = format!(r#"{{ "territory": {{ "claim_radius": {radius} }} }}"#);
        let config: VisConfig = serde_json::from_str(&json).unwrap();
        assert!(
            matches!(BorderScene::new(&config), Err(Error::InvalidConfig(_))),
            "radius {radius} was accepted"
        );
    }
}
