//! Built-in asset manifest for the game.

/// Every image the game loads, in handle order.
pub const MANIFEST_JSON: &str = r#"{
    "images": [
        { "id": "background.png", "path": "assets/background.png" },
        { "id": "road.png", "path": "assets/road.png" },
        { "id": "protein.png", "path": "assets/protein.png" },
        { "id": "car.png", "path": "assets/car.png" },
        { "id": "head.png", "path": "assets/player/head.png" },
        { "id": "left_leg.png", "path": "assets/player/left_leg.png" },
        { "id": "right_leg.png", "path": "assets/player/right_leg.png" },
        { "id": "body_w.png", "path": "assets/player/body_w.png" },
        { "id": "body_m.png", "path": "assets/player/body_m.png" },
        { "id": "body_s.png", "path": "assets/player/body_s.png" },
        { "id": "left_arm_w.png", "path": "assets/player/left_arm_w.png" },
        { "id": "left_arm_m.png", "path": "assets/player/left_arm_m.png" },
        { "id": "left_arm_s.png", "path": "assets/player/left_arm_s.png" },
        { "id": "right_arm_w.png", "path": "assets/player/right_arm_w.png" },
        { "id": "right_arm_m.png", "path": "assets/player/right_arm_m.png" },
        { "id": "right_arm_s.png", "path": "assets/player/right_arm_s.png" }
    ]
}"#;
