use glam::Vec2;

use brawn_engine::{AssetError, CameraId, ImageRegistry, Item, RenderLayer};

pub const PROTEIN_IMAGE: &str = "protein.png";
pub const PROTEIN_SIZE: Vec2 = Vec2::new(0.03, 0.03);

/// Pickups sit just above the road surface.
pub const PROTEIN_LIFT: f32 = -0.02;

/// x positions of the proteins laid out along each lane.
pub const PROTEIN_XS: [f32; 4] = [0.0, 0.3, 0.7, 1.0];

/// A protein pickup centered at `pos`.
pub fn protein(camera: CameraId, pos: Vec2, images: &ImageRegistry) -> Result<Item, AssetError> {
    Ok(Item::with_image_id(camera, pos, PROTEIN_SIZE, images, PROTEIN_IMAGE)?
        .with_z(RenderLayer::Terrain.z() + 5))
}

/// Positions of one lane's proteins for a road at height `road_y`.
pub fn lane_layout(road_y: f32) -> impl Iterator<Item = Vec2> {
    PROTEIN_XS
        .into_iter()
        .map(move |x| Vec2::new(x, road_y + PROTEIN_LIFT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_road_height() {
        let spots: Vec<Vec2> = lane_layout(0.2).collect();
        assert_eq!(spots.len(), 4);
        assert!(spots.iter().all(|p| (p.y - 0.18).abs() < 1e-6));
        assert_eq!(spots[2].x, 0.7);
    }
}
