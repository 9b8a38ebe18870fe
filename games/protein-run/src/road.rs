use glam::Vec2;

use brawn_engine::{AssetError, CameraId, CompositeItem, ImageRegistry, Item, RenderLayer};

pub const ROAD_IMAGE: &str = "road.png";
pub const ROAD_TILE_SIZE: Vec2 = Vec2::new(0.25, 0.06);
pub const ROAD_TILES: usize = 12;
/// x offset of the first tile, so the road starts a little behind the spawn point.
const ROAD_START: f32 = -0.5;

/// A horizontal strip of road tiles, centered vertically on `pos.y`.
pub fn road(camera: CameraId, pos: Vec2, images: &ImageRegistry) -> Result<CompositeItem, AssetError> {
    let image = images.resolve(ROAD_IMAGE)?;
    let length = ROAD_TILE_SIZE.x * ROAD_TILES as f32;
    let mut road = CompositeItem::new(camera, pos, Vec2::new(length, ROAD_TILE_SIZE.y));
    road.set_z_value(RenderLayer::Terrain.z());
    for i in 0..ROAD_TILES {
        let x = ROAD_START + ROAD_TILE_SIZE.x * i as f32;
        road.add_item(
            Item::new(camera)
                .with_pos(Vec2::new(x, 0.0))
                .with_size(ROAD_TILE_SIZE)
                .with_image(image),
        );
    }
    Ok(road)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawn_engine::Drawable;

    #[test]
    fn tiles_are_laid_end_to_end() {
        let mut images = ImageRegistry::new();
        images.insert(ROAD_IMAGE, ROAD_IMAGE);
        let road = road(CameraId(0), Vec2::new(0.0, 0.2), &images).unwrap();
        assert_eq!(road.len(), ROAD_TILES);
        assert_eq!(road.z_value(), RenderLayer::Terrain.z());
        let xs: Vec<f32> = road.children().map(|t| t.pos().x).collect();
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - ROAD_TILE_SIZE.x).abs() < 1e-6);
        }
        assert!(road.children().all(|t| t.pos().y == 0.2));
    }

    #[test]
    fn missing_tile_image_is_an_error() {
        assert!(road(CameraId(0), Vec2::ZERO, &ImageRegistry::new()).is_err());
    }
}
