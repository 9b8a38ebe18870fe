/// Named z values for top-level items.
///
/// Items are drawn back-to-front by ascending z. Layers are spaced so a game
/// can slot its own values in between (e.g. `Terrain.z() + 5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RenderLayer {
    Background,
    Terrain,
    #[default]
    Objects,
    Foreground,
    UI,
}

impl RenderLayer {
    /// z value items on this layer should use.
    pub fn z(self) -> i32 {
        match self {
            RenderLayer::Background => 0,
            RenderLayer::Terrain => 20,
            RenderLayer::Objects => 30,
            RenderLayer::Foreground => 40,
            RenderLayer::UI => 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_objects() {
        assert_eq!(RenderLayer::default(), RenderLayer::Objects);
    }

    #[test]
    fn z_is_back_to_front() {
        assert!(RenderLayer::Background.z() < RenderLayer::Terrain.z());
        assert!(RenderLayer::Terrain.z() < RenderLayer::Objects.z());
        assert!(RenderLayer::Objects.z() < RenderLayer::Foreground.z());
        assert!(RenderLayer::Foreground.z() < RenderLayer::UI.z());
    }
}
