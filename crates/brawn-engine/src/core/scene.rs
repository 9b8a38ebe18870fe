use crate::api::types::ItemId;
use crate::components::drawable::Drawable;
use crate::renderer::camera::Cameras;
use crate::renderer::rect::ScreenRect;
use crate::renderer::traits::Surface;

/// Top-level item storage for one scene, plus the cameras its items project through.
///
/// `N` is the game's node type, usually an enum over the kinds of items the
/// scene holds. Items are kept in spawn order; draw order comes from z values.
pub struct Scene<N> {
    items: Vec<(ItemId, N)>,
    pub cameras: Cameras,
    next_id: u32,
}

impl<N: Drawable> Scene<N> {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a scene with a specific item capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cameras: Cameras::new(),
            next_id: 1,
        }
    }

    /// Add an item to the scene and return its id.
    pub fn spawn(&mut self, node: N) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push((id, node));
        id
    }

    /// Remove an item by ID, keeping the order of the rest. Returns the removed item if found.
    pub fn despawn(&mut self, id: ItemId) -> Option<N> {
        let idx = self.items.iter().position(|(i, _)| *i == id)?;
        Some(self.items.remove(idx).1)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|(i, _)| *i == id)
    }

    /// Get a reference to an item by ID.
    pub fn get(&self, id: ItemId) -> Option<&N> {
        self.items.iter().find(|(i, _)| *i == id).map(|(_, n)| n)
    }

    /// Get a mutable reference to an item by ID.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut N> {
        self.items.iter_mut().find(|(i, _)| *i == id).map(|(_, n)| n)
    }

    /// Screen rect of an item, if it is still in the scene.
    pub fn rect_of(&self, id: ItemId) -> Option<ScreenRect> {
        self.get(id).map(|n| n.rect(&self.cameras))
    }

    /// Iterate over all items in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &N)> {
        self.items.iter().map(|(i, n)| (*i, n))
    }

    /// Iterate over all items mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ItemId, &mut N)> {
        self.items.iter_mut().map(|(i, n)| (*i, n))
    }

    /// Advance every item by one frame, in spawn order.
    pub fn update(&mut self) {
        for (_, node) in &mut self.items {
            node.update();
        }
    }

    /// Draw every item back-to-front. Equal z keeps spawn order.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let mut order: Vec<&N> = self.items.iter().map(|(_, n)| n).collect();
        order.sort_by_key(|n| n.z_value());
        for node in order {
            node.draw(&self.cameras, surface);
        }
    }

    /// Remove every item in `group` whose rect overlaps `target`'s rect.
    ///
    /// Hits are dropped from both `group` and the scene, so each one is
    /// consumed at most once. Ids in `group` that are no longer in the scene
    /// are pruned as well. Returns the removed items in group order; an
    /// unknown `target` or an empty group collects nothing.
    pub fn collect_overlapping(&mut self, target: ItemId, group: &mut Vec<ItemId>) -> Vec<N> {
        let Some(target_rect) = self.rect_of(target) else {
            return Vec::new();
        };

        let mut hits = Vec::new();
        group.retain(|&id| match self.rect_of(id) {
            Some(rect) if rect.intersects(&target_rect) => {
                hits.push(id);
                false
            }
            Some(_) => true,
            None => false,
        });

        hits.into_iter().filter_map(|id| self.despawn(id)).collect()
    }

    /// Number of items in the scene.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear all items. Cameras are kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<N: Drawable> Default for Scene<N> {
    fn default() -> Self {
        Self::new()
    }
}
