// Composite items: a parent transform plus owned child items placed at local offsets.
//
// Children are plain `Item`s. Their stored position is overwritten with
// `parent + offset` every time the composite moves or updates, so the only
// source of truth for a child's placement is its offset.

use glam::Vec2;

use crate::api::types::CameraId;
use crate::components::drawable::Drawable;
use crate::components::item::Item;
use crate::renderer::camera::Cameras;
use crate::renderer::rect::ScreenRect;
use crate::renderer::traits::Surface;

/// Index of a child inside its composite, returned by `add_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex(pub usize);

#[derive(Debug, Clone)]
struct Child {
    item: Item,
    offset: Vec2,
}

/// An item that owns an ordered set of children positioned relative to it.
#[derive(Debug, Clone)]
pub struct CompositeItem {
    base: Item,
    children: Vec<Child>,
}

impl CompositeItem {
    pub fn new(camera: CameraId, pos: Vec2, size: Vec2) -> Self {
        Self {
            base: Item::new(camera).with_pos(pos).with_size(size),
            children: Vec::new(),
        }
    }

    /// Append a child. Its current position is taken as the offset from this composite.
    pub fn add_item(&mut self, mut child: Item) -> ChildIndex {
        let offset = child.pos();
        child.set_pos(self.base.pos() + offset);
        self.children.push(Child { item: child, offset });
        ChildIndex(self.children.len() - 1)
    }

    pub fn child(&self, index: ChildIndex) -> Option<&Item> {
        self.children.get(index.0).map(|c| &c.item)
    }

    pub fn child_mut(&mut self, index: ChildIndex) -> Option<&mut Item> {
        self.children.get_mut(index.0).map(|c| &mut c.item)
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Item> {
        self.children.iter().map(|c| &c.item)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn size(&self) -> Vec2 {
        self.base.size()
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.base.set_size(size);
    }

    pub fn set_z_value(&mut self, z: i32) {
        self.base.set_z_value(z);
    }

    pub fn camera(&self) -> CameraId {
        self.base.camera()
    }

    /// Recompute every child's absolute position from the composite origin.
    pub fn sync_children(&mut self) {
        let origin = self.base.pos();
        for child in &mut self.children {
            child.item.set_pos(origin + child.offset);
        }
    }

    /// Draw the given children in exactly the given order.
    /// Indices that do not name a child are skipped.
    pub fn draw_ordered(&self, order: &[ChildIndex], cameras: &Cameras, surface: &mut dyn Surface) {
        for index in order {
            if let Some(child) = self.children.get(index.0) {
                child.item.draw(cameras, surface);
            }
        }
    }
}

impl Drawable for CompositeItem {
    fn update(&mut self) {
        self.sync_children();
        for child in &mut self.children {
            child.item.update();
        }
    }

    /// Children by ascending z; equal z keeps insertion order.
    fn draw(&self, cameras: &Cameras, surface: &mut dyn Surface) {
        let mut order: Vec<usize> = (0..self.children.len()).collect();
        order.sort_by_key(|&i| self.children[i].item.z_value());
        for i in order {
            self.children[i].item.draw(cameras, surface);
        }
    }

    /// Union of the children's rects, or the composite's own rect when it has none.
    fn rect(&self, cameras: &Cameras) -> ScreenRect {
        self.children
            .iter()
            .map(|c| c.item.rect(cameras))
            .reduce(|acc, r| acc.union(&r))
            .unwrap_or_else(|| self.base.rect(cameras))
    }

    fn z_value(&self) -> i32 {
        self.base.z_value()
    }

    fn pos(&self) -> Vec2 {
        self.base.pos()
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.base.set_pos(pos);
        self.sync_children();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ImageHandle;
    use crate::renderer::camera::Camera;
    use crate::renderer::instance::RenderBuffer;

    fn cameras() -> (Cameras, CameraId) {
        let mut cameras = Cameras::new();
        let cam = cameras.add(Camera::new(1000.0, 500.0));
        (cameras, cam)
    }

    #[test]
    fn children_follow_composite_position() {
        let (_, cam) = cameras();
        let mut comp = CompositeItem::new(cam, Vec2::ZERO, Vec2::splat(0.1));
        let offsets = [Vec2::new(0.01, -0.02), Vec2::new(-0.03, 0.04), Vec2::ZERO];
        let ids: Vec<ChildIndex> = offsets
            .iter()
            .map(|&o| comp.add_item(Item::new(cam).with_pos(o)))
            .collect();

        let p = Vec2::new(0.25, -0.125);
        comp.set_pos(p);
        comp.update();

        for (id, offset) in ids.iter().zip(offsets) {
            assert_eq!(comp.child(*id).unwrap().pos(), p + offset);
        }
    }

    #[test]
    fn add_item_places_child_relative_to_current_origin() {
        let (_, cam) = cameras();
        let mut comp = CompositeItem::new(cam, Vec2::new(1.0, 1.0), Vec2::ONE);
        let id = comp.add_item(Item::new(cam).with_pos(Vec2::new(0.5, 0.0)));
        assert_eq!(comp.child(id).unwrap().pos(), Vec2::new(1.5, 1.0));
        comp.set_pos(Vec2::ZERO);
        assert_eq!(comp.child(id).unwrap().pos(), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn update_resets_children_moved_directly() {
        let (_, cam) = cameras();
        let mut comp = CompositeItem::new(cam, Vec2::ZERO, Vec2::ONE);
        let id = comp.add_item(Item::new(cam).with_pos(Vec2::new(0.1, 0.0)));
        comp.child_mut(id).unwrap().set_pos(Vec2::new(9.0, 9.0));
        comp.update();
        assert_eq!(comp.child(id).unwrap().pos(), Vec2::new(0.1, 0.0));
    }

    #[test]
    fn rect_is_union_of_children() {
        let (cameras, cam) = cameras();
        let mut comp = CompositeItem::new(cam, Vec2::ZERO, Vec2::splat(0.01));
        let a = comp.add_item(Item::new(cam).with_pos(Vec2::new(-0.1, 0.0)).with_size(Vec2::splat(0.02)));
        let b = comp.add_item(Item::new(cam).with_pos(Vec2::new(0.1, 0.0)).with_size(Vec2::splat(0.02)));
        let r = comp.rect(&cameras);
        let ra = comp.child(a).unwrap().rect(&cameras);
        let rb = comp.child(b).unwrap().rect(&cameras);
        assert_eq!(r.x, ra.x);
        assert_eq!(r.right(), rb.right());
    }

    #[test]
    fn empty_composite_uses_own_rect() {
        let (cameras, cam) = cameras();
        let comp = CompositeItem::new(cam, Vec2::ZERO, Vec2::splat(0.1));
        let r = comp.rect(&cameras);
        assert!((r.w - 100.0).abs() < 1e-3);
    }

    #[test]
    fn default_draw_uses_insertion_order_then_z() {
        let (cameras, cam) = cameras();
        let mut comp = CompositeItem::new(cam, Vec2::ZERO, Vec2::ONE);
        let leaf = |img: u32, z: i32| {
            Item::new(cam)
                .with_size(Vec2::splat(0.05))
                .with_image(ImageHandle(img))
                .with_z(z)
        };
        comp.add_item(leaf(1, 0));
        comp.add_item(leaf(2, 5));
        comp.add_item(leaf(3, 0));
        let mut buf = RenderBuffer::new();
        comp.draw(&cameras, &mut buf);
        let drawn: Vec<u32> = buf.instances.iter().map(|i| i.image().0).collect();
        assert_eq!(drawn, vec![1, 3, 2]);
    }

    #[test]
    fn draw_ordered_follows_given_sequence() {
        let (cameras, cam) = cameras();
        let mut comp = CompositeItem::new(cam, Vec2::ZERO, Vec2::ONE);
        let ids: Vec<ChildIndex> = (0..3)
            .map(|i| {
                comp.add_item(
                    Item::new(cam)
                        .with_size(Vec2::splat(0.05))
                        .with_image(ImageHandle(i)),
                )
            })
            .collect();
        let mut buf = RenderBuffer::new();
        comp.draw_ordered(&[ids[2], ids[0], ChildIndex(42), ids[1]], &cameras, &mut buf);
        let drawn: Vec<u32> = buf.instances.iter().map(|i| i.image().0).collect();
        assert_eq!(drawn, vec![2, 0, 1]);
    }
}
