use glam::Vec2;

use brawn_engine::{
    AssetError, CameraId, Cameras, Drawable, ImageRegistry, Item, RenderLayer, ScreenRect,
    Surface,
};

use crate::heavy::HeavyObject;

pub const CAR_IMAGE: &str = "car.png";
pub const CAR_SIZE: Vec2 = Vec2::new(0.2, 0.1);
pub const CAR_LIFE: f32 = 100.0;

// Launch arc once the car breaks loose (world units / degrees per frame)
const LAUNCH_VELOCITY: Vec2 = Vec2::new(0.02, -0.03);
const LAUNCH_GRAVITY: f32 = 0.001;
const LAUNCH_SPIN: f32 = 12.0;

/// A parked car: blocks a lane until a player punches it into the air.
pub struct Car {
    item: Item,
    life: f32,
    max_life: f32,
    flying: bool,
    velocity: Vec2,
}

impl Car {
    pub fn new(camera: CameraId, pos: Vec2, images: &ImageRegistry) -> Result<Self, AssetError> {
        let item = Item::with_image_id(camera, pos, CAR_SIZE, images, CAR_IMAGE)?
            .with_z(RenderLayer::Objects.z() - 1);
        Ok(Self {
            item,
            life: CAR_LIFE,
            max_life: CAR_LIFE,
            flying: false,
            velocity: Vec2::ZERO,
        })
    }

    pub fn is_flying(&self) -> bool {
        self.flying
    }

    pub fn rotation(&self) -> f32 {
        self.item.rotation()
    }
}

impl HeavyObject for Car {
    fn life(&self) -> f32 {
        self.life
    }

    fn set_life(&mut self, life: f32) {
        self.life = life;
    }

    fn max_life(&self) -> f32 {
        self.max_life
    }

    fn fly(&mut self) {
        if !self.flying {
            self.flying = true;
            self.velocity = LAUNCH_VELOCITY;
            log::info!("car: launched from {:?}", self.item.pos());
        }
    }
}

impl Drawable for Car {
    fn update(&mut self) {
        if !self.flying {
            return;
        }
        self.velocity.y += LAUNCH_GRAVITY;
        let pos = self.item.pos() + self.velocity;
        self.item.set_pos(pos);
        self.item.set_rotation(self.item.rotation() + LAUNCH_SPIN);
    }

    fn draw(&self, cameras: &Cameras, surface: &mut dyn Surface) {
        self.item.draw(cameras, surface);
    }

    fn rect(&self, cameras: &Cameras) -> ScreenRect {
        self.item.rect(cameras)
    }

    fn z_value(&self) -> i32 {
        self.item.z_value()
    }

    fn pos(&self) -> Vec2 {
        self.item.pos()
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.item.set_pos(pos);
    }
}
