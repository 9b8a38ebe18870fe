//! Two-lane road scene: each player runs along its own road, picking up
//! proteins and punching the parked car at the end of the lane.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use brawn_engine::{
    AssetError, Camera, CameraId, Cameras, CompositeItem, Drawable, EngineContext, Game,
    GameConfig, InputEvent, Item, ItemId, Key, RenderLayer, Scene, ScreenRect, Surface,
};

use crate::car::Car;
use crate::heavy::HeavyObjectRef;
use crate::player::Player;
use crate::protein::{lane_layout, protein};
use crate::road::road;

pub const BACKGROUND_IMAGE: &str = "background.png";

/// Road heights, one per lane.
pub const ROAD_YS: [f32; 2] = [0.0, 0.2];
/// Players stand this far above their road.
const PLAYER_LIFT: f32 = -0.1;
/// Cars are parked this far down each lane.
const CAR_X: f32 = 1.4;
const CAR_LIFT: f32 = -0.05;

// Camera follow
const CAMERA_LEAD: f32 = 0.1;
const ZOOM_OUT_DISTANCE: f32 = 0.3;
const ZOOM_OUT_STEP: f32 = -0.02;
const BACKGROUND_PARALLAX: f32 = 0.1;

/// Everything the road scene can hold.
pub enum SceneNode {
    Image(Item),
    Road(CompositeItem),
    Player(Player),
    Protein(Item),
    Car(Rc<RefCell<Car>>),
}

impl Drawable for SceneNode {
    fn update(&mut self) {
        match self {
            SceneNode::Image(item) | SceneNode::Protein(item) => item.update(),
            SceneNode::Road(road) => road.update(),
            SceneNode::Player(player) => player.update(),
            SceneNode::Car(car) => car.borrow_mut().update(),
        }
    }

    fn draw(&self, cameras: &Cameras, surface: &mut dyn Surface) {
        match self {
            SceneNode::Image(item) | SceneNode::Protein(item) => item.draw(cameras, surface),
            SceneNode::Road(road) => road.draw(cameras, surface),
            SceneNode::Player(player) => player.draw(cameras, surface),
            SceneNode::Car(car) => car.borrow().draw(cameras, surface),
        }
    }

    fn rect(&self, cameras: &Cameras) -> ScreenRect {
        match self {
            SceneNode::Image(item) | SceneNode::Protein(item) => item.rect(cameras),
            SceneNode::Road(road) => road.rect(cameras),
            SceneNode::Player(player) => player.rect(cameras),
            SceneNode::Car(car) => car.borrow().rect(cameras),
        }
    }

    fn z_value(&self) -> i32 {
        match self {
            SceneNode::Image(item) | SceneNode::Protein(item) => item.z_value(),
            SceneNode::Road(road) => road.z_value(),
            SceneNode::Player(player) => player.z_value(),
            SceneNode::Car(car) => car.borrow().z_value(),
        }
    }

    fn pos(&self) -> Vec2 {
        match self {
            SceneNode::Image(item) | SceneNode::Protein(item) => item.pos(),
            SceneNode::Road(road) => road.pos(),
            SceneNode::Player(player) => player.pos(),
            SceneNode::Car(car) => car.borrow().pos(),
        }
    }

    fn set_pos(&mut self, pos: Vec2) {
        match self {
            SceneNode::Image(item) | SceneNode::Protein(item) => item.set_pos(pos),
            SceneNode::Road(road) => road.set_pos(pos),
            SceneNode::Player(player) => player.set_pos(pos),
            SceneNode::Car(car) => car.borrow_mut().set_pos(pos),
        }
    }
}

/// Key bindings for one player.
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub left: Key,
    pub right: Key,
    pub jump: Key,
}

pub const PLAYER_ONE_CONTROLS: Controls = Controls {
    left: Key::Left,
    right: Key::Right,
    jump: Key::Up,
};

pub const PLAYER_TWO_CONTROLS: Controls = Controls {
    left: Key::A,
    right: Key::D,
    jump: Key::W,
};

/// One player's road, pickups and car.
struct Lane {
    player: ItemId,
    controls: Controls,
    proteins: Vec<ItemId>,
    car: Option<Rc<RefCell<Car>>>,
    collected: u32,
}

pub struct RoadScene {
    config: GameConfig,
    scene: Scene<SceneNode>,
    camera: CameraId,
    background_camera: CameraId,
    lanes: Vec<Lane>,
}

impl RoadScene {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            scene: Scene::new(),
            camera: CameraId::default(),
            background_camera: CameraId::default(),
            lanes: Vec::new(),
        }
    }

    /// Build the scene content. Any missing image aborts the build.
    fn build(&mut self, ctx: &EngineContext) -> Result<(), AssetError> {
        let images = &ctx.images;
        let (w, h) = (ctx.config.screen_width, ctx.config.screen_height);

        self.scene = Scene::new();
        self.lanes.clear();
        self.camera = self.scene.cameras.add(Camera::new(w, h));
        self.background_camera = self.scene.cameras.add(Camera::new(w, h));

        let background = Item::with_image_id(
            self.background_camera,
            Vec2::ZERO,
            Vec2::new(1.0, h / w),
            images,
            BACKGROUND_IMAGE,
        )?
        .with_z(RenderLayer::Background.z());
        self.scene.spawn(SceneNode::Image(background));

        let controls = [PLAYER_ONE_CONTROLS, PLAYER_TWO_CONTROLS];
        for (road_y, controls) in ROAD_YS.into_iter().zip(controls) {
            self.scene
                .spawn(SceneNode::Road(road(self.camera, Vec2::new(0.0, road_y), images)?));

            let mut player = Player::new(self.camera, Vec2::new(0.0, road_y + PLAYER_LIFT), images)?;
            player.set_z_value(RenderLayer::Objects.z());
            let player = self.scene.spawn(SceneNode::Player(player));

            let mut proteins = Vec::new();
            for pos in lane_layout(road_y) {
                proteins.push(self.scene.spawn(SceneNode::Protein(protein(self.camera, pos, images)?)));
            }

            let car = Rc::new(RefCell::new(Car::new(
                self.camera,
                Vec2::new(CAR_X, road_y + CAR_LIFT),
                images,
            )?));
            self.scene.spawn(SceneNode::Car(car.clone()));

            self.lanes.push(Lane {
                player,
                controls,
                proteins,
                car: Some(car),
                collected: 0,
            });
        }

        log::info!(
            "road scene: {} items, {} lanes, {} proteins",
            self.scene.len(),
            self.lanes.len(),
            self.proteins_left()
        );
        Ok(())
    }

    pub fn player(&self, lane: usize) -> Option<&Player> {
        let id = self.lanes.get(lane)?.player;
        match self.scene.get(id)? {
            SceneNode::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn player_mut(&mut self, lane: usize) -> Option<&mut Player> {
        let id = self.lanes.get(lane)?.player;
        match self.scene.get_mut(id)? {
            SceneNode::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.scene.cameras[self.camera]
    }

    pub fn background_camera(&self) -> &Camera {
        &self.scene.cameras[self.background_camera]
    }

    pub fn scene(&self) -> &Scene<SceneNode> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<SceneNode> {
        &mut self.scene
    }

    /// Protein ids still waiting in `lane`.
    pub fn proteins(&self, lane: usize) -> &[ItemId] {
        self.lanes
            .get(lane)
            .map(|l| l.proteins.as_slice())
            .unwrap_or(&[])
    }

    pub fn proteins_left(&self) -> usize {
        self.lanes.iter().map(|l| l.proteins.len()).sum()
    }

    /// Proteins collected so far in `lane`.
    pub fn collected(&self, lane: usize) -> u32 {
        self.lanes.get(lane).map_or(0, |l| l.collected)
    }

    pub fn car(&self, lane: usize) -> Option<Rc<RefCell<Car>>> {
        self.lanes.get(lane)?.car.clone()
    }

    /// Route a key event to whichever player it is bound to.
    fn apply_key(&mut self, key: Key, pressed: bool) {
        let bound: Vec<(ItemId, Controls)> =
            self.lanes.iter().map(|l| (l.player, l.controls)).collect();
        for (id, controls) in bound {
            let Some(SceneNode::Player(player)) = self.scene.get_mut(id) else {
                continue;
            };
            if key == controls.right {
                player.set_right(pressed);
            } else if key == controls.left {
                player.set_left(pressed);
            } else if key == controls.jump {
                player.set_up(pressed);
            }
        }
    }

    /// Main camera tracks the midpoint of the first two players and zooms out when
    /// player one drifts too far; the background pans at a fraction of that.
    fn update_cameras(&mut self) {
        let positions: Vec<Vec2> = (0..self.lanes.len())
            .filter_map(|lane| self.player(lane).map(|p| p.pos()))
            .collect();
        let Some(&first) = positions.first() else {
            return;
        };
        let second = positions.get(1).copied().unwrap_or(first);

        let camera = &mut self.scene.cameras[self.camera];
        let x = 0.5 * first.x + 0.5 * second.x + CAMERA_LEAD / camera.zoom();
        camera.set_pos(Vec2::new(x, 0.0));
        if (camera.pos() - first).length() > ZOOM_OUT_DISTANCE / camera.zoom() {
            camera.dzoom(ZOOM_OUT_STEP);
        }

        let pan = camera.pos();
        let width = camera.screen_size().x;
        self.scene.cameras[self.background_camera].set_pos(BACKGROUND_PARALLAX * (pan / width));
    }

    /// Eat overlapping proteins, then start fights with parked cars.
    fn resolve_collisions(&mut self) {
        for lane in &mut self.lanes {
            let eaten = self.scene.collect_overlapping(lane.player, &mut lane.proteins);
            if !eaten.is_empty() {
                if let Some(SceneNode::Player(player)) = self.scene.get_mut(lane.player) {
                    for _ in &eaten {
                        player.gain_power();
                    }
                    log::info!(
                        "road scene: player {:?} ate {} protein(s), power {:.2}",
                        lane.player,
                        eaten.len(),
                        player.power()
                    );
                }
                lane.collected += eaten.len() as u32;
            }

            let Some(car) = &lane.car else { continue };
            if car.borrow().is_flying() {
                continue;
            }
            let Some(player_rect) = self.scene.rect_of(lane.player) else {
                continue;
            };
            if !car.borrow().rect(&self.scene.cameras).intersects(&player_rect) {
                continue;
            }
            if let Some(SceneNode::Player(player)) = self.scene.get_mut(lane.player) {
                if !player.is_attacking() {
                    let target: HeavyObjectRef = car.clone();
                    player.attack(&target);
                    player.stop();
                    log::info!("road scene: player {:?} attacks a car", lane.player);
                }
            }
        }
    }
}

impl Game for RoadScene {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError> {
        self.build(ctx)
    }

    fn handle_input(&mut self, _ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => self.apply_key(key, true),
            InputEvent::KeyUp(key) => self.apply_key(key, false),
            InputEvent::Quit => {}
        }
    }

    fn update(&mut self, _ctx: &mut EngineContext) {
        self.update_cameras();
        self.scene.update();
        self.resolve_collisions();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.scene.draw(surface);
    }
}
