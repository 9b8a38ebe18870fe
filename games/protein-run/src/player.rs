//! The player: six limb sprites on a composite rig, animated procedurally.
//!
//! Every frame the player picks an animation state from its intents, moves
//! horizontally, follows a jump arc, loses a little power, swings its limbs
//! and resizes its torso and arms to match its current power.

use std::f32::consts::TAU;
use std::rc::Rc;

use glam::Vec2;

use brawn_engine::{
    AssetError, CameraId, Cameras, ChildIndex, CompositeItem, Drawable, ImageHandle,
    ImageRegistry, Item, ScreenRect, Surface,
};

use crate::heavy::{HeavyObjectRef, HeavyObjectWeak};

// Rig dimensions (world units)
const PLAYER_SIZE: Vec2 = Vec2::new(0.15, 0.15);
const BASE_BODY_SIZE: Vec2 = Vec2::new(0.06, 0.15);
const BASE_HEAD_SIZE: Vec2 = Vec2::new(0.08, 0.1);
const BASE_ARM_SIZE: Vec2 = Vec2::new(0.07, 0.15);
const BASE_LEG_SIZE: Vec2 = Vec2::new(0.1, 0.2);

// Limb swing amplitudes (degrees)
const ARM_SWING: f32 = 40.0;
const RUN_LEG_SWING: f32 = 40.0;
const JUMP_LEG_SWING: f32 = 60.0;

// Animation periods (frames) and starting phases
const RUN_PERIOD: u32 = 25;
const JUMP_PERIOD: u32 = 25;
const JUMP_PHASE: u32 = 10;
const REST_PERIOD: u32 = 25;
const REST_PHASE: u32 = 5;
const PUSH_PERIOD: u32 = 100;

// Kinematics
const SPEED_FACTOR: f32 = 10.0;
const JUMP_FACTOR: f32 = 5.0;
const GRAVITY: f32 = 0.09;
const SPEED_DAMPING: f32 = 0.9;
const SPEED_EPSILON: f32 = 0.001;
const X_TIME_SCALE: f32 = 0.01;
const Z_TIME_SCALE: f32 = 0.005;

// Power
pub const POWER_DECAY: f32 = 0.05;
pub const MIN_POWER: f32 = POWER_DECAY;
pub const MAX_POWER: f32 = 10.0;
pub const PROTEIN_POWER: f32 = 5.0;
const INITIAL_POWER: f32 = 1.0;
/// Above this, a protein maxes power out instead of adding to it.
const POWER_OVERFLOW: f32 = 5.0;
const MEDIUM_TIER_POWER: f32 = 5.0;
const STRONG_TIER_POWER: f32 = 8.0;

/// Life taken from a pushed object per frame.
pub const ATTACK_DAMAGE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnimation {
    Run,
    Jump,
    Rest,
    MoveHeavyObject,
}

/// Muscle tier for a power value: 0 (weak), 1 (medium) or 2 (strong).
pub fn muscle_tier_for(power: f32) -> u8 {
    if power > STRONG_TIER_POWER {
        2
    } else if power > MEDIUM_TIER_POWER {
        1
    } else {
        0
    }
}

/// Image ids for the tier-dependent limbs, indexed by muscle tier.
pub const BODY_IMAGES: [&str; 3] = ["body_w.png", "body_m.png", "body_s.png"];
pub const LEFT_ARM_IMAGES: [&str; 3] = ["left_arm_w.png", "left_arm_m.png", "left_arm_s.png"];
pub const RIGHT_ARM_IMAGES: [&str; 3] = ["right_arm_w.png", "right_arm_m.png", "right_arm_s.png"];
pub const HEAD_IMAGE: &str = "head.png";
pub const LEFT_LEG_IMAGE: &str = "left_leg.png";
pub const RIGHT_LEG_IMAGE: &str = "right_leg.png";

/// Resolved handles for one muscle tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierImages {
    pub body: ImageHandle,
    pub left_arm: ImageHandle,
    pub right_arm: ImageHandle,
}

/// All tier image sets, resolved up front so a tier change can never hit a missing image.
fn resolve_tier_images(images: &ImageRegistry) -> Result<[TierImages; 3], AssetError> {
    let tier = |t: usize| -> Result<TierImages, AssetError> {
        Ok(TierImages {
            body: images.resolve(BODY_IMAGES[t])?,
            left_arm: images.resolve(LEFT_ARM_IMAGES[t])?,
            right_arm: images.resolve(RIGHT_ARM_IMAGES[t])?,
        })
    };
    Ok([tier(0)?, tier(1)?, tier(2)?])
}

fn head_offset() -> Vec2 {
    Vec2::new(
        BASE_BODY_SIZE.x * 0.1,
        -(BASE_BODY_SIZE.y + BASE_HEAD_SIZE.y) * 0.2,
    )
}

fn leg_offset(right: bool) -> Vec2 {
    let x = BASE_BODY_SIZE.x * 0.1;
    let x = if right { -x } else { x + 0.015 };
    Vec2::new(x, BASE_BODY_SIZE.y * 0.25)
}

fn arm_offset(right: bool) -> Vec2 {
    let x = BASE_BODY_SIZE.x * 0.3;
    let x = if right { -x } else { x };
    Vec2::new(x, BASE_BODY_SIZE.y * -0.2)
}

pub struct Player {
    rig: CompositeItem,
    body: ChildIndex,
    head: ChildIndex,
    left_leg: ChildIndex,
    right_leg: ChildIndex,
    right_arm: ChildIndex,
    left_arm: ChildIndex,
    tier_images: [TierImages; 3],

    power: f32,
    muscle_tier: u8,

    animation: PlayerAnimation,
    phase: u32,
    period: u32,
    leg_swing: f32,

    z_height: f32,
    vertical_speed: f32,
    ground_y: f32,
    speed: Vec2,

    moving_right: bool,
    moving_left: bool,
    jumping: bool,

    target: Option<HeavyObjectWeak>,
}

impl Player {
    /// Build a player standing at `pos`. Fails if any limb image is missing.
    pub fn new(camera: CameraId, pos: Vec2, images: &ImageRegistry) -> Result<Self, AssetError> {
        let tier_images = resolve_tier_images(images)?;
        let weak = tier_images[0];

        let mut rig = CompositeItem::new(camera, pos, PLAYER_SIZE);
        let body = rig.add_item(
            Item::new(camera)
                .with_size(BASE_BODY_SIZE)
                .with_image(weak.body),
        );
        let head = rig.add_item(Item::with_image_id(
            camera, head_offset(), BASE_HEAD_SIZE, images, HEAD_IMAGE,
        )?);
        let left_leg = rig.add_item(Item::with_image_id(
            camera, leg_offset(false), BASE_LEG_SIZE, images, LEFT_LEG_IMAGE,
        )?);
        let right_leg = rig.add_item(Item::with_image_id(
            camera, leg_offset(true), BASE_LEG_SIZE, images, RIGHT_LEG_IMAGE,
        )?);
        let right_arm = rig.add_item(
            Item::new(camera)
                .with_pos(arm_offset(true))
                .with_size(BASE_ARM_SIZE)
                .with_image(weak.right_arm),
        );
        let left_arm = rig.add_item(
            Item::new(camera)
                .with_pos(arm_offset(false))
                .with_size(BASE_ARM_SIZE)
                .with_image(weak.left_arm),
        );

        let mut player = Self {
            rig,
            body,
            head,
            left_leg,
            right_leg,
            right_arm,
            left_arm,
            tier_images,
            power: INITIAL_POWER,
            muscle_tier: 0,
            animation: PlayerAnimation::Run,
            phase: 0,
            period: RUN_PERIOD,
            leg_swing: RUN_LEG_SWING,
            z_height: 0.0,
            vertical_speed: 0.0,
            ground_y: pos.y,
            speed: Vec2::ZERO,
            moving_right: false,
            moving_left: false,
            jumping: false,
            target: None,
        };
        player.set_animation(PlayerAnimation::Run);
        player.update_body_members_size();
        Ok(player)
    }

    // -- Intents --

    pub fn set_right(&mut self, right: bool) {
        self.moving_right = right;
    }

    pub fn set_left(&mut self, left: bool) {
        self.moving_left = left;
    }

    pub fn set_up(&mut self, up: bool) {
        self.jumping = up;
    }

    /// Drop all horizontal momentum.
    pub fn stop(&mut self) {
        self.speed = Vec2::ZERO;
    }

    // -- Power --

    /// A protein's worth of power. Above the overflow threshold this maxes power out.
    pub fn gain_power(&mut self) {
        if self.power > POWER_OVERFLOW {
            self.power = MAX_POWER;
        } else {
            self.power = (self.power + PROTEIN_POWER).min(MAX_POWER);
        }
    }

    /// Passive per-frame decay, never below `MIN_POWER`.
    pub fn lose_power(&mut self) {
        if self.power > POWER_DECAY {
            self.power = (self.power - POWER_DECAY).max(MIN_POWER);
        }
    }

    /// Overwrite power, clamped to `[MIN_POWER, MAX_POWER]`. Tier follows on the next update.
    pub fn set_power(&mut self, power: f32) {
        self.power = power.clamp(MIN_POWER, MAX_POWER);
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn muscle_tier(&self) -> u8 {
        self.muscle_tier
    }

    // -- Attack --

    /// Start pushing `target`. Ignored while already pushing something.
    pub fn attack(&mut self, target: &HeavyObjectRef) {
        if self.attack_target().is_some() {
            return;
        }
        self.target = Some(Rc::downgrade(target));
        self.set_animation(PlayerAnimation::MoveHeavyObject);
    }

    /// The object being pushed, if it is still alive.
    fn attack_target(&self) -> Option<HeavyObjectRef> {
        self.target.as_ref().and_then(|weak| weak.upgrade())
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_target().is_some()
    }

    // -- State queries --

    pub fn animation(&self) -> PlayerAnimation {
        self.animation
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn z_height(&self) -> f32 {
        self.z_height
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn horizontal_speed(&self) -> Vec2 {
        self.speed
    }

    pub fn tier_images(&self, tier: u8) -> TierImages {
        self.tier_images[tier as usize]
    }

    pub fn body(&self) -> &Item {
        self.limb(self.body)
    }

    pub fn head(&self) -> &Item {
        self.limb(self.head)
    }

    pub fn left_arm(&self) -> &Item {
        self.limb(self.left_arm)
    }

    pub fn right_arm(&self) -> &Item {
        self.limb(self.right_arm)
    }

    pub fn left_leg(&self) -> &Item {
        self.limb(self.left_leg)
    }

    pub fn right_leg(&self) -> &Item {
        self.limb(self.right_leg)
    }

    pub fn set_z_value(&mut self, z: i32) {
        self.rig.set_z_value(z);
    }

    // -- Internals --

    fn limb(&self, index: ChildIndex) -> &Item {
        // limb indices come from our own add_item calls
        match self.rig.child(index) {
            Some(item) => item,
            None => unreachable!("player rig lost limb {:?}", index),
        }
    }

    fn limb_mut(&mut self, index: ChildIndex) -> &mut Item {
        match self.rig.child_mut(index) {
            Some(item) => item,
            None => unreachable!("player rig lost limb {:?}", index),
        }
    }

    fn set_animation(&mut self, animation: PlayerAnimation) {
        self.animation = animation;
        self.phase = 0;
        match animation {
            PlayerAnimation::Run => {
                self.leg_swing = RUN_LEG_SWING;
                self.period = RUN_PERIOD;
            }
            PlayerAnimation::Jump => {
                self.leg_swing = JUMP_LEG_SWING;
                self.phase = JUMP_PHASE;
                self.period = JUMP_PERIOD;
            }
            PlayerAnimation::Rest => {
                self.phase = REST_PHASE;
                self.period = REST_PERIOD;
            }
            PlayerAnimation::MoveHeavyObject => {
                self.period = PUSH_PERIOD;
            }
        }
    }

    /// Pick a state from the movement intents and apply gravity and jumps.
    fn steer(&mut self) {
        let factor_speed = SPEED_FACTOR / self.power;
        let direction = match (self.moving_right, self.moving_left) {
            (true, false) => Some(1.0),
            (false, true) => Some(-1.0),
            _ => None,
        };

        match direction {
            Some(dir) => {
                if self.animation != PlayerAnimation::Run {
                    self.set_animation(PlayerAnimation::Run);
                    self.speed = Vec2::new(dir * factor_speed, 0.0);
                }
            }
            None => {
                self.speed *= SPEED_DAMPING;
                if self.speed.length() < SPEED_EPSILON {
                    self.speed = Vec2::ZERO;
                }
                self.set_animation(PlayerAnimation::Rest);
            }
        }

        if self.z_height > 0.0 {
            self.vertical_speed -= GRAVITY;
        }

        if self.jumping && self.z_height <= 0.0 {
            self.vertical_speed = JUMP_FACTOR / self.power;
            self.set_animation(PlayerAnimation::Jump);
        }
    }

    /// Hit the pushed object once. Lets go after making it fly.
    fn push(&mut self, target: &HeavyObjectRef) {
        let mut object = target.borrow_mut();
        let life = object.life() - ATTACK_DAMAGE;
        object.set_life(life);
        if life < 0.0 {
            object.fly();
            self.target = None;
            log::debug!("player: heavy object launched");
        }
    }

    fn swing_limbs(&mut self) {
        let lambda = match self.attack_target() {
            Some(target) => {
                let object = target.borrow();
                let remaining = if object.max_life() > 0.0 {
                    object.life() / object.max_life()
                } else {
                    0.0
                };
                self.phase = (100.0 * (1.0 - remaining)).max(0.0).round() as u32;
                let lambda = self.phase as f32 / self.period as f32;
                let punch = ARM_SWING * 3.0 * lambda - 30.0;
                drop(object);
                self.limb_mut(self.left_arm).set_rotation(punch);
                self.limb_mut(self.right_arm).set_rotation(punch);
                lambda
            }
            None => {
                let lambda = self.phase as f32 / self.period as f32;
                let swing = ARM_SWING * (lambda * TAU).cos();
                self.limb_mut(self.left_arm).set_rotation(swing);
                self.limb_mut(self.right_arm).set_rotation(-swing);
                lambda
            }
        };

        let leg = self.leg_swing * (lambda * TAU).cos();
        self.limb_mut(self.left_leg).set_rotation(-leg);
        self.limb_mut(self.right_leg).set_rotation(leg);
    }

    /// Widen torso and arms with power and swap images when the muscle tier changes.
    fn update_body_members_size(&mut self) {
        let factor = 0.1 * (self.power + 10.0);

        let body_w = BASE_BODY_SIZE.x * factor;
        self.limb_mut(self.body).set_size(Vec2::new(body_w, BASE_BODY_SIZE.y));

        let arm = Vec2::new(BASE_ARM_SIZE.x * factor, BASE_ARM_SIZE.y);
        self.limb_mut(self.left_arm).set_size(arm);
        self.limb_mut(self.right_arm).set_size(arm);

        self.limb_mut(self.left_leg).set_size(BASE_LEG_SIZE);
        self.limb_mut(self.right_leg).set_size(BASE_LEG_SIZE);

        let tier = muscle_tier_for(self.power);
        if tier != self.muscle_tier {
            let images = self.tier_images[tier as usize];
            self.limb_mut(self.body).set_image(images.body);
            self.limb_mut(self.left_arm).set_image(images.left_arm);
            self.limb_mut(self.right_arm).set_image(images.right_arm);
            log::debug!("player: muscle tier {} -> {} (power {:.2})", self.muscle_tier, tier, self.power);
            self.muscle_tier = tier;
        }
    }
}

impl Drawable for Player {
    fn update(&mut self) {
        self.phase += 1;
        if self.phase >= self.period {
            self.phase = 0;
        }

        match self.attack_target() {
            Some(target) => self.push(&target),
            None => {
                self.target = None;
                self.steer();
            }
        }

        self.z_height += self.vertical_speed * Z_TIME_SCALE;
        if self.z_height < 0.0 {
            self.z_height = 0.0;
            self.vertical_speed = 0.0;
            self.set_animation(PlayerAnimation::Run);
        }

        let x = self.rig.pos().x + self.speed.x * X_TIME_SCALE;
        self.rig.set_pos(Vec2::new(x, self.ground_y - self.z_height));

        self.lose_power();
        self.swing_limbs();
        self.update_body_members_size();

        self.rig.update();
    }

    /// Far limbs first, near arm last.
    fn draw(&self, cameras: &Cameras, surface: &mut dyn Surface) {
        let order = [
            self.left_leg,
            self.left_arm,
            self.body,
            self.head,
            self.right_leg,
            self.right_arm,
        ];
        self.rig.draw_ordered(&order, cameras, surface);
    }

    fn rect(&self, cameras: &Cameras) -> ScreenRect {
        self.rig.rect(cameras)
    }

    fn z_value(&self) -> i32 {
        self.rig.z_value()
    }

    fn pos(&self) -> Vec2 {
        self.rig.pos()
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.rig.set_pos(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MANIFEST_JSON;
    use crate::heavy::HeavyObject;
    use brawn_engine::{Camera, RenderBuffer};
    use std::cell::RefCell;

    struct Crate {
        life: f32,
        max_life: f32,
        flights: u32,
    }

    impl HeavyObject for Crate {
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
            self.flights += 1;
        }
    }

    fn setup() -> (Cameras, Player, ImageRegistry) {
        let images = ImageRegistry::from_json(MANIFEST_JSON).unwrap();
        let mut cameras = Cameras::new();
        let cam = cameras.add(Camera::new(1200.0, 675.0));
        let player = Player::new(cam, Vec2::new(0.0, -0.1), &images).unwrap();
        (cameras, player, images)
    }

    #[test]
    fn missing_limb_image_fails_construction() {
        let mut images = ImageRegistry::new();
        images.insert("head.png", "head.png");
        let mut cameras = Cameras::new();
        let cam = cameras.add(Camera::new(100.0, 100.0));
        match Player::new(cam, Vec2::ZERO, &images) {
            Err(AssetError::UnknownImage(id)) => assert_eq!(id, "body_w.png"),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("player built without images"),
        }
    }

    #[test]
    fn gain_power_adds_below_threshold() {
        let (_, mut player, _) = setup();
        assert_eq!(player.power(), 1.0);
        player.gain_power();
        assert_eq!(player.power(), 6.0);
    }

    #[test]
    fn gain_power_maxes_out_above_threshold() {
        let (_, mut player, _) = setup();
        player.set_power(7.0);
        player.gain_power();
        assert_eq!(player.power(), 10.0);
    }

    #[test]
    fn power_stays_in_bounds() {
        let (_, mut player, _) = setup();
        for round in 0..50 {
            for _ in 0..(round % 7) {
                player.gain_power();
                assert!(player.power() <= MAX_POWER);
            }
            for _ in 0..(round * 13 % 250) {
                player.lose_power();
                assert!(player.power() >= MIN_POWER);
            }
        }
        for _ in 0..1000 {
            player.lose_power();
        }
        assert!(player.power() >= MIN_POWER);
        assert!(player.power() - MIN_POWER < 1e-4);
    }

    #[test]
    fn muscle_tier_steps() {
        assert_eq!(muscle_tier_for(0.05), 0);
        assert_eq!(muscle_tier_for(5.0), 0);
        assert_eq!(muscle_tier_for(5.01), 1);
        assert_eq!(muscle_tier_for(8.0), 1);
        assert_eq!(muscle_tier_for(8.01), 2);
        assert_eq!(muscle_tier_for(10.0), 2);
    }

    #[test]
    fn tier_and_images_track_power_after_every_update() {
        let (_, mut player, _) = setup();
        for frame in 0..400 {
            if frame % 60 == 0 {
                player.gain_power();
            }
            player.update();
            let tier = player.muscle_tier();
            assert_eq!(tier, muscle_tier_for(player.power()), "frame {frame}");
            let expected = player.tier_images(tier);
            assert_eq!(player.body().image(), Some(expected.body));
            assert_eq!(player.left_arm().image(), Some(expected.left_arm));
            assert_eq!(player.right_arm().image(), Some(expected.right_arm));
        }
    }

    #[test]
    fn body_and_arms_widen_with_power_legs_do_not() {
        let (_, mut player, _) = setup();
        player.update();
        let weak_body = player.body().size();
        let leg = player.left_leg().size();
        player.set_power(10.0);
        player.update();
        assert!(player.body().size().x > weak_body.x);
        assert_eq!(player.body().size().y, BASE_BODY_SIZE.y);
        assert!(player.left_arm().size().x > BASE_ARM_SIZE.x);
        assert_eq!(player.left_leg().size(), leg);
        assert_eq!(player.head().size(), BASE_HEAD_SIZE);
    }

    #[test]
    fn jump_round_trip_lands_exactly_on_ground() {
        let (_, mut player, _) = setup();
        player.set_up(true);
        player.update();
        player.set_up(false);
        assert!(player.z_height() > 0.0);

        let mut airborne = 0;
        let mut landed = false;
        for _ in 0..500 {
            player.update();
            assert!(player.z_height() >= 0.0);
            if player.z_height() == 0.0 {
                landed = true;
                break;
            }
            airborne += 1;
        }
        assert!(landed, "player never landed");
        assert!(airborne > 0);
        assert_eq!(player.animation(), PlayerAnimation::Run);
        assert_eq!(player.pos().y, player.ground_y());
    }

    #[test]
    fn running_right_moves_right() {
        let (_, mut player, _) = setup();
        // a player that starts in Run only picks up speed on the Rest -> Run transition
        player.update();
        player.set_right(true);
        let x0 = player.pos().x;
        for _ in 0..10 {
            player.update();
        }
        assert_eq!(player.animation(), PlayerAnimation::Run);
        assert!(player.pos().x > x0);
        assert!(player.horizontal_speed().x > 0.0);
    }

    #[test]
    fn both_intents_rest_and_damp_speed() {
        let (_, mut player, _) = setup();
        player.update();
        player.set_left(true);
        player.update();
        let speed = player.horizontal_speed().x;
        assert!(speed < 0.0);
        player.set_right(true);
        player.update();
        assert_eq!(player.animation(), PlayerAnimation::Rest);
        assert!(player.horizontal_speed().x > speed);
        for _ in 0..300 {
            player.update();
        }
        assert_eq!(player.horizontal_speed(), Vec2::ZERO);
    }

    #[test]
    fn phase_wraps_at_period() {
        let (_, mut player, _) = setup();
        player.set_right(true);
        for _ in 0..200 {
            player.update();
            assert!(player.phase() < player.period());
        }
    }

    #[test]
    fn attack_drains_life_then_launches_once() {
        let (_, mut player, _) = setup();
        let target = Rc::new(RefCell::new(Crate {
            life: 20.0,
            max_life: 100.0,
            flights: 0,
        }));
        let handle: HeavyObjectRef = target.clone();
        player.attack(&handle);
        assert_eq!(player.animation(), PlayerAnimation::MoveHeavyObject);

        for _ in 0..3 {
            player.update();
        }
        assert!(target.borrow().life < 0.0);
        assert_eq!(target.borrow().flights, 1);
        assert!(!player.is_attacking());

        player.update();
        assert_eq!(target.borrow().flights, 1);
        assert_eq!(target.borrow().life, -10.0);
    }

    #[test]
    fn attack_is_ignored_while_attacking() {
        let (_, mut player, _) = setup();
        let first = Rc::new(RefCell::new(Crate { life: 100.0, max_life: 100.0, flights: 0 }));
        let second = Rc::new(RefCell::new(Crate { life: 100.0, max_life: 100.0, flights: 0 }));
        let a: HeavyObjectRef = first.clone();
        let b: HeavyObjectRef = second.clone();
        player.attack(&a);
        player.attack(&b);
        player.update();
        assert_eq!(first.borrow().life, 90.0);
        assert_eq!(second.borrow().life, 100.0);
    }

    #[test]
    fn punch_angle_grows_as_target_weakens() {
        let (_, mut player, _) = setup();
        let target = Rc::new(RefCell::new(Crate { life: 100.0, max_life: 100.0, flights: 0 }));
        let handle: HeavyObjectRef = target.clone();
        player.attack(&handle);
        player.update();
        let first = player.left_arm().rotation();
        player.update();
        let second = player.left_arm().rotation();
        assert!(second > first);
        assert_eq!(player.left_arm().rotation(), player.right_arm().rotation());
        // life 80 of 100: phase 20 of 100
        assert_eq!(player.phase(), 20);
        assert!((second - (ARM_SWING * 3.0 * 0.2 - 30.0)).abs() < 1e-4);
    }

    #[test]
    fn dropped_target_releases_player() {
        let (_, mut player, _) = setup();
        let target = Rc::new(RefCell::new(Crate { life: 100.0, max_life: 100.0, flights: 0 }));
        let handle: HeavyObjectRef = target.clone();
        player.attack(&handle);
        drop(handle);
        drop(target);
        player.update();
        assert!(!player.is_attacking());
        assert_eq!(player.animation(), PlayerAnimation::Rest);
    }

    #[test]
    fn arms_swing_in_opposition_while_running() {
        let (_, mut player, _) = setup();
        player.set_right(true);
        for _ in 0..7 {
            player.update();
            assert_eq!(player.left_arm().rotation(), -player.right_arm().rotation());
            assert_eq!(player.left_leg().rotation(), -player.right_leg().rotation());
        }
    }

    #[test]
    fn limbs_follow_the_rig() {
        let (_, mut player, _) = setup();
        player.set_pos(Vec2::new(0.4, 0.2));
        assert_eq!(player.head().pos(), Vec2::new(0.4, 0.2) + head_offset());
        assert_eq!(player.left_leg().pos(), Vec2::new(0.4, 0.2) + leg_offset(false));
    }

    #[test]
    fn draws_limbs_in_layering_order() {
        let (cameras, player, images) = setup();
        let mut buf = RenderBuffer::new();
        player.draw(&cameras, &mut buf);
        let drawn: Vec<ImageHandle> = buf.instances.iter().map(|i| i.image()).collect();
        let id = |name: &str| images.get(name).unwrap();
        assert_eq!(
            drawn,
            vec![
                id("left_leg.png"),
                id("left_arm_w.png"),
                id("body_w.png"),
                id("head.png"),
                id("right_leg.png"),
                id("right_arm_w.png"),
            ]
        );
    }
}
