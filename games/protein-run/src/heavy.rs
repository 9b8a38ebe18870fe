use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Something a player can push until it breaks loose.
///
/// `life` counts down while a player is attacking it; once it drops below
/// zero the player calls `fly` exactly once and lets go.
pub trait HeavyObject {
    fn life(&self) -> f32;

    fn set_life(&mut self, life: f32);

    /// Starting life, used to turn remaining life into a fraction.
    fn max_life(&self) -> f32;

    /// Life is exhausted: launch the object away.
    fn fly(&mut self);
}

/// Shared handle to a heavy object living in a scene.
pub type HeavyObjectRef = Rc<RefCell<dyn HeavyObject>>;

/// Non-owning handle held by an attacking player.
pub type HeavyObjectWeak = Weak<RefCell<dyn HeavyObject>>;
