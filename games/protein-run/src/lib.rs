//! Protein Run: two players race down parallel roads, eat proteins to bulk up
//! and punch parked cars out of the way.

pub mod assets;
pub mod car;
pub mod heavy;
pub mod player;
pub mod protein;
pub mod road;
pub mod scene;

pub use scene::RoadScene;
