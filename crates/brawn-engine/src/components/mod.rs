pub mod composite;
pub mod drawable;
pub mod item;
pub mod layer;
