/// Unique identifier for a top-level item in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// Key into a scene's camera arena.
/// Items hold one of these instead of a reference to the camera itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CameraId(pub u32);

/// Opaque handle to a loaded image, resolved through an `ImageRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageHandle(pub u32);
