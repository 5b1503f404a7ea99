pub mod camera;
pub mod placement;
pub mod touch;

pub use camera::OrbitCamera;
pub use placement::Placement;
pub use touch::{TouchPhase, TouchSample, TouchState};
