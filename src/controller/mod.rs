// CONTROLLER: input events, gesture tracking, and the per-frame update
pub mod camera_controller;
pub mod frame_loop;
pub mod gesture;
pub mod input;

pub use camera_controller::CameraController;
pub use frame_loop::GestureSystem;
pub use gesture::GestureTracker;
pub use hit_test::{AlphaSampler, Viewport};
pub use input::{Disposition, GestureEvent, TargetKind};
