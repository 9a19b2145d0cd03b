pub mod animator;
pub mod batch;
pub mod camera;
pub mod cli;
pub mod config;
pub mod entities;
pub mod frame;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod lighting;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scroll;
pub mod traits;
pub mod types;

pub use animator::ProceduralAnimator;
pub use camera::DepthCamera;
pub use config::OceanConfig;
pub use scene::{FrameContext, OceanScene};
pub use scroll::{ScrollSource, ScrollTracker};
