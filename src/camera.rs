use glam::{Mat4, Vec3};

use crate::math::hex_to_linear;

/// Scroll pixels per world unit of descent.
pub const SCROLL_PIXELS_PER_UNIT: f32 = 200.0;

/// Depth fog at the surface, linear RGB.
pub const FOG_BASE_COLOR: [f32; 3] = [0.1, 0.2, 0.3];
/// Depth over which a fog channel darkens by one full unit (0.01 per unit).
pub const FOG_FADE_DEPTH: f32 = 100.0;
pub const DEPTH_FOG_NEAR: f32 = 1.0;
pub const DEPTH_FOG_FAR: f32 = 10.0;

/// Background and pre-first-frame fog.
pub const OCEAN_TEAL: u32 = 0x006994;
pub const INITIAL_FOG_NEAR: f32 = 5.0;
pub const INITIAL_FOG_FAR: f32 = 15.0;

pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const FOV_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;

/// World-unit depth for a document scroll offset in pixels.
pub fn depth_for_offset(offset: f32) -> f32 {
    offset / SCROLL_PIXELS_PER_UNIT
}

/// Fog color at `depth`: each channel fades linearly and floors at zero.
///
/// Divides rather than multiplying by 0.01, so whole depths land exactly on
/// the base values (`0.2 - 20 / 100 == 0.0` in f32).
pub fn fog_color_at_depth(depth: f32) -> [f32; 3] {
    FOG_BASE_COLOR.map(|base| (base - depth / FOG_FADE_DEPTH).max(0.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    /// Linear RGB
    pub color: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// Teal fog used until the first frame update.
    pub fn initial() -> Self {
        Self {
            color: hex_to_linear(OCEAN_TEAL),
            near: INITIAL_FOG_NEAR,
            far: INITIAL_FOG_FAR,
        }
    }

    pub fn at_depth(depth: f32) -> Self {
        Self {
            color: fog_color_at_depth(depth),
            near: DEPTH_FOG_NEAR,
            far: DEPTH_FOG_FAR,
        }
    }
}

/// Per-frame output of the depth mapping, consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub depth: f32,
    pub fog: Fog,
}

impl CameraState {
    pub fn initial() -> Self {
        Self {
            depth: 0.0,
            fog: Fog::initial(),
        }
    }
}

/// Camera whose vertical position is driven by the page scroll.
///
/// The user can orbit around the vertical axis and zoom, but the camera
/// always sits level with its target, so `position.y == -depth` after
/// every update.
#[derive(Debug, Clone)]
pub struct DepthCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Radians around +Y; 0 looks down -Z from +Z
    pub azimuth: f32,
    pub distance: f32,
    pub fov_y: f32,
    state: CameraState,
}

impl DepthCamera {
    pub fn new() -> Self {
        Self {
            position: INITIAL_POSITION,
            target: Vec3::ZERO,
            azimuth: 0.0,
            distance: INITIAL_POSITION.z,
            fov_y: FOV_DEGREES.to_radians(),
            state: CameraState::initial(),
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn depth(&self) -> f32 {
        self.state.depth
    }

    pub fn fog(&self) -> Fog {
        self.state.fog
    }

    /// Map the latest scroll offset onto camera height and fog.
    pub fn update(&mut self, scroll_offset: f32) {
        let depth = depth_for_offset(scroll_offset);
        self.position.y = -depth;
        self.target = Vec3::new(0.0, -depth, 0.0);
        self.state = CameraState {
            depth,
            fog: Fog::at_depth(depth),
        };
        self.place_on_orbit();
    }

    /// Rotate around the target by `delta` radians.
    pub fn orbit(&mut self, delta: f32) {
        self.azimuth = (self.azimuth + delta).rem_euclid(std::f32::consts::TAU);
        self.place_on_orbit();
    }

    /// Scale the orbit distance; factors below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        self.distance = (self.distance * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.place_on_orbit();
    }

    // Horizontal placement only; height belongs to the scroll mapping.
    fn place_on_orbit(&mut self) {
        self.position.x = self.target.x + self.azimuth.sin() * self.distance;
        self.position.z = self.target.z + self.azimuth.cos() * self.distance;
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), Z_NEAR, Z_FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

impl Default for DepthCamera {
    fn default() -> Self {
        Self::new()
    }
}
