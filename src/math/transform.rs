use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local rigid transform: translation plus XYZ Euler rotation in radians.
///
/// Rotation follows the intrinsic X-then-Y-then-Z convention, so
/// `rotation.x` is pitch, `rotation.y` is yaw and `rotation.z` is roll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.quat(), self.position)
    }
}
