use glam::Vec3;

use crate::math::hex_to_linear;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Parallel light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector from a lit surface toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or(Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Static light rig; built once and never touched by the frame update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub point: PointLight,
}

impl Lighting {
    pub fn ocean() -> Self {
        Self {
            ambient: AmbientLight {
                color: [1.0; 3],
                intensity: 0.5,
            },
            sun: DirectionalLight {
                position: Vec3::new(10.0, 10.0, 5.0),
                color: [1.0; 3],
                intensity: 1.0,
            },
            point: PointLight {
                position: Vec3::new(-10.0, 10.0, -5.0),
                color: hex_to_linear(0xffffff),
                intensity: 0.5,
            },
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::ocean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocean_rig_intensities() {
        let lighting = Lighting::ocean();
        assert_eq!(lighting.ambient.intensity, 0.5);
        assert_eq!(lighting.sun.intensity, 1.0);
        assert_eq!(lighting.point.intensity, 0.5);
        assert_eq!(lighting.point.position, Vec3::new(-10.0, 10.0, -5.0));
    }

    #[test]
    fn test_sun_direction_is_unit_toward_light() {
        let dir = Lighting::ocean().sun.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0 && dir.z > 0.0);
    }
}
