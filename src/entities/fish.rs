use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

use glam::Vec3;

use super::{Material, MeshId, MeshInstance, Part};
use crate::math::Transform;
use crate::traits::Animate;

pub const BODY: usize = 0;
pub const TAIL: usize = 1;
pub const TOP_FIN: usize = 2;
pub const BOTTOM_FIN: usize = 3;

/// Per-frame vertical drift coefficient.
pub const BOB_STEP: f32 = 0.002;

const ORANGE: u32 = 0xff6b00;
const CREAM: u32 = 0xfff5e6;
const MOUTH_RED: u32 = 0xff4400;

/// Added to the group height every frame. The drift is integrated on
/// purpose, so the fish wanders slowly instead of bobbing in place.
pub fn bob_step(time: f32) -> f32 {
    (time * 1.5).sin() * BOB_STEP
}

pub fn fish_yaw(time: f32) -> f32 {
    (time * 2.0).sin() * 0.1
}

pub fn tail_yaw(time: f32) -> f32 {
    (time * 4.0).sin() * 0.3
}

pub fn top_fin_roll(time: f32) -> f32 {
    (time * 3.0).sin() * 0.1
}

/// Mirror of [`top_fin_roll`].
pub fn bottom_fin_roll(time: f32) -> f32 {
    -(time * 3.0).sin() * 0.1
}

/// The clownfish: body, swinging tail and two counter-rolling fins.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub group: Transform,
    parts: Vec<Part>,
}

impl Fish {
    pub fn new(position: Vec3) -> Self {
        let skin = Material::from_hex(ORANGE).roughness(0.4);
        let stripe = Material::from_hex(CREAM).roughness(0.4);
        let eye = Material::from_hex(0xffffff).roughness(0.1);
        let pupil = Material::from_hex(0x000000).roughness(0.1);
        let mouth = Material::from_hex(MOUTH_RED).roughness(0.4);

        let body = Part::new(
            Transform::IDENTITY,
            vec![
                MeshInstance::at_origin(MeshId::FishBody, skin),
                MeshInstance::new(
                    MeshId::FishStripe,
                    Transform::new(Vec3::ZERO, Vec3::new(0.0, FRAC_PI_2, 0.0)),
                    stripe,
                ),
                MeshInstance::new(
                    MeshId::FishEye,
                    Transform::from_position(Vec3::new(0.25, 0.1, 0.25)),
                    eye,
                ),
                MeshInstance::new(
                    MeshId::FishPupil,
                    Transform::from_position(Vec3::new(0.28, 0.1, 0.25)),
                    pupil,
                ),
                MeshInstance::new(
                    MeshId::FishSideFin,
                    Transform::new(Vec3::new(0.0, 0.0, 0.35), Vec3::new(0.0, 0.0, FRAC_PI_4)),
                    skin,
                ),
                MeshInstance::new(
                    MeshId::FishSideFin,
                    Transform::new(Vec3::new(0.0, 0.0, -0.35), Vec3::new(0.0, 0.0, -FRAC_PI_4)),
                    skin,
                ),
                MeshInstance::new(
                    MeshId::FishMouth,
                    Transform::new(Vec3::new(0.35, -0.05, 0.0), Vec3::new(0.0, FRAC_PI_2, 0.0)),
                    mouth,
                ),
            ],
        );

        let tail = Part::new(
            Transform::from_position(Vec3::new(-0.3, 0.0, 0.0)),
            vec![MeshInstance::new(
                MeshId::FishTail,
                Transform::new(Vec3::ZERO, Vec3::new(0.0, 0.0, FRAC_PI_4)),
                skin,
            )],
        );

        let top_fin = Part::new(
            Transform::from_position(Vec3::new(0.0, 0.3, 0.0)),
            vec![MeshInstance::new(
                MeshId::FishFin,
                Transform::new(Vec3::ZERO, Vec3::new(0.0, 0.0, FRAC_PI_6)),
                skin,
            )],
        );

        let bottom_fin = Part::new(
            Transform::from_position(Vec3::new(0.0, -0.3, 0.0)),
            vec![MeshInstance::new(
                MeshId::FishFin,
                Transform::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -FRAC_PI_6)),
                skin,
            )],
        );

        Self {
            group: Transform::from_position(position),
            parts: vec![body, tail, top_fin, bottom_fin],
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn body(&self) -> &Part {
        &self.parts[BODY]
    }

    pub fn tail(&self) -> &Part {
        &self.parts[TAIL]
    }

    pub fn top_fin(&self) -> &Part {
        &self.parts[TOP_FIN]
    }

    pub fn bottom_fin(&self) -> &Part {
        &self.parts[BOTTOM_FIN]
    }
}

impl Animate for Fish {
    fn animate(&mut self, time: f32) {
        self.group.position.y += bob_step(time);
        self.group.rotation.y = fish_yaw(time);

        self.parts[TAIL].pivot.rotation.y = tail_yaw(time);
        self.parts[TOP_FIN].pivot.rotation.z = top_fin_roll(time);
        self.parts[BOTTOM_FIN].pivot.rotation.z = bottom_fin_roll(time);
    }
}
