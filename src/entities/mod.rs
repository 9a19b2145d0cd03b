//! Decorative scene entities.
//!
//! Every entity is a group transform holding rigid parts. A part's pivot is
//! expressed relative to the group, and each mesh inside a part is placed
//! relative to that pivot. Nothing here is ever in world space; the
//! renderer composes `group * pivot * mesh` when it builds instances.

mod bubble;
mod fish;
mod seaweed;

pub use bubble::{Bubble, BUBBLE_CEILING, BUBBLE_DISTORT, BUBBLE_DISTORT_SPEED, BUBBLE_WOBBLE_STEP};
pub use fish::{
    bob_step, bottom_fin_roll, fish_yaw, tail_yaw, top_fin_roll, Fish, BOB_STEP, BOTTOM_FIN, BODY,
    TAIL, TOP_FIN,
};
pub use seaweed::{segment_pitch, segment_roll, SeaweedStrand, SEGMENT_PHASE, SEGMENT_SPACING};

use glam::Vec3;
use rand::Rng;

use crate::math::{hex_to_linear, Transform};
use crate::traits::Animate;

/// Geometry a mesh instance refers to; the renderer builds each one once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshId {
    FishBody,
    FishStripe,
    FishEye,
    FishPupil,
    FishTail,
    FishFin,
    FishSideFin,
    FishMouth,
    SeaweedStem,
    SeaweedLeaf,
    Bubble,
}

impl MeshId {
    pub const ALL: [MeshId; 11] = [
        MeshId::FishBody,
        MeshId::FishStripe,
        MeshId::FishEye,
        MeshId::FishPupil,
        MeshId::FishTail,
        MeshId::FishFin,
        MeshId::FishSideFin,
        MeshId::FishMouth,
        MeshId::SeaweedStem,
        MeshId::SeaweedLeaf,
        MeshId::Bubble,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Surface parameters, color already in linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    /// Radial surface wobble strength; 0 leaves the mesh rigid
    pub distort: f32,
    /// Wobble cycles per second scale
    pub distort_speed: f32,
}

impl Material {
    pub fn from_hex(hex: u32) -> Self {
        Self {
            color: hex_to_linear(hex),
            opacity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            distort: 0.0,
            distort_speed: 0.0,
        }
    }

    pub fn roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn distort(mut self, amount: f32, speed: f32) -> Self {
        self.distort = amount;
        self.distort_speed = speed;
        self
    }

    pub fn is_distorted(&self) -> bool {
        self.distort > 0.0
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One drawable piece, fixed relative to its part's pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub mesh: MeshId,
    pub local: Transform,
    pub material: Material,
}

impl MeshInstance {
    pub fn new(mesh: MeshId, local: Transform, material: Material) -> Self {
        Self {
            mesh,
            local,
            material,
        }
    }

    pub fn at_origin(mesh: MeshId, material: Material) -> Self {
        Self::new(mesh, Transform::IDENTITY, material)
    }
}

/// Rigid sub-part with an animated pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub pivot: Transform,
    pub meshes: Vec<MeshInstance>,
}

impl Part {
    pub fn new(pivot: Transform, meshes: Vec<MeshInstance>) -> Self {
        Self { pivot, meshes }
    }
}

#[derive(Debug, Clone)]
pub enum Entity {
    Fish(Fish),
    Seaweed(SeaweedStrand),
    Bubble(Bubble),
}

impl Entity {
    pub fn group(&self) -> Transform {
        match self {
            Entity::Fish(fish) => fish.group,
            Entity::Seaweed(strand) => strand.group,
            Entity::Bubble(bubble) => bubble.group(),
        }
    }

    pub fn parts(&self) -> &[Part] {
        match self {
            Entity::Fish(fish) => fish.parts(),
            Entity::Seaweed(strand) => strand.segments(),
            Entity::Bubble(bubble) => bubble.parts(),
        }
    }

    pub fn mesh_count(&self) -> usize {
        self.parts().iter().map(|part| part.meshes.len()).sum()
    }

    pub fn as_fish(&self) -> Option<&Fish> {
        match self {
            Entity::Fish(fish) => Some(fish),
            _ => None,
        }
    }

    pub fn as_seaweed(&self) -> Option<&SeaweedStrand> {
        match self {
            Entity::Seaweed(strand) => Some(strand),
            _ => None,
        }
    }

    pub fn as_bubble(&self) -> Option<&Bubble> {
        match self {
            Entity::Bubble(bubble) => Some(bubble),
            _ => None,
        }
    }
}

impl Animate for Entity {
    fn animate(&mut self, time: f32) {
        match self {
            Entity::Fish(fish) => fish.animate(time),
            Entity::Seaweed(strand) => strand.animate(time),
            Entity::Bubble(bubble) => bubble.animate(time),
        }
    }
}

/// Scatter point shared by seaweed and bubbles: x and z in `[-10, 10)`,
/// y in `(-20, 0]`.
pub fn random_scatter_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * 20.0 - 10.0,
        rng.gen::<f32>() * -20.0,
        rng.gen::<f32>() * 20.0 - 10.0,
    )
}
