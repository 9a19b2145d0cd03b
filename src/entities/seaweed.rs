use glam::Vec3;
use rand::Rng;

use super::{random_scatter_position, Material, MeshId, MeshInstance, Part};
use crate::math::Transform;
use crate::traits::Animate;

/// Vertical gap between stacked segments.
pub const SEGMENT_SPACING: f32 = 0.3;
/// Phase lag per segment index; makes the sway travel up the strand.
pub const SEGMENT_PHASE: f32 = 0.3;

pub fn segment_pitch(time: f32, index: usize) -> f32 {
    (time * 2.0 + index as f32 * SEGMENT_PHASE).sin() * 0.1
}

pub fn segment_roll(time: f32, index: usize) -> f32 {
    (time * 1.5 + index as f32 * SEGMENT_PHASE).cos() * 0.1
}

/// A strand of stacked segments, each a stem with one leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct SeaweedStrand {
    pub group: Transform,
    segments: Vec<Part>,
}

impl SeaweedStrand {
    pub fn new(position: Vec3, segment_count: usize) -> Self {
        let stem = Material::from_hex(0x2d5a27).roughness(0.2).metalness(0.1);
        let leaf = Material::from_hex(0x3a7a34).roughness(0.2).metalness(0.1);

        let segments = (0..segment_count)
            .map(|i| {
                Part::new(
                    Transform::from_position(Vec3::new(0.0, i as f32 * SEGMENT_SPACING, 0.0)),
                    vec![
                        MeshInstance::at_origin(MeshId::SeaweedStem, stem),
                        MeshInstance::new(
                            MeshId::SeaweedLeaf,
                            Transform::from_position(Vec3::new(0.15, 0.1, 0.0)),
                            leaf,
                        ),
                    ],
                )
            })
            .collect();

        Self {
            group: Transform::from_position(position),
            segments,
        }
    }

    /// Place a strand at a random point. The position never changes afterwards.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, segment_count: usize) -> Self {
        Self::new(random_scatter_position(rng), segment_count)
    }

    pub fn segments(&self) -> &[Part] {
        &self.segments
    }
}

impl Animate for SeaweedStrand {
    fn animate(&mut self, time: f32) {
        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.pivot.rotation.x = segment_pitch(time, i);
            segment.pivot.rotation.z = segment_roll(time, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_segments_are_stacked() {
        let strand = SeaweedStrand::new(Vec3::ZERO, 8);
        assert_eq!(strand.segments().len(), 8);
        for (i, segment) in strand.segments().iter().enumerate() {
            assert_eq!(segment.pivot.position, Vec3::new(0.0, i as f32 * 0.3, 0.0));
            assert_eq!(segment.meshes.len(), 2);
        }
    }

    #[test]
    fn test_segment_phase_is_reproducible() {
        let t = 2.5;
        for i in 0..8 {
            let expected = (t * 2.0 + i as f32 * 0.3).sin() * 0.1;
            assert_eq!(segment_pitch(t, i), expected);
            assert_eq!(segment_pitch(t, i), segment_pitch(t, i));
        }
    }

    #[test]
    fn test_segment_roll_at_start_is_cosine_of_phase() {
        assert_eq!(segment_roll(0.0, 0), 0.1);
        assert_eq!(segment_roll(0.0, 3), (3.0f32 * 0.3).cos() * 0.1);
    }

    #[test]
    fn test_animate_rotates_every_segment() {
        let mut strand = SeaweedStrand::new(Vec3::new(1.0, -2.0, 3.0), 8);
        strand.animate(1.7);
        for (i, segment) in strand.segments().iter().enumerate() {
            assert_eq!(segment.pivot.rotation.x, segment_pitch(1.7, i));
            assert_eq!(segment.pivot.rotation.z, segment_roll(1.7, i));
            assert_eq!(segment.pivot.rotation.y, 0.0);
        }
        assert_eq!(strand.group.position, Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_spawn_is_deterministic_for_seed() {
        let a = SeaweedStrand::spawn(&mut StdRng::seed_from_u64(42), 8);
        let b = SeaweedStrand::spawn(&mut StdRng::seed_from_u64(42), 8);
        assert_eq!(a, b);
    }
}
