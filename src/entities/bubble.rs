use glam::Vec3;
use rand::Rng;

use super::{random_scatter_position, Material, MeshId, MeshInstance, Part};
use crate::math::Transform;
use crate::traits::Animate;

/// Height above which a bubble is sent back to where it started.
pub const BUBBLE_CEILING: f32 = 20.0;
/// Horizontal wobble coefficient applied every frame.
pub const BUBBLE_WOBBLE_STEP: f32 = 0.01;
/// Surface wobble of the bubble shell, applied in the vertex shader.
pub const BUBBLE_DISTORT: f32 = 0.3;
pub const BUBBLE_DISTORT_SPEED: f32 = 2.0;

/// Rising bubble with fixed per-instance motion parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub position: Vec3,
    start: Vec3,
    speed: f32,
    wobble_speed: f32,
    /// Drawn at spawn but not used by the wobble; the step is always
    /// `BUBBLE_WOBBLE_STEP`.
    wobble_amount: f32,
    parts: [Part; 1],
}

impl Bubble {
    pub fn new(start: Vec3, speed: f32, wobble_speed: f32, wobble_amount: f32) -> Self {
        let material = Material::from_hex(0xffffff)
            .opacity(0.2)
            .distort(BUBBLE_DISTORT, BUBBLE_DISTORT_SPEED);
        Self {
            position: start,
            start,
            speed,
            wobble_speed,
            wobble_amount,
            parts: [Part::new(
                Transform::IDENTITY,
                vec![MeshInstance::at_origin(MeshId::Bubble, material)],
            )],
        }
    }

    /// Draw start position, rise speed in `[0.01, 0.03)`, wobble speed in
    /// `[1, 3)` and wobble amount in `[0.1, 0.3)`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let start = random_scatter_position(rng);
        let speed = rng.gen_range(0.01..0.03);
        let wobble_speed = rng.gen_range(1.0..3.0);
        let wobble_amount = rng.gen_range(0.1..0.3);
        Self::new(start, speed, wobble_speed, wobble_amount)
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn wobble_speed(&self) -> f32 {
        self.wobble_speed
    }

    pub fn wobble_amount(&self) -> f32 {
        self.wobble_amount
    }

    pub fn group(&self) -> Transform {
        Transform::from_position(self.position)
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl Animate for Bubble {
    fn animate(&mut self, time: f32) {
        self.position.y += self.speed;
        self.position.x += (time * self.wobble_speed).sin() * BUBBLE_WOBBLE_STEP;
        // Jump straight back; x keeps its drift
        if self.position.y > BUBBLE_CEILING {
            self.position.y = self.start.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rises_by_speed() {
        let mut bubble = Bubble::new(Vec3::new(0.0, -5.0, 0.0), 0.02, 2.0, 0.2);
        bubble.animate(0.0);
        assert_eq!(bubble.position.y, -5.0 + 0.02);
        assert_eq!(bubble.position.x, 0.0);
    }

    #[test]
    fn test_wobble_ignores_amount() {
        let mut small = Bubble::new(Vec3::ZERO, 0.01, 2.0, 0.1);
        let mut large = Bubble::new(Vec3::ZERO, 0.01, 2.0, 0.29);
        small.animate(0.7);
        large.animate(0.7);
        assert_eq!(small.position, large.position);
        assert_eq!(small.position.x, (0.7f32 * 2.0).sin() * 0.01);
    }

    #[test]
    fn test_wraps_to_start_height() {
        let start = Vec3::new(3.0, -12.5, 1.0);
        let mut bubble = Bubble::new(start, 0.03, 1.5, 0.2);
        let mut frames = 0;
        let mut last_y = start.y;
        loop {
            bubble.animate(frames as f32 / 60.0);
            frames += 1;
            if bubble.position.y < last_y {
                break;
            }
            assert!(bubble.position.y <= BUBBLE_CEILING);
            last_y = bubble.position.y;
        }
        assert_eq!(bubble.position.y, start.y);
        assert!(frames > 1000);
    }

    #[test]
    fn test_shell_is_distorted() {
        let bubble = Bubble::new(Vec3::ZERO, 0.01, 2.0, 0.1);
        let material = bubble.parts()[0].meshes[0].material;
        assert!(material.is_distorted());
        assert!(material.is_transparent());
        assert_eq!(material.distort, 0.3);
        assert_eq!(material.distort_speed, 2.0);
    }

    #[test]
    fn test_exactly_at_ceiling_does_not_wrap() {
        let mut bubble = Bubble::new(Vec3::new(0.0, 19.0, 0.0), 1.0, 1.0, 0.1);
        bubble.animate(0.0);
        assert_eq!(bubble.position.y, 20.0);
        bubble.animate(0.0);
        assert_eq!(bubble.position.y, 19.0);
    }

    #[test]
    fn test_spawn_parameters_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let bubble = Bubble::spawn(&mut rng);
            assert!(bubble.speed() >= 0.01 && bubble.speed() < 0.03);
            assert!(bubble.wobble_speed() >= 1.0 && bubble.wobble_speed() < 3.0);
            assert!(bubble.wobble_amount() >= 0.1 && bubble.wobble_amount() < 0.3);
            assert_eq!(bubble.position, bubble.start());
        }
    }

    #[test]
    fn test_parameters_survive_animation() {
        let mut bubble = Bubble::spawn(&mut StdRng::seed_from_u64(1));
        let (speed, wobble_speed, amount) =
            (bubble.speed(), bubble.wobble_speed(), bubble.wobble_amount());
        for i in 0..2000 {
            bubble.animate(i as f32 / 60.0);
        }
        assert_eq!(bubble.speed(), speed);
        assert_eq!(bubble.wobble_speed(), wobble_speed);
        assert_eq!(bubble.wobble_amount(), amount);
    }
}
