use crate::entities::Entity;
use crate::traits::Animate;

/// Drives every entity from one shared clock.
///
/// Holds no per-entity state; it only remembers the last time it was fed so
/// a clock running backwards shows up in the logs.
#[derive(Debug, Default, Clone)]
pub struct ProceduralAnimator {
    last_time: Option<f32>,
    steps: u64,
}

impl ProceduralAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, time: f32, entities: &mut [Entity]) {
        if let Some(last) = self.last_time {
            if time < last {
                log::warn!("animation clock went backwards: {} -> {}", last, time);
            }
        }
        self.last_time = Some(time);
        self.steps += 1;

        for entity in entities.iter_mut() {
            entity.animate(time);
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn last_time(&self) -> Option<f32> {
        self.last_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{tail_yaw, Bubble, Fish, SeaweedStrand};
    use glam::Vec3;

    #[test]
    fn test_update_reaches_every_entity() {
        let mut entities = vec![
            Entity::Fish(Fish::new(Vec3::ZERO)),
            Entity::Seaweed(SeaweedStrand::new(Vec3::ZERO, 4)),
            Entity::Bubble(Bubble::new(Vec3::ZERO, 0.02, 1.0, 0.1)),
        ];
        let mut animator = ProceduralAnimator::new();
        animator.update(0.5, &mut entities);

        let fish = entities[0].as_fish().unwrap();
        assert_eq!(fish.tail().pivot.rotation.y, tail_yaw(0.5));

        let strand = entities[1].as_seaweed().unwrap();
        assert_ne!(strand.segments()[0].pivot.rotation.z, 0.0);

        let bubble = entities[2].as_bubble().unwrap();
        assert_eq!(bubble.position.y, 0.02);

        assert_eq!(animator.steps(), 1);
        assert_eq!(animator.last_time(), Some(0.5));
    }

    #[test]
    fn test_empty_table_is_fine() {
        let mut animator = ProceduralAnimator::new();
        animator.update(1.0, &mut []);
        assert_eq!(animator.steps(), 1);
    }
}
