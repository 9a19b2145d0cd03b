use glam::Vec3;
use ocean_explorer::entities::{
    bottom_fin_roll, fish_yaw, segment_pitch, tail_yaw, top_fin_roll, Bubble, Entity, Fish,
    SeaweedStrand, BUBBLE_CEILING, SEGMENT_PHASE,
};
use ocean_explorer::traits::Animate;
use ocean_explorer::ProceduralAnimator;

#[cfg(test)]
mod fish_tests {
    use super::*;

    #[test]
    fn test_fins_are_exact_opposites() {
        for i in 0..500 {
            let t = i as f32 * 0.037;
            assert_eq!(top_fin_roll(t), -bottom_fin_roll(t), "t = {}", t);
        }
    }

    #[test]
    fn test_fish_at_rest_at_time_zero() {
        let mut fish = Fish::new(Vec3::ZERO);
        fish.animate(0.0);

        assert_eq!(fish.group.rotation.y, 0.0);
        assert_eq!(fish.group.position.y, 0.0);
        assert_eq!(fish.tail().pivot.rotation.y, 0.0);
        assert_eq!(fish.top_fin().pivot.rotation.z, 0.0);
        assert_eq!(fish.bottom_fin().pivot.rotation.z, 0.0);
    }

    #[test]
    fn test_yaw_is_absolute_and_bob_accumulates() {
        let mut fish = Fish::new(Vec3::ZERO);
        fish.animate(0.5);
        fish.animate(0.5);

        assert_eq!(fish.group.rotation.y, fish_yaw(0.5));
        assert_eq!(fish.tail().pivot.rotation.y, tail_yaw(0.5));
        let step = (0.5f32 * 1.5).sin() * 0.002;
        assert!((fish.group.position.y - 2.0 * step).abs() < 1e-7);
    }
}

#[cfg(test)]
mod seaweed_tests {
    use super::*;

    #[test]
    fn test_segment_phase_offset() {
        let t = 1.7;
        for i in 0..8 {
            let expected = (t * 2.0 + i as f32 * SEGMENT_PHASE).sin() * 0.1;
            assert_eq!(segment_pitch(t, i), expected);
            assert_eq!(segment_pitch(t, i), segment_pitch(t, i));
        }
    }

    #[test]
    fn test_strand_position_never_changes() {
        let mut strand = SeaweedStrand::new(Vec3::new(3.0, -4.0, 1.0), 8);
        for i in 0..60 {
            strand.animate(i as f32 / 60.0);
        }
        assert_eq!(strand.group.position, Vec3::new(3.0, -4.0, 1.0));
        assert_eq!(strand.segments().len(), 8);
    }
}

#[cfg(test)]
mod bubble_tests {
    use super::*;

    #[test]
    fn test_wrap_returns_to_exact_start_height() {
        let start = Vec3::new(1.0, -3.5, 2.0);
        let speed = 0.7;
        let mut bubble = Bubble::new(start, speed, 2.0, 0.2);

        let mut wrapped = false;
        for frame in 0..200 {
            let before = bubble.position.y;
            bubble.animate(frame as f32 / 60.0);
            if before + speed > BUBBLE_CEILING {
                assert_eq!(bubble.position.y, start.y, "wrap at frame {}", frame);
                wrapped = true;
                break;
            }
            assert!(bubble.position.y > before);
        }
        assert!(wrapped);
    }

    #[test]
    fn test_bubble_parameters_fixed_for_lifetime() {
        let mut bubble = Bubble::new(Vec3::ZERO, 0.02, 1.5, 0.25);
        for i in 0..100 {
            bubble.animate(i as f32 * 0.1);
        }
        assert_eq!(bubble.speed(), 0.02);
        assert_eq!(bubble.wobble_speed(), 1.5);
        assert_eq!(bubble.wobble_amount(), 0.25);
        assert_eq!(bubble.start(), Vec3::ZERO);
    }
}

#[cfg(test)]
mod animator_tests {
    use super::*;

    #[test]
    fn test_animator_drives_every_entity_with_one_time() {
        let mut entities = vec![
            Entity::Fish(Fish::new(Vec3::ZERO)),
            Entity::Seaweed(SeaweedStrand::new(Vec3::ZERO, 4)),
            Entity::Bubble(Bubble::new(Vec3::ZERO, 0.01, 2.0, 0.1)),
        ];
        let mut animator = ProceduralAnimator::new();
        animator.update(0.8, &mut entities);

        let fish = entities[0].as_fish().unwrap();
        assert_eq!(fish.top_fin().pivot.rotation.z, top_fin_roll(0.8));
        let strand = entities[1].as_seaweed().unwrap();
        assert_eq!(strand.segments()[2].pivot.rotation.x, segment_pitch(0.8, 2));
        let bubble = entities[2].as_bubble().unwrap();
        assert_eq!(bubble.position.y, 0.01);

        assert_eq!(animator.steps(), 1);
        assert_eq!(animator.last_time(), Some(0.8));
    }
}
