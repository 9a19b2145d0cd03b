use ocean_explorer::entities::{Entity, BUBBLE_CEILING};
use ocean_explorer::frame::FrameInfo;
use ocean_explorer::scene::{FrameContext, OceanScene};
use ocean_explorer::OceanConfig;

fn seeded(seed: u64) -> OceanScene {
    OceanScene::new(&OceanConfig {
        seed: Some(seed),
        ..OceanConfig::default()
    })
}

#[cfg(test)]
mod population_tests {
    use super::*;

    #[test]
    fn test_default_population() {
        let scene = seeded(1);
        assert_eq!(scene.fish().count(), 1);
        assert_eq!(scene.seaweed().count(), 15);
        assert_eq!(scene.bubbles().count(), 50);
        assert!(scene.seaweed().all(|s| s.segments().len() == 8));
        assert_eq!(scene.entities().len(), 66);
    }

    #[test]
    fn test_fish_starts_at_origin() {
        let scene = seeded(1);
        let fish = scene.fish().next().unwrap();
        assert_eq!(fish.group.position, glam::Vec3::ZERO);
    }

    #[test]
    fn test_same_seed_same_ocean() {
        let a = seeded(77);
        let b = seeded(77);
        let positions = |scene: &OceanScene| -> Vec<glam::Vec3> {
            scene.entities().iter().map(|e| e.group().position).collect()
        };
        assert_eq!(positions(&a), positions(&b));
        assert_eq!(a.seed(), Some(77));
    }

    #[test]
    fn test_different_seeds_scatter_differently() {
        let a = seeded(1);
        let b = seeded(2);
        let first = |scene: &OceanScene| scene.seaweed().next().unwrap().group.position;
        assert_ne!(first(&a), first(&b));
    }

    #[test]
    fn test_scatter_stays_in_bounds() {
        let scene = seeded(9);
        for entity in scene.entities() {
            if matches!(entity, Entity::Fish(_)) {
                continue;
            }
            let p = entity.group().position;
            assert!((-10.0..10.0).contains(&p.x));
            assert!((-10.0..10.0).contains(&p.z));
            assert!(p.y <= 0.0 && p.y > -20.0);
        }
    }

    #[test]
    fn test_custom_counts() {
        let scene = OceanScene::new(&OceanConfig {
            seed: Some(4),
            seaweed_count: 2,
            seaweed_segments: 3,
            bubble_count: 5,
            ..OceanConfig::default()
        });
        assert_eq!(scene.entities().len(), 8);
        assert_eq!(scene.mesh_instance_count(), 10 + 2 * 3 * 2 + 5);
    }
}

#[cfg(test)]
mod frame_update_tests {
    use super::*;

    #[test]
    fn test_update_moves_camera_then_entities() {
        let mut scene = seeded(5);
        scene.update(&FrameContext::new(FrameInfo::new(0, 0.5, 0.016), &800.0f32));

        assert_eq!(scene.camera().position.y, -4.0);
        assert_eq!(scene.animator().steps(), 1);
        assert_eq!(scene.animator().last_time(), Some(0.5));
    }

    #[test]
    fn test_seaweed_roots_never_move() {
        let mut scene = seeded(6);
        let before: Vec<_> = scene.seaweed().map(|s| s.group.position).collect();
        for i in 0..120 {
            scene.update(&FrameContext::at(i as f32 / 60.0, 0.0));
        }
        let after: Vec<_> = scene.seaweed().map(|s| s.group.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_bubbles_stay_below_ceiling() {
        let mut scene = seeded(8);
        for i in 0..3000 {
            scene.update(&FrameContext::at(i as f32 / 60.0, 0.0));
            assert!(scene.bubbles().all(|b| b.position.y <= BUBBLE_CEILING));
        }
    }

    #[test]
    fn test_background_stays_teal() {
        let mut scene = seeded(3);
        let background = scene.background();
        scene.update(&FrameContext::at(1.0, 5000.0));
        assert_eq!(scene.background(), background);
    }

    #[test]
    fn test_mesh_matrices_compose_group_first() {
        let mut scene = seeded(10);
        scene.update(&FrameContext::at(0.3, 0.0));

        let mut count = 0;
        scene.for_each_mesh(|model, _| {
            assert!(model.is_finite());
            count += 1;
        });
        assert_eq!(count, scene.mesh_instance_count());
        assert_eq!(count, 300);
    }
}
