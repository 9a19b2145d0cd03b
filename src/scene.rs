use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animator::ProceduralAnimator;
use crate::camera::{DepthCamera, OCEAN_TEAL};
use crate::config::OceanConfig;
use crate::entities::{Bubble, Entity, Fish, MeshInstance, SeaweedStrand};
use crate::frame::FrameInfo;
use crate::lighting::Lighting;
use crate::math::hex_to_linear;
use crate::traits::OffsetSource;

/// Everything one frame update reads: the clock sample and the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub frame: FrameInfo,
    pub scroll_offset: f32,
}

impl FrameContext {
    pub fn new(frame: FrameInfo, scroll: &dyn OffsetSource) -> Self {
        Self {
            frame,
            scroll_offset: scroll.current_offset(),
        }
    }

    /// Context for a bare time and offset, without a running clock.
    pub fn at(time: f32, scroll_offset: f32) -> Self {
        Self {
            frame: FrameInfo::new(0, time, 0.0),
            scroll_offset,
        }
    }
}

/// The ocean: entity table, depth camera and light rig.
///
/// Entities are created once here and live for the whole session; the
/// frame update only moves them.
#[derive(Debug, Clone)]
pub struct OceanScene {
    entities: Vec<Entity>,
    camera: DepthCamera,
    lighting: Lighting,
    animator: ProceduralAnimator,
    background: [f32; 3],
    seed: Option<u64>,
}

impl OceanScene {
    /// Build from config, seeding placement from `config.seed` or entropy.
    pub fn new(config: &OceanConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scene = Self::with_rng(config, &mut rng);
        scene.seed = Some(seed);
        log::info!(
            "ocean scene created: {} entities, {} meshes, seed {}",
            scene.entities.len(),
            scene.mesh_instance_count(),
            seed
        );
        scene
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &OceanConfig, rng: &mut R) -> Self {
        let mut entities = Vec::with_capacity(1 + config.seaweed_count + config.bubble_count);

        entities.push(Entity::Fish(Fish::new(Vec3::ZERO)));
        for _ in 0..config.seaweed_count {
            let strand = SeaweedStrand::spawn(&mut *rng, config.seaweed_segments);
            entities.push(Entity::Seaweed(strand));
        }
        for _ in 0..config.bubble_count {
            entities.push(Entity::Bubble(Bubble::spawn(&mut *rng)));
        }

        Self {
            entities,
            camera: DepthCamera::new(),
            lighting: Lighting::ocean(),
            animator: ProceduralAnimator::new(),
            background: hex_to_linear(OCEAN_TEAL),
            seed: None,
        }
    }

    /// One frame: depth camera first, then every entity.
    pub fn update(&mut self, ctx: &FrameContext) {
        self.camera.update(ctx.scroll_offset);
        self.animator.update(ctx.frame.time, &mut self.entities);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn camera(&self) -> &DepthCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut DepthCamera {
        &mut self.camera
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    /// Clear color, linear RGB.
    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn animator(&self) -> &ProceduralAnimator {
        &self.animator
    }

    pub fn fish(&self) -> impl Iterator<Item = &Fish> {
        self.entities.iter().filter_map(Entity::as_fish)
    }

    pub fn seaweed(&self) -> impl Iterator<Item = &SeaweedStrand> {
        self.entities.iter().filter_map(Entity::as_seaweed)
    }

    pub fn bubbles(&self) -> impl Iterator<Item = &Bubble> {
        self.entities.iter().filter_map(Entity::as_bubble)
    }

    pub fn mesh_instance_count(&self) -> usize {
        self.entities.iter().map(Entity::mesh_count).sum()
    }

    /// Visit every mesh with its world matrix (`group * pivot * local`).
    pub fn for_each_mesh<F>(&self, mut visit: F)
    where
        F: FnMut(Mat4, &MeshInstance),
    {
        for entity in &self.entities {
            let group = entity.group().matrix();
            for part in entity.parts() {
                let pivot = group * part.pivot.matrix();
                for mesh in &part.meshes {
                    visit(pivot * mesh.local.matrix(), mesh);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> OceanScene {
        OceanScene::new(&OceanConfig {
            seed: Some(seed),
            ..OceanConfig::default()
        })
    }

    #[test]
    fn test_default_population() {
        let scene = seeded(1);
        assert_eq!(scene.fish().count(), 1);
        assert_eq!(scene.seaweed().count(), 15);
        assert_eq!(scene.bubbles().count(), 50);
        assert!(scene.seaweed().all(|s| s.segments().len() == 8));
        assert_eq!(scene.seed(), Some(1));
    }

    #[test]
    fn test_fish_starts_at_origin() {
        let scene = seeded(2);
        let fish = scene.fish().next().unwrap();
        assert_eq!(fish.group.position, Vec3::ZERO);
    }

    #[test]
    fn test_mesh_count_matches_visits() {
        let scene = seeded(3);
        let mut visited = 0;
        scene.for_each_mesh(|_, _| visited += 1);
        assert_eq!(visited, scene.mesh_instance_count());
        // fish 10, seaweed 15 * 8 * 2, bubbles 50
        assert_eq!(visited, 10 + 240 + 50);
    }

    #[test]
    fn test_update_runs_camera_and_animator() {
        let mut scene = seeded(4);
        scene.update(&FrameContext::at(0.25, 400.0));
        assert_eq!(scene.camera().position.y, -2.0);
        assert_eq!(scene.animator().steps(), 1);
    }

    #[test]
    fn test_background_is_teal() {
        let scene = seeded(5);
        let bg = scene.background();
        assert_eq!(bg[0], 0.0);
        assert!(bg[2] > bg[1] && bg[1] > 0.0);
    }
}
