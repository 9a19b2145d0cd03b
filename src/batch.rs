use std::ops::Range;

use crate::entities::MeshId;
use crate::scene::OceanScene;
use crate::types::InstanceRaw;

/// One instanced draw: a mesh and the slice of the instance buffer it uses.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub mesh: MeshId,
    pub instances: Range<u32>,
    pub transparent: bool,
}

/// Per-frame instance data grouped by mesh, opaque draws first.
///
/// Buckets are kept between frames so a steady scene does not allocate.
#[derive(Debug, Default)]
pub struct InstanceBatches {
    buckets: Vec<Vec<InstanceRaw>>,
    instances: Vec<InstanceRaw>,
    draws: Vec<DrawBatch>,
}

impl InstanceBatches {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); MeshId::ALL.len() * 2],
            instances: Vec::new(),
            draws: Vec::new(),
        }
    }

    fn bucket(mesh: MeshId, transparent: bool) -> usize {
        mesh.index() * 2 + usize::from(transparent)
    }

    pub fn fill(&mut self, scene: &OceanScene) {
        if self.buckets.len() != MeshId::ALL.len() * 2 {
            self.buckets = vec![Vec::new(); MeshId::ALL.len() * 2];
        }
        for bucket in &mut self.buckets {
            bucket.clear();
        }

        let buckets = &mut self.buckets;
        scene.for_each_mesh(|model, mesh| {
            let transparent = mesh.material.is_transparent();
            let raw = InstanceRaw::new(model, &mesh.material);
            buckets[Self::bucket(mesh.mesh, transparent)].push(raw);
        });

        self.instances.clear();
        self.draws.clear();
        for transparent in [false, true] {
            for mesh in MeshId::ALL {
                let bucket = &self.buckets[Self::bucket(mesh, transparent)];
                if bucket.is_empty() {
                    continue;
                }
                let start = self.instances.len() as u32;
                self.instances.extend_from_slice(bucket);
                self.draws.push(DrawBatch {
                    mesh,
                    instances: start..self.instances.len() as u32,
                    transparent,
                });
            }
        }
    }

    pub fn instances(&self) -> &[InstanceRaw] {
        &self.instances
    }

    pub fn draws(&self) -> &[DrawBatch] {
        &self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OceanConfig;

    fn scene() -> OceanScene {
        OceanScene::new(&OceanConfig {
            seed: Some(3),
            ..OceanConfig::default()
        })
    }

    #[test]
    fn test_every_mesh_lands_in_one_batch() {
        let scene = scene();
        let mut batches = InstanceBatches::new();
        batches.fill(&scene);

        assert_eq!(batches.instances().len(), scene.mesh_instance_count());
        let drawn: u32 = batches.draws().iter().map(|d| d.instances.len() as u32).sum();
        assert_eq!(drawn as usize, scene.mesh_instance_count());
    }

    #[test]
    fn test_transparent_draws_come_last() {
        let mut batches = InstanceBatches::new();
        batches.fill(&scene());

        let first_transparent = batches
            .draws()
            .iter()
            .position(|d| d.transparent)
            .expect("bubbles are transparent");
        assert!(batches.draws()[first_transparent..].iter().all(|d| d.transparent));

        let bubbles = batches.draws().iter().find(|d| d.mesh == MeshId::Bubble).unwrap();
        assert!(bubbles.transparent);
        assert_eq!(bubbles.instances.len(), 50);
    }

    #[test]
    fn test_refill_does_not_accumulate() {
        let scene = scene();
        let mut batches = InstanceBatches::new();
        batches.fill(&scene);
        batches.fill(&scene);
        assert_eq!(batches.instances().len(), scene.mesh_instance_count());
    }

    #[test]
    fn test_seaweed_batches_by_mesh() {
        let mut batches = InstanceBatches::new();
        batches.fill(&scene());
        let stems = batches.draws().iter().find(|d| d.mesh == MeshId::SeaweedStem).unwrap();
        assert_eq!(stems.instances.len(), 15 * 8);
        assert!(!stems.transparent);
    }
}
