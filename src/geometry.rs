//! Procedural meshes for every `MeshId`.
//!
//! Shapes mirror the usual sphere/cylinder/box parameterization: spheres
//! are UV spheres, cylinders are capped frustums along +Y centered on the
//! origin, boxes are centered on the origin.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::entities::MeshId;
use crate::types::Vertex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
}

impl MeshId {
    pub fn shape(self) -> Shape {
        match self {
            MeshId::FishBody => sphere(0.4, 32, 32),
            MeshId::FishStripe => cylinder(0.41, 0.41, 0.15, 32),
            MeshId::FishEye => sphere(0.08, 32, 32),
            MeshId::FishPupil => sphere(0.05, 32, 32),
            MeshId::FishTail => cuboid(0.4, 0.3, 0.1),
            MeshId::FishFin => cuboid(0.3, 0.2, 0.1),
            MeshId::FishSideFin => cuboid(0.2, 0.15, 0.05),
            MeshId::FishMouth => cylinder(0.05, 0.05, 0.1, 32),
            MeshId::SeaweedStem => cylinder(0.05, 0.08, 0.3, 8),
            MeshId::SeaweedLeaf => sphere(0.1, 8, 8),
            MeshId::Bubble => sphere(0.1, 16, 16),
        }
    }
}

const fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Shape {
    Shape::Sphere {
        radius,
        width_segments,
        height_segments,
    }
}

const fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Shape {
    Shape::Cylinder {
        radius_top,
        radius_bottom,
        height,
        radial_segments,
    }
}

const fn cuboid(width: f32, height: f32, depth: f32) -> Shape {
    Shape::Cuboid {
        width,
        height,
        depth,
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn build(shape: Shape) -> Self {
        let mut mesh = MeshData::default();
        match shape {
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => mesh.push_sphere(radius, width_segments.max(3), height_segments.max(2)),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            } => mesh.push_cylinder(radius_top, radius_bottom, height, radial_segments.max(3)),
            Shape::Cuboid {
                width,
                height,
                depth,
            } => mesh.push_cuboid(width, height, depth),
        }
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        index
    }

    fn push_sphere(&mut self, radius: f32, width_segments: u32, height_segments: u32) {
        let columns = width_segments + 1;
        for y in 0..=height_segments {
            let v = y as f32 / height_segments as f32;
            let theta = v * PI;
            for x in 0..=width_segments {
                let u = x as f32 / width_segments as f32;
                let phi = u * TAU;
                let normal = Vec3::new(
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                );
                self.push_vertex(normal * radius, normal);
            }
        }

        // Counter-clockwise seen from outside
        for y in 0..height_segments {
            for x in 0..width_segments {
                let a = y * columns + x + 1;
                let b = y * columns + x;
                let c = (y + 1) * columns + x;
                let d = (y + 1) * columns + x + 1;
                if y != 0 {
                    self.indices.extend_from_slice(&[a, b, d]);
                }
                if y != height_segments - 1 {
                    self.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
    }

    fn push_cylinder(&mut self, radius_top: f32, radius_bottom: f32, height: f32, segments: u32) {
        let half = height * 0.5;
        let slope = (radius_bottom - radius_top) / height;
        let base = self.vertices.len() as u32;

        // Side wall: two rings, seam duplicated
        for (y, radius) in [(half, radius_top), (-half, radius_bottom)] {
            for i in 0..=segments {
                let angle = i as f32 / segments as f32 * TAU;
                let (sin, cos) = angle.sin_cos();
                let normal = Vec3::new(sin, slope, cos).normalize();
                self.push_vertex(Vec3::new(radius * sin, y, radius * cos), normal);
            }
        }
        let ring = segments + 1;
        for i in 0..segments {
            let top_a = base + i;
            let top_b = base + i + 1;
            let bottom_a = base + ring + i;
            let bottom_b = base + ring + i + 1;
            self.indices.extend_from_slice(&[top_a, bottom_a, top_b]);
            self.indices.extend_from_slice(&[bottom_a, bottom_b, top_b]);
        }

        self.push_cap(half, radius_top, segments, true);
        self.push_cap(-half, radius_bottom, segments, false);
    }

    fn push_cap(&mut self, y: f32, radius: f32, segments: u32, top: bool) {
        if radius <= 0.0 {
            return;
        }
        let normal = if top { Vec3::Y } else { Vec3::NEG_Y };
        let center = self.push_vertex(Vec3::new(0.0, y, 0.0), normal);
        let first = self.vertices.len() as u32;
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            self.push_vertex(Vec3::new(radius * sin, y, radius * cos), normal);
        }
        for i in 0..segments {
            let a = first + i;
            let b = first + i + 1;
            if top {
                self.indices.extend_from_slice(&[center, a, b]);
            } else {
                self.indices.extend_from_slice(&[center, b, a]);
            }
        }
    }

    fn push_cuboid(&mut self, width: f32, height: f32, depth: f32) {
        let half = Vec3::new(width, height, depth) * 0.5;
        // (normal, u axis, v axis) with u x v == normal
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];
        for (normal, u, v) in faces {
            let center = normal * half;
            let du = u * half;
            let dv = v * half;
            let a = self.push_vertex(center - du - dv, normal);
            let b = self.push_vertex(center + du - dv, normal);
            let c = self.push_vertex(center + du + dv, normal);
            let d = self.push_vertex(center - du + dv, normal);
            self.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
}

/// Every mesh packed into one vertex/index buffer pair.
#[derive(Debug, Clone, Default)]
pub struct MeshLibrary {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    ranges: Vec<MeshRange>,
}

/// Where one mesh lives inside the packed buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshRange {
    pub first_index: u32,
    pub index_count: u32,
    pub base_vertex: i32,
}

impl MeshLibrary {
    pub fn build() -> Self {
        let mut library = MeshLibrary::default();
        for id in MeshId::ALL {
            let mesh = MeshData::build(id.shape());
            library.ranges.push(MeshRange {
                first_index: library.indices.len() as u32,
                index_count: mesh.indices.len() as u32,
                base_vertex: library.vertices.len() as i32,
            });
            library.vertices.extend(mesh.vertices);
            library.indices.extend(mesh.indices);
        }
        library
    }

    pub fn range(&self, id: MeshId) -> MeshRange {
        self.ranges[id.index()]
    }
}
