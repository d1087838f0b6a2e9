// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures
//!
//! [`Mesh`] is the generator output: shared vertices and planar polygon
//! faces, each tagged with exactly one material group. [`TriangleMesh`] is
//! the render-oriented form produced by [`Mesh::triangulate`].

use cynthia_core::MaterialId;
use nalgebra::{Matrix4, Point3, Vector3};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::Result;
use crate::triangulation::{calculate_polygon_normal, project_to_2d, triangulate_polygon};

/// A planar polygon face
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex indices, counter-clockwise seen from the front
    pub indices: SmallVec<[u32; 4]>,
    /// Index into [`Mesh::groups`]
    pub group: usize,
}

/// Polygon mesh partitioned into named material groups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<Face>,
    groups: Vec<&'static str>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with `groups` declared up front, so they are reported
    /// even if no face ends up in them.
    pub fn with_groups(groups: &[&'static str]) -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            groups: groups.to_vec(),
        }
    }

    /// Index of `name`, declaring it if needed
    pub fn declare_group(&mut self, name: &'static str) -> usize {
        match self.group_index(name) {
            Some(index) => index,
            None => {
                self.groups.push(name);
                self.groups.len() - 1
            }
        }
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| *g == name)
    }

    /// Declared group names in declaration order
    pub fn groups(&self) -> &[&'static str] {
        &self.groups
    }

    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        self.vertices.push(position);
        (self.vertices.len() - 1) as u32
    }

    /// Add a face over existing vertices. Faces with fewer than three
    /// vertices are dropped.
    #[inline]
    pub fn add_face(&mut self, indices: &[u32], group: usize) {
        if indices.len() < 3 {
            return;
        }
        debug_assert!(group < self.groups.len());
        self.faces.push(Face {
            indices: SmallVec::from_slice(indices),
            group,
        });
    }

    /// Add a face together with its own vertices
    pub fn add_polygon(&mut self, points: &[Point3<f64>], group: usize) {
        if points.len() < 3 {
            return;
        }
        let indices: SmallVec<[u32; 4]> = points.iter().map(|p| self.add_vertex(*p)).collect();
        self.add_face(&indices, group);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face indices belonging to `name`; empty for unknown groups
    pub fn group_faces(&self, name: &str) -> Vec<usize> {
        match self.group_index(name) {
            Some(group) => self
                .faces
                .iter()
                .enumerate()
                .filter(|(_, f)| f.group == group)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every declared group with its face indices
    pub fn partition(&self) -> Vec<(&'static str, Vec<usize>)> {
        let mut parts: Vec<(&'static str, Vec<usize>)> =
            self.groups.iter().map(|g| (*g, Vec::new())).collect();
        for (index, face) in self.faces.iter().enumerate() {
            parts[face.group].1.push(index);
        }
        parts
    }

    /// Positions of a face's corners
    pub fn face_points(&self, face: &Face) -> Vec<Point3<f64>> {
        face.indices
            .iter()
            .map(|&i| self.vertices[i as usize])
            .collect()
    }

    /// Axis-aligned bounds, `None` for a mesh without vertices
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().skip(1).fold((first, first), |(mut min, mut max), p| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
            (min, max)
        }))
    }

    /// Append `other`, matching groups by name
    pub fn merge(&mut self, other: &Mesh) {
        let vertex_offset = self.vertices.len() as u32;
        let remap: Vec<usize> = other.groups.iter().map(|g| self.declare_group(*g)).collect();

        self.vertices.extend_from_slice(&other.vertices);
        self.faces.reserve(other.faces.len());
        for face in &other.faces {
            self.faces.push(Face {
                indices: face.indices.iter().map(|i| i + vertex_offset).collect(),
                group: remap[face.group],
            });
        }
    }

    /// Apply an affine transform to every vertex
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        for v in &mut self.vertices {
            *v = matrix.transform_point(v);
        }
    }

    /// Merge vertices closer than `tolerance` (on a grid of that size) and
    /// drop the unreferenced ones. Returns the number of vertices removed.
    pub fn weld(&mut self, tolerance: f64) -> usize {
        let before = self.vertices.len();
        let scale = 1.0 / tolerance.max(f64::EPSILON);
        let key = |p: &Point3<f64>| {
            (
                (p.x * scale).round() as i64,
                (p.y * scale).round() as i64,
                (p.z * scale).round() as i64,
            )
        };

        let mut seen: FxHashMap<(i64, i64, i64), u32> = FxHashMap::default();
        let mut vertices = Vec::with_capacity(before);
        let mut remap = vec![0u32; before];
        for (old, p) in self.vertices.iter().enumerate() {
            remap[old] = *seen.entry(key(p)).or_insert_with(|| {
                vertices.push(*p);
                (vertices.len() - 1) as u32
            });
        }

        for face in &mut self.faces {
            for index in face.indices.iter_mut() {
                *index = remap[*index as usize];
            }
        }
        self.vertices = vertices;
        before - self.vertices.len()
    }

    /// Triangulate every face, producing one triangle mesh per group.
    ///
    /// Groups without faces are skipped.
    pub fn triangulate(&self) -> Result<SubMeshCollection> {
        let mut per_group: Vec<TriangleMesh> = vec![TriangleMesh::new(); self.groups.len()];

        for face in &self.faces {
            let points = self.face_points(face);
            let normal = calculate_polygon_normal(&points);
            let (points_2d, _, _, _) = project_to_2d(&points, &normal);
            let triangles = triangulate_polygon(&points_2d)?;

            let target = &mut per_group[face.group];
            let base = target.vertex_count() as u32;
            for p in &points {
                target.add_vertex(*p, normal);
            }
            for tri in triangles.chunks_exact(3) {
                target.add_triangle(base + tri[0] as u32, base + tri[1] as u32, base + tri[2] as u32);
            }
        }

        let mut collection = SubMeshCollection::new();
        for (group, mesh) in self.groups.iter().zip(per_group) {
            collection.add(*group, mesh);
        }
        Ok(collection)
    }
}

/// Binding of one material group to a host material slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialBinding {
    pub group: &'static str,
    pub material: Option<MaterialId>,
}

/// A generated mesh with its material bindings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedMesh {
    pub mesh: Mesh,
    /// One entry per declared group, including groups without faces
    pub bindings: Vec<MaterialBinding>,
}

impl GeneratedMesh {
    pub fn new(mesh: Mesh, bindings: Vec<MaterialBinding>) -> Self {
        Self { mesh, bindings }
    }

    pub fn binding(&self, group: &str) -> Option<&MaterialBinding> {
        self.bindings.iter().find(|b| b.group == group)
    }
}

/// Triangle mesh
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Triangles of one material group
#[derive(Debug, Clone)]
pub struct SubMesh {
    pub group: &'static str,
    pub mesh: TriangleMesh,
}

/// Per-group triangle meshes of an element
#[derive(Debug, Clone, Default)]
pub struct SubMeshCollection {
    pub sub_meshes: Vec<SubMesh>,
}

impl SubMeshCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self { sub_meshes: Vec::new() }
    }

    /// Add a sub-mesh
    pub fn add(&mut self, group: &'static str, mesh: TriangleMesh) {
        if !mesh.is_empty() {
            self.sub_meshes.push(SubMesh { group, mesh });
        }
    }

    pub fn get(&self, group: &str) -> Option<&TriangleMesh> {
        self.sub_meshes.iter().find(|s| s.group == group).map(|s| &s.mesh)
    }

    /// Check if collection is empty
    pub fn is_empty(&self) -> bool {
        self.sub_meshes.is_empty()
    }

    /// Get number of sub-meshes
    pub fn len(&self) -> usize {
        self.sub_meshes.len()
    }

    /// Iterate over sub-meshes
    pub fn iter(&self) -> impl Iterator<Item = &SubMesh> {
        self.sub_meshes.iter()
    }
}
