//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangle faces, and metadata.

use glam::{DMat4, DVec3};

use crate::metadata::Metadata;

/// A triangle mesh with vertices, face indices, and descriptive metadata.
///
/// All geometry uses f64. Vertex order is load-bearing: faces reference
/// vertices by position index, so transforms never add, remove, or reorder
/// either list.
///
/// # Example
///
/// ```rust
/// use voronoi_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(0, 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle faces (3 vertex indices per face)
    faces: Vec<[u32; 3]>,
    /// Provenance metadata (mode and parameters that produced this mesh)
    metadata: Metadata,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            metadata: Metadata::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle face by vertex indices.
    pub fn add_face(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> [u32; 3] {
        self.faces[index]
    }

    /// Returns the metadata attached to this mesh.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns a mutable reference to the metadata.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Replaces the metadata wholesale.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }

    /// Computes the centroid as the arithmetic mean of vertex positions.
    ///
    /// Returns the origin for an empty mesh.
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }

        let sum: DVec3 = self.vertices.iter().copied().sum();
        sum / self.vertices.len() as f64
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Scales all vertices uniformly about the origin.
    pub fn scale_uniform(&mut self, factor: f64) {
        for v in &mut self.vertices {
            *v *= factor;
        }
    }

    /// Translates all vertices by an offset vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Validates face-index integrity.
    ///
    /// Checks:
    /// - Every face index is within `[0, vertex_count)`
    /// - No face repeats a vertex index
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for face in &self.faces {
            if face[0] >= vertex_count || face[1] >= vertex_count || face[2] >= vertex_count {
                return false;
            }

            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(mesh.metadata().is_empty());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_face() {
        let mesh = unit_triangle();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_centroid() {
        let mesh = unit_triangle();
        let centroid = mesh.centroid();
        assert!((centroid - DVec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_mesh_centroid_empty() {
        assert_eq!(Mesh::new().centroid(), DVec3::ZERO);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_scale_uniform() {
        let mut mesh = unit_triangle();
        mesh.scale_uniform(2.0);
        assert_eq!(mesh.vertex(1), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(2), DVec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_mesh_translate() {
        let mut mesh = unit_triangle();
        mesh.translate(DVec3::new(0.0, 0.0, 0.5));
        assert_eq!(mesh.vertex(0), DVec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_mesh_transform_rotation_about_pivot() {
        let mut mesh = unit_triangle();
        let pivot = mesh.centroid();
        let matrix = DMat4::from_translation(pivot)
            * DMat4::from_rotation_z(std::f64::consts::FRAC_PI_2)
            * DMat4::from_translation(-pivot);
        mesh.transform(&matrix);

        // The pivot itself is a fixed point of the rotation.
        assert!((mesh.centroid() - pivot).length() < 1e-12);
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate());
    }

    #[test]
    fn test_mesh_validate_out_of_range_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mut mesh = unit_triangle();
        mesh.add_face(0, 0, 1);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_clone_is_deep() {
        let original = unit_triangle();
        let mut copy = original.clone();
        copy.scale_uniform(3.0);
        assert_eq!(original.vertex(1), DVec3::new(1.0, 0.0, 0.0));
    }
}
