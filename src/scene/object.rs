use crate::core::geometry::{Face, Vertex};
use std::collections::HashMap;

/// Finalized snapshot of one `o` block, handed to the rendering layer.
///
/// `material_faces` maps a material name to indices into `faces`; the flat
/// face list is the sole owner of face data, so the two views cannot
/// diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
    pub smooth_shading: bool,
    pub material_faces: HashMap<String, Vec<usize>>,
}

/// Mutable accumulator the object parser drives.
///
/// Created once per parse session, mutated exclusively by directive
/// handlers, and frozen into an [`Object`] at each `o` boundary that has
/// accumulated at least one face, and again at end of file.
#[derive(Debug, Default)]
pub struct ObjectData {
    name: String,
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    smooth_shading: bool,
    active_material: Option<String>,
    material_faces: HashMap<String, Vec<usize>>,
}

impl ObjectData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_smooth_shading(&mut self, smooth_shading: bool) {
        self.smooth_shading = smooth_shading;
    }

    pub fn set_active_material(&mut self, name: &str) {
        self.active_material = Some(name.to_string());
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn has_faces(&self) -> bool {
        !self.faces.is_empty()
    }

    /// Appends a triangle, recording its index in the active material's
    /// bucket when a `usemtl` is in effect.
    pub fn add_face(&mut self, face: Face) {
        if let Some(material) = &self.active_material {
            self.material_faces
                .entry(material.clone())
                .or_default()
                .push(self.faces.len());
        }
        self.faces.push(face);
    }

    /// Freezes the accumulated state into an [`Object`] and resets the
    /// accumulator for the next `o` block.
    pub fn finish(&mut self) -> Object {
        let object = Object {
            name: std::mem::take(&mut self.name),
            vertices: std::mem::take(&mut self.vertices),
            faces: std::mem::take(&mut self.faces),
            smooth_shading: self.smooth_shading,
            material_faces: std::mem::take(&mut self.material_faces),
        };
        self.smooth_shading = false;
        self.active_material = None;
        object
    }

    /// Discards the accumulated state without emitting an object.
    pub fn reset(&mut self) {
        let _ = self.finish();
    }
}
