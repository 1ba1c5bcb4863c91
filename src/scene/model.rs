use crate::scene::material::MaterialRegistry;
use crate::scene::object::Object;

/// Everything one parse session produced: the finalized objects in file
/// order plus the material registry their face buckets reference.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub objects: Vec<Object>,
    pub materials: MaterialRegistry,
}

impl Model {
    pub fn new(objects: Vec<Object>, materials: MaterialRegistry) -> Self {
        Self { objects, materials }
    }
}
