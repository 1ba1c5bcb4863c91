/// A vertex in homogeneous coordinates.
///
/// `x`, `y` and `z` are stored dehomogenized (already divided by `w`), so
/// consumers read Euclidean coordinates directly. `w` keeps the fourth
/// component as written in the file; it is never zero for a stored vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

/// A triangle: three 0-based indices into the owning object's vertex list.
///
/// Faces of higher arity never survive parsing; the triangulator reduces
/// them before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face(pub [usize; 3]);

impl Face {
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }
}
