pub mod matrix;
pub mod transform;
