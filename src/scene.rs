pub mod material;
pub mod model;
pub mod object;
