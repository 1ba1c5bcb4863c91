//! Wavefront OBJ/MTL parsing and transform math.
//!
//! The crate exposes one loading entry point, [`load_obj`], which parses a
//! geometry file (and the material files it references) into a triangulated,
//! material-tagged [`Model`], and a dense [`Matrix`] type whose constructors
//! (rotation, perspective, look-at) build the transforms a rendering layer
//! needs. Parsing is single-threaded and fail-fast; see [`error::Error`].

pub mod core;
pub mod error;
pub mod io;
pub mod scene;

pub use crate::core::geometry::{Face, Vertex};
pub use crate::core::math::matrix::Matrix;
pub use crate::error::{DirectiveError, Error, Result};
pub use crate::io::obj_loader::load_obj;
pub use crate::scene::material::{Material, MaterialRegistry};
pub use crate::scene::model::Model;
pub use crate::scene::object::{Object, ObjectData};
