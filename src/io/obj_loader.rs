//! Wavefront OBJ parsing: directive dispatch, vertex and face validation,
//! triangulation and object accumulation.
//!
//! [`load_obj`] is the crate's single loading entry point. Parsing is
//! fail-fast and atomic: the first violation aborts the whole call and no
//! partial model is returned.

use crate::core::geometry::{Face, Vertex};
use crate::core::triangulate::triangulate;
use crate::error::{Error, Result};
use crate::io::{check_extension, mtl_loader, tokenizer};
use crate::scene::material::MaterialRegistry;
use crate::scene::model::Model;
use crate::scene::object::ObjectData;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// The closed set of directives the object parser understands. Anything
/// else on a non-blank line is an unknown-symbol error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Object,
    Vertex,
    Face,
    SmoothShading,
    MaterialLibrary,
    UseMaterial,
}

impl Directive {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "o" => Some(Self::Object),
            "v" => Some(Self::Vertex),
            "f" => Some(Self::Face),
            "s" => Some(Self::SmoothShading),
            "mtllib" => Some(Self::MaterialLibrary),
            "usemtl" => Some(Self::UseMaterial),
            _ => None,
        }
    }
}

/// Parses a `.obj` geometry file into a triangulated, material-tagged
/// [`Model`].
///
/// Material files named by `mtllib` are resolved relative to the OBJ file's
/// directory and parsed immediately; the registry they populate lives only
/// for this call and is returned inside the model.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Model> {
    let path = path.as_ref();
    check_extension(path, "obj")?;
    info!("Loading OBJ file: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut registry = MaterialRegistry::new();
    let mut data = ObjectData::new();
    let mut objects = Vec::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line_index = index + 1;
        let line = tokenizer::strip_comment(raw_line);
        let words = tokenizer::split(line);
        let Some((&symbol, args)) = words.split_first() else {
            continue;
        };

        let Some(directive) = Directive::from_symbol(symbol) else {
            return Err(Error::UnknownSymbol {
                symbol: symbol.to_string(),
                line: raw_line.to_string(),
                line_index,
            });
        };

        match directive {
            Directive::Object => {
                if data.has_faces() {
                    objects.push(data.finish());
                } else {
                    data.reset();
                }
                if args.len() != 1 {
                    return Err(Error::argument_count("o", raw_line, line_index));
                }
                data.set_name(args[0]);
            }
            Directive::Vertex => define_vertex(&mut data, args, raw_line, line_index)?,
            Directive::Face => define_face(&mut data, args, raw_line, line_index)?,
            Directive::SmoothShading => {
                define_smooth_shading(&mut data, args, raw_line, line_index)?
            }
            Directive::MaterialLibrary => {
                if args.len() != 1 {
                    return Err(Error::argument_count("mtllib", raw_line, line_index));
                }
                let mtl_path: PathBuf = directory.join(args[0]);
                registry.register(mtl_loader::load_mtl(&mtl_path)?);
            }
            Directive::UseMaterial => {
                if args.len() != 1 {
                    return Err(Error::argument_count("usemtl", raw_line, line_index));
                }
                if !registry.contains(args[0]) {
                    return Err(Error::unknown_material("usemtl", args[0], raw_line, line_index));
                }
                data.set_active_material(args[0]);
            }
        }
    }
    if data.has_faces() {
        objects.push(data.finish());
    }

    info!(
        "Parsed {} object(s) and {} material(s) from {}",
        objects.len(),
        registry.len(),
        path.display()
    );
    Ok(Model::new(objects, registry))
}

/// `v x y z [w]`: 3 or 4 strict floats. `w` defaults to 1 and must be
/// non-zero; x, y and z are dehomogenized before storage.
fn define_vertex(data: &mut ObjectData, args: &[&str], line: &str, line_index: usize) -> Result<()> {
    if args.len() < 3 || args.len() > 4 {
        return Err(Error::argument_count("v", line, line_index));
    }
    let mut components = [0.0, 0.0, 0.0, 1.0];
    for (slot, token) in components.iter_mut().zip(args) {
        *slot = tokenizer::parse_float(token).ok_or_else(|| {
            Error::argument_value("v", format!("`{token}` is not a number"), line, line_index)
        })?;
    }
    let w = components[3];
    if w == 0.0 {
        return Err(Error::argument_value(
            "v",
            "w must be non-zero",
            line,
            line_index,
        ));
    }
    data.add_vertex(Vertex::new(
        components[0] / w,
        components[1] / w,
        components[2] / w,
        w,
    ));
    Ok(())
}

/// `f i j k ...`: at least 3 strict integers, 1-based or negative-relative,
/// never 0, resolved against the vertices parsed so far. Triangles are
/// stored as-is; higher-arity polygons go through the ear clipper.
fn define_face(data: &mut ObjectData, args: &[&str], line: &str, line_index: usize) -> Result<()> {
    if args.len() < 3 {
        return Err(Error::argument_count("f", line, line_index));
    }
    let vertex_count = data.vertex_count() as i64;
    let mut polygon = Vec::with_capacity(args.len());
    for token in args {
        let id = tokenizer::parse_int(token).ok_or_else(|| {
            Error::argument_value("f", format!("`{token}` is not an integer"), line, line_index)
        })?;
        // unsigned_abs: `abs()` overflows on i64::MIN.
        if id == 0 || id.unsigned_abs() > vertex_count as u64 {
            return Err(Error::vertex_index("f", line, line_index));
        }
        let resolved = if id < 0 { vertex_count + id } else { id - 1 };
        polygon.push(resolved as usize);
    }

    if polygon.len() == 3 {
        data.add_face(Face([polygon[0], polygon[1], polygon[2]]));
    } else {
        for face in triangulate(data.vertices(), polygon) {
            data.add_face(face);
        }
    }
    Ok(())
}

/// `s on|off|1|0`.
fn define_smooth_shading(
    data: &mut ObjectData,
    args: &[&str],
    line: &str,
    line_index: usize,
) -> Result<()> {
    if args.len() != 1 {
        return Err(Error::argument_count("s", line, line_index));
    }
    match args[0] {
        "on" | "1" => data.set_smooth_shading(true),
        "off" | "0" => data.set_smooth_shading(false),
        other => {
            return Err(Error::argument_value(
                "s",
                format!("expected on/off/1/0, got `{other}`"),
                line,
                line_index,
            ))
        }
    }
    Ok(())
}
