//! Wavefront MTL parsing.
//!
//! Same comment-stripping, symbol-dispatch structure as the OBJ parser:
//! `newmtl` opens a record, subsequent directives mutate it until the next
//! `newmtl` or end of file.

use crate::error::{DirectiveError, Error, Result};
use crate::io::{check_extension, tokenizer};
use crate::scene::material::Material;
use log::info;
use std::fs;
use std::path::Path;

/// The closed set of directives the material parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    NewMaterial,
    AmbientColor,
    SpecularColor,
    DiffuseColor,
    SpecularExponent,
    RefractionIndex,
    Opacity,
    Illumination,
}

impl Directive {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "newmtl" => Some(Self::NewMaterial),
            "Ka" => Some(Self::AmbientColor),
            "Ks" => Some(Self::SpecularColor),
            "Kd" => Some(Self::DiffuseColor),
            "Ns" => Some(Self::SpecularExponent),
            "Ni" => Some(Self::RefractionIndex),
            "d" => Some(Self::Opacity),
            "illum" => Some(Self::Illumination),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::NewMaterial => "newmtl",
            Self::AmbientColor => "Ka",
            Self::SpecularColor => "Ks",
            Self::DiffuseColor => "Kd",
            Self::SpecularExponent => "Ns",
            Self::RefractionIndex => "Ni",
            Self::Opacity => "d",
            Self::Illumination => "illum",
        }
    }
}

/// Parses a `.mtl` file and returns its materials in file order.
pub fn load_mtl<P: AsRef<Path>>(path: P) -> Result<Vec<Material>> {
    let path = path.as_ref();
    check_extension(path, "mtl")?;

    let contents = fs::read_to_string(path)?;
    let mut materials: Vec<Material> = Vec::new();

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
            Directive::NewMaterial => {
                if args.len() != 1 {
                    return Err(Error::argument_count("newmtl", raw_line, line_index));
                }
                materials.push(Material::new(args[0]));
            }
            // Reserved: accepted with any arguments, never validated.
            Directive::Illumination => {}
            Directive::AmbientColor => {
                current(&mut materials, directive, raw_line, line_index)?.ambient_color =
                    parse_color(directive, args, raw_line, line_index)?;
            }
            Directive::SpecularColor => {
                current(&mut materials, directive, raw_line, line_index)?.specular_color =
                    parse_color(directive, args, raw_line, line_index)?;
            }
            Directive::DiffuseColor => {
                current(&mut materials, directive, raw_line, line_index)?.diffuse_color =
                    parse_color(directive, args, raw_line, line_index)?;
            }
            Directive::SpecularExponent => {
                current(&mut materials, directive, raw_line, line_index)?.specular_exponent =
                    parse_scalar(directive, args, 1000.0, raw_line, line_index)?;
            }
            Directive::RefractionIndex => {
                current(&mut materials, directive, raw_line, line_index)?.refraction_index =
                    parse_scalar(directive, args, 10.0, raw_line, line_index)?;
            }
            Directive::Opacity => {
                current(&mut materials, directive, raw_line, line_index)?.opacity =
                    parse_scalar(directive, args, 1.0, raw_line, line_index)?;
            }
        }
    }

    info!(
        "Loaded {} material(s) from {}",
        materials.len(),
        path.display()
    );
    Ok(materials)
}

fn current<'a>(
    materials: &'a mut [Material],
    directive: Directive,
    line: &str,
    line_index: usize,
) -> Result<&'a mut Material> {
    materials.last_mut().ok_or_else(|| Error::Directive {
        directive: directive.name(),
        reason: DirectiveError::NoActiveMaterial,
        line: line.to_string(),
        line_index,
    })
}

fn parse_color(
    directive: Directive,
    args: &[&str],
    line: &str,
    line_index: usize,
) -> Result<[f32; 3]> {
    if args.len() != 3 {
        return Err(Error::argument_count(directive.name(), line, line_index));
    }
    let mut color = [0.0; 3];
    for (slot, token) in color.iter_mut().zip(args) {
        *slot = parse_component(directive, token, 1.0, line, line_index)?;
    }
    Ok(color)
}

fn parse_scalar(
    directive: Directive,
    args: &[&str],
    max: f32,
    line: &str,
    line_index: usize,
) -> Result<f32> {
    if args.len() != 1 {
        return Err(Error::argument_count(directive.name(), line, line_index));
    }
    parse_component(directive, args[0], max, line, line_index)
}

/// Parses one numeric token and enforces the [0, max] range, naming the
/// violated bound in the error.
fn parse_component(
    directive: Directive,
    token: &str,
    max: f32,
    line: &str,
    line_index: usize,
) -> Result<f32> {
    let value = tokenizer::parse_float(token).ok_or_else(|| {
        Error::argument_value(
            directive.name(),
            format!("`{token}` is not a number"),
            line,
            line_index,
        )
    })?;
    if value < 0.0 {
        return Err(Error::argument_value(
            directive.name(),
            format!("{value} is below the 0 floor"),
            line,
            line_index,
        ));
    }
    if value > max {
        return Err(Error::argument_value(
            directive.name(),
            format!("{value} exceeds the {max} ceiling"),
            line,
            line_index,
        ));
    }
    Ok(value)
}
