/// A material parsed from a `.mtl` file.
///
/// Color components live in [0, 1], the specular exponent in [0, 1000], the
/// refraction index in [0, 10] and opacity in [0, 1]; the parser enforces
/// the ranges. `illum` is carried along but not interpreted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub diffuse_color: [f32; 3],
    pub specular_exponent: f32,
    pub refraction_index: f32,
    pub opacity: f32,
    pub illum: f32,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient_color: [0.0; 3],
            specular_color: [0.0; 3],
            diffuse_color: [0.0; 3],
            specular_exponent: 0.0,
            refraction_index: 0.0,
            opacity: 1.0,
            illum: 1.0,
        }
    }
}

/// Session-scoped material registry, populated by `mtllib` directives and
/// consulted by `usemtl`.
///
/// Registration is additive across files and keeps file order; lookup is by
/// exact, case-sensitive name and the first registration of a name wins.
/// Each parse session owns its registry, so independent parses cannot
/// interfere.
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends newly parsed materials, keeping earlier registrations ahead
    /// of later ones with the same name.
    pub fn register(&mut self, materials: Vec<Material>) {
        self.materials.extend(materials);
    }

    /// Finds the first material registered under `name`.
    pub fn find(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_opaque_and_black() {
        let material = Material::new("default");
        assert_eq!(material.ambient_color, [0.0; 3]);
        assert_eq!(material.opacity, 1.0);
        assert_eq!(material.illum, 1.0);
        assert_eq!(material.specular_exponent, 0.0);
    }

    #[test]
    fn first_registration_wins_for_lookup() {
        let mut registry = MaterialRegistry::new();
        let mut first = Material::new("Foo");
        first.opacity = 0.25;
        let mut second = Material::new("Foo");
        second.opacity = 0.75;

        registry.register(vec![first]);
        registry.register(vec![second]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("Foo").unwrap().opacity, 0.25);
        assert!(!registry.contains("Bar"));
    }
}
