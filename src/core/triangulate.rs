//! Ear-clipping triangulation for faces with more than three vertices.
//!
//! The polygon is assumed simple and roughly planar. Containment is decided
//! by comparing triangle areas with a relative epsilon rather than exact
//! float equality: a point strictly inside a candidate triangle disqualifies
//! the ear, a point on an edge or coincident with a corner does not.

use crate::core::geometry::{Face, Vertex};

/// Relative tolerance for the area-sum containment test.
const AREA_EPSILON: f32 = 1e-6;

/// Reduces an index list describing a polygon with more than three vertices
/// to triangles. Candidate ears are tested against every vertex of the full
/// vertex table, so stray vertices inside the polygon block ears exactly as
/// polygon vertices do.
///
/// Degenerate inputs where a full scan finds no ear (for example duplicated
/// or enclosing vertices rejecting every candidate) clip the first interior
/// vertex unconditionally so the reduction always terminates with n - 2
/// triangles.
pub fn triangulate(vertices: &[Vertex], mut polygon: Vec<usize>) -> Vec<Face> {
    debug_assert!(polygon.len() > 3);
    let mut faces = Vec::with_capacity(polygon.len() - 2);

    while polygon.len() > 3 {
        let mut clipped = false;
        for i in 1..polygon.len() - 1 {
            let a = vertices[polygon[i]];
            let b = vertices[polygon[i - 1]];
            let c = vertices[polygon[i + 1]];

            let is_ear = vertices
                .iter()
                .all(|&p| p == a || p == b || p == c || !inside_triangle(p, a, b, c));
            if is_ear {
                faces.push(Face([polygon[i - 1], polygon[i], polygon[i + 1]]));
                polygon.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            faces.push(Face([polygon[0], polygon[1], polygon[2]]));
            polygon.remove(1);
        }
    }
    faces.push(Face([polygon[0], polygon[1], polygon[2]]));
    faces
}

/// Area of the triangle `abc`, half the magnitude of the cross product of
/// two of its edges.
fn triangle_area(a: Vertex, b: Vertex, c: Vertex) -> f32 {
    let (abx, aby, abz) = (b.x - a.x, b.y - a.y, b.z - a.z);
    let (acx, acy, acz) = (c.x - a.x, c.y - a.y, c.z - a.z);
    let cx = aby * acz - abz * acy;
    let cy = abz * acx - abx * acz;
    let cz = abx * acy - aby * acx;
    0.5 * (cx * cx + cy * cy + cz * cz).sqrt()
}

/// `p` is inside `abc` when the three sub-triangle areas sum to the full
/// area and none of them vanishes; boundary points are treated as outside.
fn inside_triangle(p: Vertex, a: Vertex, b: Vertex, c: Vertex) -> bool {
    let area = triangle_area(a, b, c);
    let abp = triangle_area(a, b, p);
    let bcp = triangle_area(b, c, p);
    let acp = triangle_area(a, c, p);

    let eps = AREA_EPSILON * area.max(1.0);
    (abp + bcp + acp - area).abs() <= eps && abp > eps && bcp > eps && acp > eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat(points: &[(f32, f32)]) -> Vec<Vertex> {
        points
            .iter()
            .map(|&(x, y)| Vertex::new(x, y, 0.0, 1.0))
            .collect()
    }

    fn total_area(vertices: &[Vertex], faces: &[Face]) -> f32 {
        faces
            .iter()
            .map(|f| triangle_area(vertices[f.0[0]], vertices[f.0[1]], vertices[f.0[2]]))
            .sum()
    }

    #[test]
    fn convex_quad_partitions_into_two_triangles() {
        let vertices = flat(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let faces = triangulate(&vertices, vec![0, 1, 2, 3]);
        assert_eq!(faces.len(), 2);

        // Every vertex of the quad appears in some triangle.
        let mut used = [false; 4];
        for face in &faces {
            for &i in &face.0 {
                used[i] = true;
            }
        }
        assert!(used.iter().all(|&u| u));

        // The triangles partition the quad: areas sum to the quad's area.
        assert_relative_eq!(total_area(&vertices, &faces), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn reflex_pentagon_rejects_the_blocked_ear() {
        // Index 3 is a reflex vertex sitting inside the triangle (0, 1, 2),
        // so that first candidate must be rejected.
        let vertices = flat(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (1.0, 0.5),
            (0.0, 2.0),
        ]);
        let faces = triangulate(&vertices, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            faces,
            vec![Face([1, 2, 3]), Face([0, 1, 3]), Face([0, 3, 4])]
        );
        assert_relative_eq!(
            total_area(&vertices, &faces),
            // Shoelace area of the pentagon.
            2.5,
            epsilon = 1e-5
        );
    }

    #[test]
    fn collinear_polygon_terminates() {
        let vertices = flat(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let faces = triangulate(&vertices, vec![0, 1, 2, 3]);
        assert_eq!(faces.len(), 2);
    }

    #[test]
    fn fully_blocked_polygon_falls_back_and_terminates() {
        // Two stray table vertices sit strictly inside the two interior
        // candidate triangles of the quad, so no ear is ever accepted.
        let vertices = flat(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (3.0, 1.0),
            (3.0, 3.0),
        ]);
        let faces = triangulate(&vertices, vec![0, 1, 2, 3]);
        assert_eq!(faces, vec![Face([0, 1, 2]), Face([0, 2, 3])]);
    }

    #[test]
    fn edge_points_do_not_disqualify_an_ear() {
        let a = Vertex::new(0.0, 0.0, 0.0, 1.0);
        let b = Vertex::new(2.0, 0.0, 0.0, 1.0);
        let c = Vertex::new(0.0, 2.0, 0.0, 1.0);
        // On the hypotenuse.
        assert!(!inside_triangle(Vertex::new(1.0, 1.0, 0.0, 1.0), a, b, c));
        // Strictly inside.
        assert!(inside_triangle(Vertex::new(0.5, 0.5, 0.0, 1.0), a, b, c));
        // Outside.
        assert!(!inside_triangle(Vertex::new(3.0, 3.0, 0.0, 1.0), a, b, c));
    }
}
