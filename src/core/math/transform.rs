//! Geometry constructors for [`Matrix`]: normalization, dot/cross products,
//! Rodrigues rotation, right-handed perspective projection and look-at.
//!
//! Conventions match the rest of the crate: column vectors, right-handed
//! coordinates with the camera looking down -Z, and a projection that maps
//! the near plane to -1 and the far plane to +1 after the w-divide.

use crate::core::math::matrix::Matrix;
use crate::error::{Error, Result};

impl Matrix {
    /// Divides a 3x1 vector by its Euclidean length. A zero-length input is
    /// an explicit error, not undefined behavior.
    pub fn normalize(vector: &Matrix) -> Result<Matrix> {
        check_vector3("normalize", vector)?;
        let (x, y, z) = (vector.x()?, vector.y()?, vector.z()?);
        let length = (x * x + y * y + z * z).sqrt();
        if length == 0.0 {
            return Err(Error::ZeroLength {
                operation: "normalize",
            });
        }
        Matrix::from_values(3, 1, &[x / length, y / length, z / length])
    }

    /// Dot product of two 3x1 vectors.
    pub fn dot(a: &Matrix, b: &Matrix) -> Result<f32> {
        check_vector3("dot", a)?;
        check_vector3("dot", b)?;
        Ok(a.x()? * b.x()? + a.y()? * b.y()? + a.z()? * b.z()?)
    }

    /// Cross product of two 3x1 vectors.
    pub fn cross(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_vector3("cross", a)?;
        check_vector3("cross", b)?;
        let (ax, ay, az) = (a.x()?, a.y()?, a.z()?);
        let (bx, by, bz) = (b.x()?, b.y()?, b.z()?);
        Matrix::from_values(
            3,
            1,
            &[ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx],
        )
    }

    /// Builds the Rodrigues rotation matrix for `axis`/`angle_rad` and
    /// returns its product with `base` (rotation applied on the left).
    ///
    /// `base` must be 4x4 and `axis` a 3x1 vector; the caller is responsible
    /// for normalizing the axis beforehand.
    pub fn rotate(base: &Matrix, angle_rad: f32, axis: &Matrix) -> Result<Matrix> {
        if base.rows() != 4 || base.cols() != 4 {
            return Err(Error::InvalidSize {
                operation: "rotate",
                rows: base.rows(),
                cols: base.cols(),
            });
        }
        check_vector3("rotate", axis)?;

        let (x, y, z) = (axis.x()?, axis.y()?, axis.z()?);
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        let t = 1.0 - c;

        #[rustfmt::skip]
        let rotation = Matrix::from_values_unchecked(4, 4, &[
            t * x * x + c,     t * x * y - z * s, t * x * z + y * s, 0.0,
            t * x * y + z * s, t * y * y + c,     t * y * z - x * s, 0.0,
            t * x * z - y * s, t * y * z + x * s, t * z * z + c,     0.0,
            0.0,               0.0,               0.0,               1.0,
        ]);
        rotation.mul(base)
    }

    /// Right-handed perspective projection from a vertical field of view in
    /// degrees, via the half-angle tangent construction.
    ///
    /// With `f = 1 / tan(fov / 2)` the matrix is
    /// `diag(f / aspect, f, -(far + near) / (far - near), 0)` with
    /// `(2, 3) = -2 * far * near / (far - near)` and `(3, 2) = -1`, so a
    /// point on the near plane projects to z = -1 and one on the far plane
    /// to z = +1 after the w-divide.
    pub fn perspective(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Matrix {
        let f = 1.0 / (fov_y_deg.to_radians() / 2.0).tan();
        let depth = far - near;

        #[rustfmt::skip]
        let projection = Matrix::from_values_unchecked(4, 4, &[
            f / aspect, 0.0, 0.0,                     0.0,
            0.0,        f,   0.0,                     0.0,
            0.0,        0.0, -(far + near) / depth,   -2.0 * far * near / depth,
            0.0,        0.0, -1.0,                    0.0,
        ]);
        projection
    }

    /// Builds a right-handed view matrix from an eye position, a target
    /// point and an initial up vector (all 3x1).
    ///
    /// Fails with a zero-length error when `eye` equals `target` or when the
    /// up vector is parallel to the viewing direction.
    pub fn look_at(eye: &Matrix, target: &Matrix, up: &Matrix) -> Result<Matrix> {
        check_vector3("look_at", eye)?;
        check_vector3("look_at", target)?;
        check_vector3("look_at", up)?;

        let forward = Matrix::normalize(&target.sub(eye)?)?;
        let side = Matrix::normalize(&Matrix::cross(&forward, up)?)?;
        let true_up = Matrix::cross(&side, &forward)?;

        let (sx, sy, sz) = (side.x()?, side.y()?, side.z()?);
        let (ux, uy, uz) = (true_up.x()?, true_up.y()?, true_up.z()?);
        let (fx, fy, fz) = (forward.x()?, forward.y()?, forward.z()?);

        #[rustfmt::skip]
        let view = Matrix::from_values_unchecked(4, 4, &[
            sx,  sy,  sz,  -Matrix::dot(&side, eye)?,
            ux,  uy,  uz,  -Matrix::dot(&true_up, eye)?,
            -fx, -fy, -fz, Matrix::dot(&forward, eye)?,
            0.0, 0.0, 0.0, 1.0,
        ]);
        Ok(view)
    }
}

fn check_vector3(operation: &'static str, vector: &Matrix) -> Result<()> {
    if vector.rows() != 3 || vector.cols() != 1 {
        return Err(Error::InvalidSize {
            operation,
            rows: vector.rows(),
            cols: vector.cols(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Isometry3, Perspective3, Point3, Rotation3, Unit, Vector3};

    fn vec3(x: f32, y: f32, z: f32) -> Matrix {
        Matrix::from_values(3, 1, &[x, y, z]).unwrap()
    }

    fn assert_matches_nalgebra(ours: &Matrix, theirs: &nalgebra::Matrix4<f32>) {
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(
                    ours.get(row, col).unwrap(),
                    theirs[(row, col)],
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn normalize_scales_to_unit_length() {
        let v = Matrix::normalize(&vec3(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(v, vec3(1.0, 0.0, 0.0));

        let v = Matrix::normalize(&vec3(1.0, 2.0, 2.0)).unwrap();
        assert_relative_eq!(v.x().unwrap(), 1.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(v.y().unwrap(), 2.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(v.z().unwrap(), 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn normalize_rejects_zero_length_and_bad_shapes() {
        assert!(matches!(
            Matrix::normalize(&vec3(0.0, 0.0, 0.0)),
            Err(Error::ZeroLength {
                operation: "normalize"
            })
        ));
        let not_a_vector = Matrix::new(4, 4).unwrap();
        assert!(matches!(
            Matrix::normalize(&not_a_vector),
            Err(Error::InvalidSize {
                operation: "normalize",
                rows: 4,
                cols: 4
            })
        ));
    }

    #[test]
    fn dot_and_cross_products() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, -5.0, 6.0);
        assert_relative_eq!(Matrix::dot(&a, &b).unwrap(), 12.0, epsilon = 1e-6);

        let c = Matrix::cross(&a, &b).unwrap();
        assert_eq!(c, vec3(27.0, 6.0, -13.0));

        // Cross of parallel vectors vanishes.
        let z = Matrix::cross(&a, &(&a * 2.0)).unwrap();
        assert_eq!(z, vec3(0.0, 0.0, 0.0));

        let wrong = Matrix::new(2, 1).unwrap();
        assert!(matches!(
            Matrix::dot(&a, &wrong),
            Err(Error::InvalidSize { operation: "dot", .. })
        ));
    }

    #[test]
    fn rotate_with_zero_angle_returns_the_base() {
        #[rustfmt::skip]
        let base = Matrix::from_values(4, 4, &[
            1.0, 2.0,  3.0,  4.0,
            5.0, 6.0,  7.0,  8.0,
            9.0, 10.0, 11.0, 12.0,
            0.0, 0.0,  0.0,  1.0,
        ])
        .unwrap();
        let axis = vec3(0.0, 1.0, 0.0);
        let rotated = Matrix::rotate(&base, 0.0, &axis).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(
                    rotated.get(row, col).unwrap(),
                    base.get(row, col).unwrap(),
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn rotate_matches_nalgebra() {
        let mut identity = Matrix::new(4, 4).unwrap();
        identity.set_identity().unwrap();

        for (axis, angle) in [
            ((0.0, 1.0, 0.0), 1.0_f32),
            ((1.0, 0.0, 0.0), -0.5),
            ((1.0, 2.0, 3.0), 2.3),
        ] {
            let unit = Matrix::normalize(&vec3(axis.0, axis.1, axis.2)).unwrap();
            let ours = Matrix::rotate(&identity, angle, &unit).unwrap();
            let theirs = Rotation3::from_axis_angle(
                &Unit::new_normalize(Vector3::new(axis.0, axis.1, axis.2)),
                angle,
            )
            .to_homogeneous();
            assert_matches_nalgebra(&ours, &theirs);
        }
    }

    #[test]
    fn rotate_checks_operand_shapes() {
        let base = Matrix::new(3, 3).unwrap();
        let axis = vec3(0.0, 1.0, 0.0);
        assert!(matches!(
            Matrix::rotate(&base, 1.0, &axis),
            Err(Error::InvalidSize {
                operation: "rotate",
                rows: 3,
                cols: 3
            })
        ));

        let base = Matrix::new(4, 4).unwrap();
        let bad_axis = Matrix::new(4, 1).unwrap();
        assert!(matches!(
            Matrix::rotate(&base, 1.0, &bad_axis),
            Err(Error::InvalidSize {
                operation: "rotate",
                rows: 4,
                cols: 1
            })
        ));
    }

    #[test]
    fn perspective_has_the_documented_entries() {
        // fov 90 degrees, square aspect: f = 1.
        let m = Matrix::perspective(90.0, 1.0, 1.0, 3.0);
        assert_relative_eq!(m.get(0, 0).unwrap(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(m.get(1, 1).unwrap(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(m.get(2, 2).unwrap(), -2.0, epsilon = 1e-6);
        assert_relative_eq!(m.get(2, 3).unwrap(), -3.0, epsilon = 1e-6);
        assert_relative_eq!(m.get(3, 2).unwrap(), -1.0, epsilon = 1e-6);
        assert_relative_eq!(m.get(3, 3).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn perspective_maps_near_to_minus_one_and_far_to_plus_one() {
        let m = Matrix::perspective(90.0, 1.0, 1.0, 3.0);

        let project = |z: f32| {
            let point = Matrix::from_values(4, 1, &[0.0, 0.0, z, 1.0]).unwrap();
            let clip = m.mul(&point).unwrap();
            clip.z().unwrap() / clip.w().unwrap()
        };

        // The camera looks down -Z: the near plane sits at z = -near.
        assert_relative_eq!(project(-1.0), -1.0, epsilon = 1e-5);
        assert_relative_eq!(project(-3.0), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn perspective_matches_nalgebra() {
        let ours = Matrix::perspective(45.0, 16.0 / 9.0, 0.1, 100.0);
        let theirs = Perspective3::new(16.0 / 9.0, 45.0_f32.to_radians(), 0.1, 100.0)
            .to_homogeneous();
        assert_matches_nalgebra(&ours, &theirs);
    }

    #[test]
    fn look_at_matches_nalgebra() {
        let eye = vec3(1.0, 2.0, 3.0);
        let target = vec3(0.0, 0.0, 0.0);
        let up = vec3(0.0, 1.0, 0.0);
        let ours = Matrix::look_at(&eye, &target, &up).unwrap();
        let theirs = Isometry3::look_at_rh(
            &Point3::new(1.0, 2.0, 3.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
        )
        .to_homogeneous();
        assert_matches_nalgebra(&ours, &theirs);
    }

    #[test]
    fn look_at_rejects_coincident_eye_and_target() {
        let eye = vec3(1.0, 1.0, 1.0);
        let up = vec3(0.0, 1.0, 0.0);
        assert!(matches!(
            Matrix::look_at(&eye, &eye, &up),
            Err(Error::ZeroLength { .. })
        ));
    }
}
