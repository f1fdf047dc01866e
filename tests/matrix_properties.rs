mod common;

use common::{
    assert_close, assert_matrix_2d_eq, assert_matrix_3d_eq, random_axis, random_matrix_2d,
    random_matrix_3d,
};
use glmat::math::{Axis, DEFAULT_EPSILON, Matrix2D, Matrix3D, MatrixError, Vec2, Vec3};
use glmat::math::{matrix2d, matrix3d};
use pretty_assertions::assert_eq;
use rand::Rng;
use testresult::TestResult;

const ROUNDS: usize = 100;

#[test]
fn identity_law_3d() {
    let mut rng = rand::rng();
    let identity = Matrix3D::identity();
    for _ in 0..ROUNDS {
        let m = random_matrix_3d(&mut rng);
        assert_eq!(Matrix3D::multiply(&m, &identity), m);
        assert_eq!(Matrix3D::multiply(&identity, &m), m);
    }
}

#[test]
fn identity_law_2d() {
    let mut rng = rand::rng();
    let identity = Matrix2D::identity();
    for _ in 0..ROUNDS {
        let m = random_matrix_2d(&mut rng);
        assert_eq!(Matrix2D::multiply(&m, &identity), m);
        assert_eq!(Matrix2D::multiply(&identity, &m), m);
    }
}

#[test]
fn associativity_3d() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_matrix_3d(&mut rng);
        let b = random_matrix_3d(&mut rng);
        let c = random_matrix_3d(&mut rng);
        let left = Matrix3D::multiply(&a, &Matrix3D::multiply(&b, &c));
        let right = Matrix3D::multiply(&Matrix3D::multiply(&a, &b), &c);
        assert_matrix_3d_eq(&left, &right, DEFAULT_EPSILON);
    }
}

#[test]
fn associativity_2d() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_matrix_2d(&mut rng);
        let b = random_matrix_2d(&mut rng);
        let c = random_matrix_2d(&mut rng);
        let left = Matrix2D::multiply(&a, &Matrix2D::multiply(&b, &c));
        let right = Matrix2D::multiply(&Matrix2D::multiply(&a, &b), &c);
        assert_matrix_2d_eq(&left, &right, DEFAULT_EPSILON);
    }
}

#[test]
fn translations_compose_additively() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let (a, b, c) = (rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
        let (d, e, f) = (rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));

        let m = Matrix3D::multiply(&Matrix3D::translation(a, b, c), &Matrix3D::translation(d, e, f));
        let origin = m.transform_point(Vec3::default());
        assert_close(origin.x, a + d);
        assert_close(origin.y, b + e);
        assert_close(origin.z, c + f);

        let m = Matrix2D::multiply(&Matrix2D::translation(a, b), &Matrix2D::translation(d, e));
        let origin = m.transform_point(Vec2::default());
        assert_close(origin.x, a + d);
        assert_close(origin.y, b + e);
    }
}

#[test]
fn rotation_has_a_period_of_360_degrees() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let angle = rng.random_range(-720.0..720.0);
        assert_matrix_2d_eq(
            &Matrix2D::rotation(angle),
            &Matrix2D::rotation(angle + 360.0),
            DEFAULT_EPSILON,
        );
        let axis = random_axis(&mut rng);
        assert_matrix_3d_eq(
            &Matrix3D::rotation(angle, axis),
            &Matrix3D::rotation(angle + 360.0, axis),
            DEFAULT_EPSILON,
        );
    }
}

#[test]
fn rotate_then_unrotate_round_trip() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let m = random_matrix_3d(&mut rng);
        let angle = rng.random_range(-360.0..360.0);
        for axis in Axis::ALL {
            let back = m.rotate(angle, axis).rotate(-angle, axis);
            assert_matrix_3d_eq(&back, &m, DEFAULT_EPSILON);
        }

        let m = random_matrix_2d(&mut rng);
        let back = m.rotate(angle).rotate(-angle);
        assert_matrix_2d_eq(&back, &m, DEFAULT_EPSILON);
    }
}

#[test]
fn multiply_rejects_wrong_lengths() {
    let identity = Matrix2D::identity();
    let eight = [0.0; 8];
    let ten = [0.0; 10];
    assert_eq!(
        matrix2d::multiply(&eight, &identity.m),
        Err(MatrixError::ShapeMismatch {
            expected: 9,
            actual: 8
        })
    );
    assert_eq!(
        matrix2d::multiply(&identity.m, &ten),
        Err(MatrixError::ShapeMismatch {
            expected: 9,
            actual: 10
        })
    );
    // a 2D matrix is not a 3D matrix
    assert_eq!(
        matrix3d::multiply(&identity.m, &Matrix3D::identity().m),
        Err(MatrixError::ShapeMismatch {
            expected: 16,
            actual: 9
        })
    );
}

#[test]
fn concrete_layouts() -> TestResult {
    assert_eq!(
        Matrix2D::translation(5.0, 10.0).m,
        [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 10.0, 1.0]
    );

    assert_matrix_3d_eq(
        &Matrix3D::rotation(90.0, Axis::Z),
        &Matrix3D::from_array([
            0.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ]),
        DEFAULT_EPSILON,
    );

    let projection = Matrix3D::orthographic_projection(800.0, 600.0, 400.0)?;
    assert_eq!(
        projection.m,
        [
            2.0 / 800.0,
            0.0,
            0.0,
            0.0,
            0.0,
            -2.0 / 600.0,
            0.0,
            0.0,
            0.0,
            0.0,
            2.0 / 400.0,
            0.0,
            -1.0,
            1.0,
            0.0,
            1.0,
        ]
    );
    Ok(())
}

#[test]
fn multiply_from_untyped_slices() -> TestResult {
    let a: Vec<f64> = Matrix3D::rotation(30.0, Axis::X).m.to_vec();
    let b: Vec<f64> = Matrix3D::translation(1.0, 2.0, 3.0).m.to_vec();
    let typed = Matrix3D::multiply(&Matrix3D::try_from(a.as_slice())?, &Matrix3D::try_from(b.as_slice())?);
    assert_eq!(matrix3d::multiply(&a, &b)?, typed);

    let mut out = vec![0.0; 16];
    matrix3d::multiply_into(&a, &b, &mut out)?;
    assert_eq!(out.as_slice(), typed.as_slice());
    Ok(())
}
