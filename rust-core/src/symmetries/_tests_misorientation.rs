#[cfg(test)]
mod _tests_misorientation {
    use super::super::crystal_structure::CrystalStructure;
    use super::super::laue_ops::{CUBIC, HEXAGONAL, TRICLINIC};
    use super::super::misorientation::*;
    use crate::orientations::conversions::axis_angle_to_quat;
    use crate::orientations::quaternion_math::{quat, random_quaternion, Quat};
    use crate::orientations::representations::AxisAngle;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::{FRAC_1_SQRT_2, PI};

    const TOL: f32 = 1e-4;

    fn rot(angle_deg: f32, axis: Vector3<f32>) -> Quat {
        axis_angle_to_quat(&AxisAngle::new(angle_deg.to_radians(), axis))
    }

    #[test]
    fn test_identical_orientations() {
        let q = rot(33.0, Vector3::new(1.0, 2.0, 3.0));
        let d = CUBIC.misorientation(&q, &q);
        assert!(d.angle.abs() < TOL);
        assert!((d.axis.norm() - 1.0).abs() < TOL);

        let d = CUBIC.misorientation(&Quat::identity(), &Quat::identity());
        assert_eq!(d, Disorientation::identity());
    }

    #[test]
    fn test_cubic_small_rotation_is_unchanged() {
        let q1 = rot(44.0, Vector3::z());
        let d = CUBIC.misorientation(&q1, &Quat::identity());
        assert!((d.angle_degrees() - 44.0).abs() < 1e-2);
        assert!((d.axis - Vector3::z()).norm() < TOL);
    }

    #[test]
    fn test_cubic_reduces_by_quarter_turn() {
        // 80° about z is 10° about -z after the -90° operator
        let q1 = rot(80.0, Vector3::z());
        let d = CUBIC.misorientation(&q1, &Quat::identity());
        assert!((d.angle_degrees() - 10.0).abs() < 1e-2);
        assert!((d.axis - Vector3::new(0.0, 0.0, -1.0)).norm() < TOL);
    }

    #[test]
    fn test_hexagonal_reduces_by_sixth_turn() {
        let q1 = rot(70.0, Vector3::z());
        let d = HEXAGONAL.misorientation(&q1, &Quat::identity());
        assert!((d.angle_degrees() - 10.0).abs() < 1e-2);
    }

    #[test]
    fn test_triclinic_is_plain_rotation_angle() {
        let q1 = rot(30.0, Vector3::x());
        let q2 = rot(-20.0, Vector3::x());
        let d = TRICLINIC.misorientation(&q1, &q2);
        assert!((d.angle_degrees() - 50.0).abs() < 1e-2);
        assert!((d.axis - Vector3::x()).norm() < TOL);
    }

    #[test]
    fn test_wrapped_angle_keeps_axis() {
        // 200° about +z wraps to 160° without turning the axis around
        let q1 = quat(100.0f32.to_radians().cos(), 0.0, 0.0, 100.0f32.to_radians().sin());
        let d = TRICLINIC.misorientation(&q1, &Quat::identity());
        assert!((d.angle_degrees() - 160.0).abs() < 1e-2);
        assert!((d.axis - Vector3::z()).norm() < TOL);
        assert!(d.axis.z > 0.0);
    }

    #[test]
    fn test_swap_symmetry_all_classes() {
        let mut rng = StdRng::seed_from_u64(11);
        for structure in CrystalStructure::ALL {
            let ops = structure.ops();
            for _ in 0..200 {
                let q1 = random_quaternion(&mut rng);
                let q2 = random_quaternion(&mut rng);
                let a = ops.misorientation(&q1, &q2).angle;
                let b = ops.misorientation(&q2, &q1).angle;
                assert!(
                    (a - b).abs() < TOL,
                    "{}: {} vs {}",
                    structure,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_range_and_unit_axis_all_classes() {
        let mut rng = StdRng::seed_from_u64(12);
        for structure in CrystalStructure::ALL {
            let ops = structure.ops();
            for _ in 0..200 {
                let d = ops.misorientation(&random_quaternion(&mut rng), &random_quaternion(&mut rng));
                assert!(d.angle >= 0.0 && d.angle <= PI + TOL);
                assert!((d.axis.norm() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_cubic_maximum_disorientation() {
        // No cubic disorientation exceeds 62.8°
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..2000 {
            let d = CUBIC.misorientation(&random_quaternion(&mut rng), &random_quaternion(&mut rng));
            assert!(d.angle_degrees() <= 62.81, "angle {}", d.angle_degrees());
        }
    }

    #[test]
    fn test_more_symmetry_never_increases_angle() {
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..200 {
            let q1 = random_quaternion(&mut rng);
            let q2 = random_quaternion(&mut rng);
            let low = CrystalStructure::CubicLow.ops().misorientation(&q1, &q2).angle;
            let high = CUBIC.misorientation(&q1, &q2).angle;
            assert!(high <= low + TOL);
        }
    }

    #[test]
    fn test_nan_input_never_produces_nan() {
        let bad = quat(f32::NAN, 0.0, 0.0, 0.0);
        let d = CUBIC.misorientation(&bad, &Quat::identity());
        assert_eq!(d, Disorientation::identity());
    }

    #[test]
    fn test_non_normalized_input_terminates() {
        let d = CUBIC.misorientation(&quat(3.0, 1.0, 0.0, 0.0), &quat(0.0, 0.0, 0.0, 0.0));
        assert!(d.angle.is_finite());
    }

    #[test]
    fn test_first_operator_wins_ties() {
        // Both operators give 90°; the first one's axis is kept
        let ops = [
            [FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2],
            [FRAC_1_SQRT_2, 0.0, 0.0, -FRAC_1_SQRT_2],
        ];
        let d = min_disorientation(&ops, &Quat::identity(), &Quat::identity());
        assert!((d.angle_degrees() - 90.0).abs() < 1e-3);
        assert!((d.axis - Vector3::z()).norm() < 1e-6);
    }

    #[test]
    fn test_disorientation_to_axis_angle() {
        let d = Disorientation {
            angle: 0.5,
            axis: Vector3::x(),
        };
        let aa = d.to_axis_angle();
        assert_eq!(aa.angle, 0.5);
        assert_eq!(aa.axis, Vector3::x());
    }
}
