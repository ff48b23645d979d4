#[cfg(test)]
mod _tests_conversions {
    use super::super::conversions::*;
    use super::super::quaternion_math::{dot, normalize, quat, Quat};
    use super::super::representations::*;
    use crate::config::{HOMOCHORIC_MAX_NORM, ROD_SENTINEL};
    use nalgebra::Vector3;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

    const TOL: f32 = 1e-4;

    fn same_rotation(a: &Quat, b: &Quat) -> bool {
        dot(&normalize(a), &normalize(b)).abs() > 1.0 - 1e-5
    }

    // ==================== Quaternion <-> axis-angle ====================

    #[test]
    fn test_identity_axis_angle() {
        let aa = quat_to_axis_angle(&quat(1.0, 0.0, 0.0, 0.0));
        assert_eq!(aa.angle, 0.0);
        assert_eq!(aa.axis, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_scalar_overshoot_is_clamped() {
        // Floating point drift pushes w slightly above one
        let aa = quat_to_axis_angle(&quat(1.000_000_1, 0.0, 0.0, 0.0));
        assert!(aa.angle.is_finite());
        assert_eq!(aa.angle, 0.0);

        let aa = quat_to_axis_angle(&quat(-1.000_001, 0.0, 0.0, 0.0));
        assert!(aa.angle.is_finite());
    }

    #[test]
    fn test_nan_quaternion_gives_identity() {
        let aa = quat_to_axis_angle(&quat(f32::NAN, 0.1, f32::NAN, 0.0));
        assert_eq!(aa, AxisAngle::identity());
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let axis = Vector3::new(1.0, 2.0, -2.0) / 3.0;
        let aa = AxisAngle::new(1.2, axis);
        let back = quat_to_axis_angle(&axis_angle_to_quat(&aa));
        assert!((back.angle - 1.2).abs() < TOL);
        assert!((back.axis - axis).norm() < TOL);
    }

    #[test]
    fn test_axis_angle_zero_axis_gives_identity_quat() {
        let q = axis_angle_to_quat(&AxisAngle::new(1.0, Vector3::zeros()));
        assert_eq!(q, Quat::identity());
    }

    // ==================== Rodrigues ====================

    #[test]
    fn test_rodrigues_of_quarter_turn() {
        let q = axis_angle_to_quat(&AxisAngle::new(FRAC_PI_2, Vector3::x()));
        let r = quat_to_rodrigues(&q);
        assert!((r.0 - Vector3::new(1.0, 0.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_rodrigues_half_turn_uses_sentinel() {
        let r = quat_to_rodrigues(&quat(0.0, 0.0, 1.0, 0.0));
        assert_eq!(r.0, Vector3::new(0.0, ROD_SENTINEL, 0.0));

        let r = axis_angle_to_rodrigues(&AxisAngle::new(PI, Vector3::z()));
        assert_eq!(r.0, Vector3::new(0.0, 0.0, ROD_SENTINEL));

        let aa = rodrigues_to_axis_angle(&r);
        assert!((aa.angle - PI).abs() < TOL);
        assert!((aa.axis - Vector3::z()).norm() < TOL);
    }

    #[test]
    fn test_rodrigues_infinite_components() {
        let aa = rodrigues_to_axis_angle(&RodriguesVector::new(f32::INFINITY, 0.0, 0.0));
        assert!((aa.angle - PI).abs() < TOL);
        assert!((aa.axis - Vector3::x()).norm() < TOL);
    }

    #[test]
    fn test_rodrigues_zero_is_identity() {
        let aa = rodrigues_to_axis_angle(&RodriguesVector::zeros());
        assert_eq!(aa, AxisAngle::identity());
        assert_eq!(rodrigues_to_quat(&RodriguesVector::zeros()), Quat::identity());
    }

    #[test]
    fn test_angle_above_pi_is_mirrored() {
        let r = axis_angle_to_rodrigues(&AxisAngle::new(1.5 * PI, Vector3::z()));
        // 270° about +z equals 90° about -z
        assert!((r.0 - Vector3::new(0.0, 0.0, -1.0)).norm() < TOL);
    }

    #[test]
    fn test_quat_rodrigues_round_trip() {
        let q = normalize(&quat(0.8, 0.3, -0.4, 0.2));
        let back = rodrigues_to_quat(&quat_to_rodrigues(&q));
        assert!(same_rotation(&q, &back));
    }

    // ==================== Homochoric ====================

    #[test]
    fn test_homochoric_zero_fixed_point() {
        let h = rodrigues_to_homochoric(&RodriguesVector::zeros());
        assert_eq!(h.0, Vector3::zeros());
        let r = homochoric_to_rodrigues(&HomochoricVector::zeros());
        assert_eq!(r.0, Vector3::zeros());
    }

    #[test]
    fn test_homochoric_magnitude_known_values() {
        assert_eq!(homochoric_magnitude(0.0), 0.0);
        assert!((homochoric_magnitude(PI) - HOMOCHORIC_MAX_NORM).abs() < TOL);
        // Series branch and direct branch agree at the switch point
        let below = homochoric_magnitude(0.099_999);
        let above = homochoric_magnitude(0.100_001);
        assert!((below - above).abs() < 1e-5);
        let expected = (0.75f32 * (FRAC_PI_4 - FRAC_PI_4.sin())).cbrt();
        assert!((homochoric_magnitude(FRAC_PI_4) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_homochoric_angle_inverts_magnitude() {
        for angle in [0.01f32, 0.2, FRAC_PI_4, 1.0, FRAC_PI_2, 2.5, 3.0] {
            let back = homochoric_angle(homochoric_magnitude(angle));
            assert!(
                (back - angle).abs() < 1e-4,
                "angle {} came back as {}",
                angle,
                back
            );
        }
        assert_eq!(homochoric_angle(2.0), PI);
        assert_eq!(homochoric_angle(-1.0), 0.0);
    }

    #[test]
    fn test_rodrigues_homochoric_round_trip() {
        let r = RodriguesVector::new(0.1, -0.25, 0.3);
        let back = homochoric_to_rodrigues(&rodrigues_to_homochoric(&r));
        assert!((back.0 - r.0).norm() < TOL);
    }

    #[test]
    fn test_homochoric_preserves_axis() {
        let r = RodriguesVector::new(0.0, 0.0, FRAC_PI_3.tan());
        let h: HomochoricVector = r.into();
        assert!(h.x.abs() < 1e-7 && h.y.abs() < 1e-7);
        assert!((h.z - homochoric_magnitude(2.0 * FRAC_PI_3)).abs() < TOL);
    }

    // ==================== Euler angles ====================

    #[test]
    fn test_euler_round_trip() {
        let e = EulerAngles::new(0.7, 1.1, 2.3);
        let back = quat_to_euler(&euler_to_quat(&e));
        assert!((back.phi1 - e.phi1).abs() < TOL);
        assert!((back.phi - e.phi).abs() < TOL);
        assert!((back.phi2 - e.phi2).abs() < TOL);
    }

    #[test]
    fn test_euler_round_trip_wraps_into_range() {
        let e = EulerAngles::new(5.9, 2.8, 4.4);
        let back = quat_to_euler(&euler_to_quat(&e));
        assert!((back.phi1 - 5.9).abs() < TOL);
        assert!((back.phi - 2.8).abs() < TOL);
        assert!((back.phi2 - 4.4).abs() < TOL);
    }

    #[test]
    fn test_euler_zero_is_identity() {
        let q = euler_to_quat(&EulerAngles::new(0.0, 0.0, 0.0));
        assert!(same_rotation(&q, &Quat::identity()));
    }

    #[test]
    fn test_euler_phi1_is_passive_z_rotation() {
        // g = R(q)^T: a pure phi1 rotation maps sample x onto crystal (cos, -sin, 0)
        let phi1 = 0.4f32;
        let q = euler_to_quat(&EulerAngles::new(phi1, 0.0, 0.0));
        let g = quat_to_matrix(&q).transpose();
        let x_crystal = g * Vector3::x();
        assert!((x_crystal - Vector3::new(phi1.cos(), -phi1.sin(), 0.0)).norm() < TOL);
    }

    #[test]
    fn test_euler_rodrigues_round_trip() {
        let e = EulerAngles::from_degrees(30.0, 40.0, 50.0);
        let back = rodrigues_to_euler(&euler_to_rodrigues(&e));
        let [a, b, c] = back.to_degrees();
        assert!((a - 30.0).abs() < 1e-2);
        assert!((b - 40.0).abs() < 1e-2);
        assert!((c - 50.0).abs() < 1e-2);
    }

    // ==================== Matrices ====================

    #[test]
    fn test_matrix_round_trip_all_branches() {
        let cases = [
            quat(0.9, 0.1, 0.3, -0.2),
            quat(0.05, 0.9, 0.2, 0.1),
            quat(0.05, 0.2, 0.9, -0.1),
            quat(0.05, -0.1, 0.2, 0.9),
        ];
        for q in cases {
            let q = normalize(&q);
            let back = matrix_to_quat(&quat_to_matrix(&q));
            assert!(same_rotation(&q, &back), "{:?} -> {:?}", q, back);
            assert!(back.w >= 0.0);
        }
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        let m = quat_to_matrix(&quat(0.6, -0.2, 0.7, 0.3));
        let product = m * m.transpose();
        assert!((product - nalgebra::Matrix3::identity()).norm() < 1e-5);
        assert!((m.determinant() - 1.0).abs() < 1e-5);
    }
}
