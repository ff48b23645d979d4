#[cfg(test)]
mod _tests_deformation {
    use super::super::crystal_structure::CrystalStructure;
    use super::super::deformation::*;
    use crate::errors::OrientationError;
    use crate::orientations::conversions::axis_angle_to_quat;
    use crate::orientations::quaternion_math::{random_quaternion, Quat};
    use crate::orientations::representations::AxisAngle;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_PI_2;

    const TOL: f32 = 1e-5;

    #[test]
    fn test_cubic_load_along_001() {
        let sf = schmid_factor(CrystalStructure::Cubic, &Vector3::z()).unwrap();
        assert!((sf.factor - 1.0 / 6.0f32.sqrt()).abs() < TOL);
        assert_eq!(sf.slip_system, 0);
    }

    #[test]
    fn test_cubic_load_along_111() {
        let sf = schmid_factor(CrystalStructure::Cubic, &Vector3::new(1.0, 1.0, 1.0)).unwrap();
        let expected = 2.0 / (3.0 * 6.0f32.sqrt());
        assert!((sf.factor - expected).abs() < TOL);
    }

    #[test]
    fn test_load_magnitude_is_irrelevant() {
        let a = schmid_factor(CrystalStructure::Cubic, &Vector3::new(0.2, 0.5, 0.9)).unwrap();
        let b = schmid_factor(CrystalStructure::Cubic, &Vector3::new(2.0, 5.0, 9.0)).unwrap();
        assert!((a.factor - b.factor).abs() < TOL);
        assert_eq!(a.slip_system, b.slip_system);
    }

    #[test]
    fn test_factor_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let load = crate::orientations::quaternion_math::rotate_vector(
                &random_quaternion(&mut rng),
                &Vector3::z(),
            );
            let sf = schmid_factor(CrystalStructure::Cubic, &load).unwrap();
            assert!(sf.factor >= 0.0 && sf.factor <= 0.5 + TOL);
            assert!(sf.slip_system < FCC_SLIP_SYSTEMS.len());
        }
    }

    #[test]
    fn test_other_classes_are_unsupported() {
        for structure in CrystalStructure::ALL {
            let result = schmid_factor(structure, &Vector3::z());
            if structure == CrystalStructure::Cubic {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(OrientationError::Unsupported { .. })), "{}", structure);
            }
        }
    }

    #[test]
    fn test_cubic_low_has_no_slip_systems() {
        let result = schmid_factor(CrystalStructure::CubicLow, &Vector3::new(1.0, 1.0, 1.0));
        assert!(matches!(
            result,
            Err(OrientationError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_degenerate_load() {
        assert!(matches!(
            schmid_factor(CrystalStructure::Cubic, &Vector3::zeros()),
            Err(OrientationError::InvalidParameter { .. })
        ));
        assert!(matches!(
            schmid_factor(CrystalStructure::Cubic, &Vector3::new(f32::NAN, 0.0, 1.0)),
            Err(OrientationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_orientation_transforms_load() {
        let identity = schmid_factor_for_orientation(CrystalStructure::Cubic, &Quat::identity(), &Vector3::z())
            .unwrap();
        assert!((identity.factor - 1.0 / 6.0f32.sqrt()).abs() < TOL);

        // A quarter turn about x takes the sample z load onto the crystal y axis
        let q = axis_angle_to_quat(&AxisAngle::new(FRAC_PI_2, Vector3::x()));
        let rotated = schmid_factor_for_orientation(CrystalStructure::Cubic, &q, &Vector3::z()).unwrap();
        let direct = schmid_factor(CrystalStructure::Cubic, &Vector3::y()).unwrap();
        assert!((rotated.factor - direct.factor).abs() < TOL);
    }

    #[test]
    fn test_orientation_on_unsupported_class() {
        let result = schmid_factor_for_orientation(CrystalStructure::Hexagonal, &Quat::identity(), &Vector3::z());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Schmid factor is not supported for Hexagonal (6/mmm)"
        );
    }
}
