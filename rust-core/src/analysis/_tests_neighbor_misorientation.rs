#[cfg(test)]
mod _tests_neighbor_misorientation {
    use super::super::neighbor_misorientation::*;
    use super::super::orientation_field::OrientationField;
    use crate::errors::OrientationError;
    use crate::orientations::conversions::axis_angle_to_quat;
    use crate::orientations::quaternion_math::Quat;
    use crate::orientations::representations::AxisAngle;
    use crate::symmetries::crystal_structure::CrystalStructure;
    use nalgebra::Vector3;

    fn rot_x(angle_deg: f32) -> Quat {
        axis_angle_to_quat(&AxisAngle::new(angle_deg.to_radians(), Vector3::x()))
    }

    const STRUCTURES: [CrystalStructure; 2] = [CrystalStructure::Cubic, CrystalStructure::Hexagonal];

    #[test]
    fn test_neighbor_lists_must_match_features() {
        let quats = [Quat::identity(); 3];
        let phases = [0, 1, 1];
        let field = OrientationField::new(&quats, &phases, &STRUCTURES).unwrap();

        let err = validate_neighbor_lists(&field, &[vec![], vec![2]]).unwrap_err();
        assert!(matches!(err, OrientationError::LengthMismatch { .. }));

        let err = validate_neighbor_lists(&field, &[vec![], vec![3], vec![1]]).unwrap_err();
        assert!(matches!(err, OrientationError::IndexOutOfRange { index: 3, .. }));

        assert!(validate_neighbor_lists(&field, &[vec![], vec![2], vec![1]]).is_ok());
    }

    #[test]
    fn test_misorientations_mirror_neighbor_shape() {
        let quats = [Quat::identity(), Quat::identity(), rot_x(15.0), rot_x(40.0), rot_x(5.0)];
        let phases = [0, 1, 1, 1, 2];
        let field = OrientationField::new(&quats, &phases, &STRUCTURES).unwrap();
        let neighbors = vec![vec![], vec![2, 3, 4], vec![1], vec![1], vec![1]];

        let result = neighbor_misorientations(&field, &neighbors).unwrap();
        assert_eq!(result.len(), 5);
        assert!(result[0].is_empty());
        assert_eq!(result[1].len(), 3);
        assert!((result[1][0].unwrap() - 15.0).abs() < 1e-2);
        assert!((result[1][1].unwrap() - 40.0).abs() < 1e-2);
        // Different phase
        assert!(result[1][2].is_none());
        assert!((result[2][0].unwrap() - 15.0).abs() < 1e-2);
        assert!(result[4][0].is_none());
    }

    #[test]
    fn test_misorientations_are_symmetry_reduced() {
        let quats = [Quat::identity(), Quat::identity(), rot_x(100.0)];
        let phases = [0, 1, 1];
        let field = OrientationField::new(&quats, &phases, &STRUCTURES).unwrap();
        let result = neighbor_misorientations(&field, &[vec![], vec![2], vec![1]]).unwrap();
        assert!((result[1][0].unwrap() - 10.0).abs() < 1e-2);
    }

    #[test]
    fn test_average_skips_missing_pairs() {
        let lists = vec![
            vec![],
            vec![Some(10.0), None, Some(20.0)],
            vec![None],
            vec![Some(4.0)],
        ];
        let averages = average_neighbor_misorientation(&lists);
        assert_eq!(averages.len(), 4);
        assert_eq!(averages[0], 0.0);
        assert!((averages[1] - 15.0).abs() < 1e-6);
        assert_eq!(averages[2], 0.0);
        assert!((averages[3] - 4.0).abs() < 1e-6);
    }
}
