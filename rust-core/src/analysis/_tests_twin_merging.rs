#[cfg(test)]
mod _tests_twin_merging {
    use super::super::orientation_field::OrientationField;
    use super::super::twin_merging::*;
    use crate::errors::OrientationError;
    use crate::orientations::conversions::axis_angle_to_quat;
    use crate::orientations::quaternion_math::Quat;
    use crate::orientations::representations::AxisAngle;
    use crate::symmetries::crystal_structure::CrystalStructure;
    use crate::symmetries::misorientation::Disorientation;
    use nalgebra::Vector3;

    fn rot(angle_deg: f32, axis: Vector3<f32>) -> Quat {
        axis_angle_to_quat(&AxisAngle::new(angle_deg.to_radians(), axis))
    }

    fn disorientation(angle_deg: f32, axis: Vector3<f32>) -> Disorientation {
        Disorientation {
            angle: angle_deg.to_radians(),
            axis: axis.normalize(),
        }
    }

    /// Feature 0 unassigned, 1 a parent, 2 its twin, 3 unrelated, 4 a twin of 2.
    fn twin_chain() -> (Vec<Quat>, Vec<Vec<usize>>) {
        let axis = Vector3::new(1.0, 1.0, 1.0);
        let quats = vec![
            Quat::identity(),
            Quat::identity(),
            rot(60.0, axis),
            rot(30.0, Vector3::z()),
            rot(120.0, axis),
        ];
        let neighbors = vec![vec![], vec![2, 3], vec![1, 4], vec![1], vec![2]];
        (quats, neighbors)
    }

    // ==================== Σ3 criterion ====================

    #[test]
    fn test_sigma3_criterion() {
        let params = TwinParams::default();
        assert!(params.is_sigma3(&disorientation(60.0, Vector3::new(1.0, 1.0, 1.0))));
        assert!(params.is_sigma3(&disorientation(59.0, Vector3::new(-1.0, 1.0, -1.0))));
        assert!(!params.is_sigma3(&disorientation(63.0, Vector3::new(1.0, 1.0, 1.0))));
        assert!(!params.is_sigma3(&disorientation(60.0, Vector3::new(1.0, 1.0, 0.0))));
    }

    #[test]
    fn test_invalid_tolerances() {
        let params = TwinParams { angle_tolerance_deg: -1.0, ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(OrientationError::InvalidParameter { .. })
        ));
    }

    // ==================== merging ====================

    #[test]
    fn test_twin_chain_merges_into_first_parent() {
        let (quats, neighbors) = twin_chain();
        let phases = [0, 1, 1, 1, 1];
        let structures = [CrystalStructure::Cubic];
        let features = OrientationField::new(&quats, &phases, &structures).unwrap();

        let result = find_twins(&features, &neighbors, &TwinParams::default()).unwrap();
        assert_eq!(result.parent, vec![0, 1, 1, 3, 1]);
        assert_eq!(result.new_ids, vec![0, 1, 1, 2, 1]);
        assert_eq!(result.merged_count, 2);
        assert_eq!(result.twin_count, 2);
    }

    #[test]
    fn test_merge_relabels_voxels() {
        let (quats, neighbors) = twin_chain();
        let phases = [0, 1, 1, 1, 1];
        let structures = [CrystalStructure::CubicLow];
        let features = OrientationField::new(&quats, &phases, &structures).unwrap();

        let mut feature_ids = vec![0, 1, 2, 3, 4, 4, 3];
        let result =
            merge_twins(&features, &neighbors, &TwinParams::default(), &mut feature_ids).unwrap();
        assert_eq!(result.merged_count, 2);
        assert_eq!(feature_ids, vec![0, 1, 1, 2, 1, 1, 2]);
    }

    #[test]
    fn test_relabel_rejects_unknown_feature() {
        let result = TwinMergeResult {
            parent: vec![0, 1],
            new_ids: vec![0, 1],
            merged_count: 1,
            twin_count: 0,
        };
        let mut feature_ids = vec![1, 2];
        let err = relabel_voxels(&result, &mut feature_ids).unwrap_err();
        assert!(matches!(err, OrientationError::IndexOutOfRange { index: 2, .. }));
        // Nothing is rewritten on failure
        assert_eq!(feature_ids, vec![1, 2]);
    }

    #[test]
    fn test_non_cubic_features_never_merge() {
        let (quats, neighbors) = twin_chain();
        let phases = [0, 1, 1, 1, 1];
        let structures = [CrystalStructure::Hexagonal];
        let features = OrientationField::new(&quats, &phases, &structures).unwrap();

        let result = find_twins(&features, &neighbors, &TwinParams::default()).unwrap();
        assert_eq!(result.parent, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.new_ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.twin_count, 0);
    }

    #[test]
    fn test_different_phases_never_merge() {
        let (quats, neighbors) = twin_chain();
        let phases = [0, 1, 2, 1, 1];
        let structures = [CrystalStructure::Cubic, CrystalStructure::Cubic];
        let features = OrientationField::new(&quats, &phases, &structures).unwrap();

        let result = find_twins(&features, &neighbors, &TwinParams::default()).unwrap();
        assert_eq!(result.twin_count, 0);
        assert_eq!(result.merged_count, 4);
    }

    #[test]
    fn test_unindexed_features_keep_their_id() {
        let (quats, neighbors) = twin_chain();
        let phases = [0, 1, 0, 1, 1];
        let structures = [CrystalStructure::Cubic];
        let features = OrientationField::new(&quats, &phases, &structures).unwrap();

        let result = find_twins(&features, &neighbors, &TwinParams::default()).unwrap();
        assert_eq!(result.parent[2], 2);
        assert_eq!(result.twin_count, 0);
        assert_eq!(result.new_ids, vec![0, 1, 2, 3, 4]);
    }
}
