use mjcf::{
    Body, Camera, FreeJoint, Geom, GeomShape, Inertial, Joint, MjOption, Mujoco, Pos, Statistic,
    Validate, ValidationError, WorldBody,
};

fn inertial() -> Inertial {
    Inertial {
        pos: Pos::new(0.0, 0.0, 0.0),
        orientation: None,
        mass: 1.0,
        diaginertia: Some([0.01, 0.01, 0.01]),
        fullinertia: None,
    }
}

#[test]
fn test_inertial_exclusivity_group() {
    // Exactly one inertia form: fine.
    assert!(inertial().validate().is_ok());

    // Both set: the exclusivity group rejects the instance.
    let both = Inertial {
        fullinertia: Some([0.01, 0.01, 0.01, 0.0, 0.0, 0.0]),
        ..inertial()
    };
    let err = both.validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::MutuallyExclusive {
            element: "inertial",
            fields: "diaginertia, fullinertia".to_string(),
        }
    );
}

#[test]
fn test_camera_fovy_sensorsize_exclusive() {
    let camera = Camera {
        fovy: Some(45.0),
        sensorsize: Some([0.01, 0.01]),
        ..Default::default()
    };
    assert!(matches!(
        camera.validate().unwrap_err(),
        ValidationError::MutuallyExclusive { .. }
    ));

    let fovy_only = Camera {
        fovy: Some(45.0),
        ..Default::default()
    };
    assert!(fovy_only.validate().is_ok());

    let neither = Camera::default();
    assert!(neither.validate().is_ok());
}

#[test]
fn test_body_rejects_freejoint_next_to_joints() {
    let body = Body {
        joints: vec![Joint::default()],
        freejoint: Some(FreeJoint::default()),
        ..Default::default()
    };
    assert!(matches!(
        body.validate().unwrap_err(),
        ValidationError::MutuallyExclusive { .. }
    ));
}

#[test]
fn test_group_indices_are_range_checked() {
    let geom = Geom {
        group: Some(31),
        ..Default::default()
    };
    assert!(matches!(
        geom.validate().unwrap_err(),
        ValidationError::OutOfRange { .. }
    ));

    let option = MjOption {
        actuatorgroupdisable: Some(vec![0, 31]),
        ..Default::default()
    };
    assert!(matches!(
        option.validate().unwrap_err(),
        ValidationError::OutOfRange { .. }
    ));
}

#[test]
fn test_statistic_extent_strictly_positive() {
    let statistic = Statistic {
        extent: Some(0.0),
        ..Default::default()
    };
    assert!(matches!(
        statistic.validate().unwrap_err(),
        ValidationError::BadMagnitude { .. }
    ));
}

#[test]
fn test_geom_condim_whitelist() {
    for condim in [1, 3, 4, 6] {
        let geom = Geom {
            condim: Some(condim),
            ..Default::default()
        };
        assert!(geom.validate().is_ok());
    }
    let geom = Geom {
        condim: Some(2),
        ..Default::default()
    };
    assert!(geom.validate().is_err());
}

#[test]
fn test_mesh_geom_requires_asset_reference() {
    let geom = Geom {
        shape: GeomShape::Mesh,
        ..Default::default()
    };
    assert!(matches!(
        geom.validate().unwrap_err(),
        ValidationError::Missing { .. }
    ));

    let ok = Geom {
        shape: GeomShape::Mesh,
        mesh: Some("forearm".to_string()),
        ..Default::default()
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn test_validation_recurses_through_the_tree() {
    let model = Mujoco {
        worldbody: Some(WorldBody {
            bodies: vec![Body {
                name: Some("robot".to_string()),
                inertial: Some(Inertial {
                    mass: -1.0,
                    ..inertial()
                }),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(matches!(
        model.validate().unwrap_err(),
        ValidationError::BadMagnitude { .. }
    ));
}
