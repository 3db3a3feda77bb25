use mjcf::{Geom, GeomShape, Mesh, MeshBuiltin, Orientation, Site, SiteShape};

#[test]
fn test_orientation_roundtrip_reproduces_variant() {
    let cases = vec![
        Orientation::Quat {
            quat: [1.0, 2.0, 3.0, 4.0],
        },
        Orientation::AxisAngle {
            axisangle: [1.0, 0.0, 0.0, 0.5],
        },
        Orientation::XyAxes {
            xyaxes: [0.0, 1.0, 0.0, -1.0, 0.0, 0.0],
        },
        Orientation::ZAxis {
            zaxis: [0.0, 0.0, 1.0],
        },
        Orientation::Euler {
            euler: [0.1, 0.2, 0.3],
        },
    ];
    for orientation in cases {
        let json = serde_json::to_string(&orientation).unwrap();
        assert!(json.contains("\"type\""), "discriminant missing: {json}");
        let back: Orientation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, orientation);
    }
}

#[test]
fn test_orientation_discriminant_spelling() {
    let json = serde_json::to_string(&Orientation::AxisAngle {
        axisangle: [1.0, 0.0, 0.0, 0.5],
    })
    .unwrap();
    assert!(json.contains("\"type\":\"axisangle\""), "{json}");
}

#[test]
fn test_geom_shape_roundtrip_reproduces_variant() {
    let geom = Geom {
        name: Some("ball".to_string()),
        shape: GeomShape::Sphere { size: Some(0.2) },
        rgba: Some([1.0, 0.0, 0.0, 1.0]),
        ..Default::default()
    };
    let json = serde_json::to_string(&geom).unwrap();
    assert!(json.contains("\"type\":\"sphere\""), "{json}");
    let back: Geom = serde_json::from_str(&json).unwrap();
    assert_eq!(back, geom);
}

#[test]
fn test_geom_deserializes_from_untyped_mapping() {
    let json = r#"{"name": "floor", "type": "plane", "size": [5, 5, 0.1]}"#;
    let geom: Geom = serde_json::from_str(json).unwrap();
    assert_eq!(geom.name.as_deref(), Some("floor"));
    assert_eq!(
        geom.shape,
        GeomShape::Plane {
            size: Some([5.0, 5.0, 0.1])
        }
    );
}

#[test]
fn test_geom_shapes_distinguish_size_typing() {
    let sphere: Geom = serde_json::from_str(r#"{"type": "sphere", "size": 0.5}"#).unwrap();
    assert_eq!(sphere.shape, GeomShape::Sphere { size: Some(0.5) });

    let capsule: Geom = serde_json::from_str(r#"{"type": "capsule", "size": [1, 3]}"#).unwrap();
    assert_eq!(
        capsule.shape,
        GeomShape::Capsule {
            size: Some(vec![1.0, 3.0])
        }
    );
}

#[test]
fn test_site_shape_roundtrip() {
    let site = Site {
        name: Some("tip".to_string()),
        shape: SiteShape::Box {
            size: Some([0.01, 0.01, 0.01]),
        },
        ..Default::default()
    };
    let json = serde_json::to_string(&site).unwrap();
    let back: Site = serde_json::from_str(&json).unwrap();
    assert_eq!(back, site);
}

#[test]
fn test_mesh_builtin_roundtrip() {
    let mesh = Mesh {
        name: Some("dome".to_string()),
        builtin: Some(MeshBuiltin::Hemisphere { resolution: 6 }),
        ..Default::default()
    };
    let json = serde_json::to_string(&mesh).unwrap();
    assert!(json.contains("\"builtin\":\"hemisphere\""), "{json}");
    let back: Mesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mesh);

    let plain = Mesh {
        file: Some("forearm.stl".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&plain).unwrap();
    assert!(!json.contains("builtin"), "{json}");
    let back: Mesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back.builtin, None);
}
