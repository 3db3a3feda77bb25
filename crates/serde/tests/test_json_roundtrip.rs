use mjcf::{Body, Camera, Geom, GeomShape, Inertial, Mujoco, Orientation, Pos, WorldBody};
use mjcf_serde::{SerdeError, from_json_str, from_json_value, to_json_string};
use serde_json::json;

fn model() -> Mujoco {
    Mujoco {
        model: "roundtrip".to_string(),
        worldbody: Some(WorldBody {
            geoms: vec![Geom {
                name: Some("floor".to_string()),
                shape: GeomShape::Plane {
                    size: Some([5.0, 5.0, 0.1]),
                },
                ..Default::default()
            }],
            bodies: vec![Body {
                name: Some("robot".to_string()),
                pos: Some(Pos::new(0.0, 0.0, 1.0)),
                orientation: Some(Orientation::AxisAngle {
                    axisangle: [0.0, 0.0, 1.0, 0.5],
                }),
                inertial: Some(Inertial {
                    pos: Pos::new(0.0, 0.0, 0.0),
                    orientation: None,
                    mass: 2.0,
                    diaginertia: Some([0.1, 0.1, 0.1]),
                    fullinertia: None,
                }),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn test_model_roundtrips_through_json() -> mjcf_serde::Result<()> {
    let original = model();
    let json = to_json_string(&original)?;
    let back: Mujoco = from_json_str(&json)?;
    assert_eq!(back, original);
    Ok(())
}

#[test]
fn test_union_discriminants_survive_roundtrip() -> mjcf_serde::Result<()> {
    let json = to_json_string(&model())?;
    assert!(json.contains("\"type\":\"axisangle\""), "{json}");
    assert!(json.contains("\"type\":\"plane\""), "{json}");

    let back: Mujoco = from_json_str(&json)?;
    let body = &back.worldbody.as_ref().unwrap().bodies[0];
    assert!(matches!(
        body.orientation,
        Some(Orientation::AxisAngle { .. })
    ));
    Ok(())
}

#[test]
fn test_deserialization_validates_the_instance() {
    let invalid = json!({
        "fovy": 45.0,
        "sensorsize": [0.01, 0.01],
        "resolution": [1920, 1080],
        "focal": [0.05, 0.05],
    });
    let err = from_json_value::<Camera>(invalid).unwrap_err();
    assert!(matches!(err, SerdeError::Validation(_)), "{err:?}");
}

#[test]
fn test_absent_fields_stay_absent() -> mjcf_serde::Result<()> {
    let json = to_json_string(&Geom::default())?;
    assert_eq!(json, "{\"type\":\"sphere\"}");
    Ok(())
}
