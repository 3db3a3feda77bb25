use mjcf::{
    Camera, Compiler, Geom, GeomShape, MjOption, Orientation, Pos, Validate, ValidationError,
};
use mjcf_serde::{SerdeError, to_xml_string};
use mjcf_serde_support::{ElementError, ToElement, XmlElement};

#[test]
fn test_serialization_is_deterministic() -> mjcf_serde::Result<()> {
    let geom = Geom {
        name: Some("floor".to_string()),
        rgba: Some([0.5, 0.5, 0.5, 1.0]),
        shape: GeomShape::Plane {
            size: Some([5.0, 5.0, 0.1]),
        },
        ..Default::default()
    };

    let first = to_xml_string(&geom)?;
    let second = to_xml_string(&geom)?;
    assert_eq!(first, second);

    let structurally_equal = geom.clone();
    assert_eq!(to_xml_string(&structurally_equal)?, first);

    Ok(())
}

#[test]
fn test_absent_fields_emit_no_attribute() -> mjcf_serde::Result<()> {
    let geom = Geom {
        shape: GeomShape::Sphere { size: None },
        ..Default::default()
    };
    let xml = to_xml_string(&geom)?;
    assert!(xml.contains("<geom type=\"sphere\"/>"), "{xml}");
    assert!(!xml.contains("name="), "{xml}");
    assert!(!xml.contains("size="), "{xml}");
    Ok(())
}

#[test]
fn test_booleans_render_as_lowercase_literals() -> mjcf_serde::Result<()> {
    let compiler = Compiler {
        balanceinertia: Some(true),
        fusestatic: Some(false),
        ..Default::default()
    };
    let xml = to_xml_string(&compiler)?;
    assert!(xml.contains("balanceinertia=\"true\""), "{xml}");
    assert!(xml.contains("fusestatic=\"false\""), "{xml}");
    Ok(())
}

#[test]
fn test_vectors_render_space_separated() -> mjcf_serde::Result<()> {
    let option = MjOption {
        gravity: Some([0.0, 0.0, -9.81]),
        ..Default::default()
    };
    let xml = to_xml_string(&option)?;
    assert!(xml.contains("gravity=\"0 0 -9.81\""), "{xml}");
    Ok(())
}

#[test]
fn test_position_and_orientation_flatten_into_owner() -> mjcf_serde::Result<()> {
    let geom = Geom {
        pos: Some(Pos::new(0.0, 1.0, 2.0)),
        orientation: Some(Orientation::Euler {
            euler: [0.0, 0.0, 1.5],
        }),
        shape: GeomShape::Sphere { size: Some(0.1) },
        ..Default::default()
    };
    let xml = to_xml_string(&geom)?;
    assert!(xml.contains("pos=\"0 1 2\""), "{xml}");
    assert!(xml.contains("euler=\"0 0 1.5\""), "{xml}");
    // The helpers never become elements of their own.
    assert!(!xml.contains("<pos"), "{xml}");
    assert!(!xml.contains("<orientation"), "{xml}");
    Ok(())
}

#[test]
fn test_validation_runs_before_any_output() {
    let camera = Camera {
        fovy: Some(45.0),
        sensorsize: Some([0.01, 0.01]),
        resolution: Some([1920, 1080]),
        focal: Some([0.05, 0.05]),
        ..Default::default()
    };
    let err = to_xml_string(&camera).unwrap_err();
    assert!(matches!(
        err,
        SerdeError::Validation(ValidationError::MutuallyExclusive { .. })
    ));
}

// A node whose direct attribute collides with a flattened helper's
// attribute name.
struct CollidingMarker;

impl ToElement for CollidingMarker {
    fn tag(&self) -> &'static str {
        "marker"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr("pos", "0 0 0")?;
        el.flatten(&Pos::new(1.0, 1.0, 1.0))
    }
}

impl Validate for CollidingMarker {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[test]
fn test_flattening_collision_fails_loudly() {
    let err = to_xml_string(&CollidingMarker).unwrap_err();
    match err {
        SerdeError::Element(ElementError::DuplicateAttribute { tag, name }) => {
            assert_eq!(tag, "marker");
            assert_eq!(name, "pos");
        }
        other => panic!("expected duplicate-attribute error, got {other:?}"),
    }
}

// A helper with children, used where only attribute-only nodes are
// allowed.
struct NestedHelper;

impl ToElement for NestedHelper {
    fn tag(&self) -> &'static str {
        "helper"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.child(&Pos::new(0.0, 0.0, 0.0))
    }
}

struct FlattensNested;

impl ToElement for FlattensNested {
    fn tag(&self) -> &'static str {
        "owner"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.flatten(&NestedHelper)
    }
}

impl Validate for FlattensNested {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[test]
fn test_flattening_node_with_children_fails() {
    let err = to_xml_string(&FlattensNested).unwrap_err();
    match err {
        SerdeError::Element(ElementError::FlattenedChildren { tag, child }) => {
            assert_eq!(tag, "owner");
            assert_eq!(child, "helper");
        }
        other => panic!("expected flattened-children error, got {other:?}"),
    }
}
