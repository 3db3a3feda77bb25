use mjcf::{
    Body, Compiler, FreeJoint, Geom, GeomShape, Material, Mujoco, Orientation, WorldBody,
};
use mjcf_serde::{to_xml_string, to_xml_string_pretty};

fn floor() -> Geom {
    Geom {
        name: Some("floor".to_string()),
        rgba: Some([0.5, 0.5, 0.5, 1.0]),
        shape: GeomShape::Plane {
            size: Some([5.0, 5.0, 0.1]),
        },
        ..Default::default()
    }
}

#[test]
fn test_floor_geom_attribute_order_matches_declaration() -> mjcf_serde::Result<()> {
    let xml = to_xml_string(&floor())?;
    assert!(
        xml.contains("<geom name=\"floor\" type=\"plane\" rgba=\"0.5 0.5 0.5 1\" size=\"5 5 0.1\"/>"),
        "{xml}"
    );
    Ok(())
}

#[test]
fn test_complete_model_document() -> mjcf_serde::Result<()> {
    let material = Material {
        name: "shiny".to_string(),
        reflectance: Some(0.3),
        ..Default::default()
    };

    let robot = Body {
        name: Some("robot".to_string()),
        freejoint: Some(FreeJoint::default()),
        geoms: vec![Geom {
            name: Some("ball".to_string()),
            rgba: Some([1.0, 0.0, 0.0, 1.0]),
            shape: GeomShape::Sphere { size: Some(0.2) },
            ..Default::default()
        }],
        ..Default::default()
    };

    let model = Mujoco {
        model: "hello".to_string(),
        compilers: vec![Compiler {
            balanceinertia: Some(true),
            ..Default::default()
        }],
        assets: vec![mjcf::Asset {
            materials: vec![material],
            ..Default::default()
        }],
        worldbody: Some(WorldBody {
            geoms: vec![Geom {
                material: Some("shiny".to_string()),
                orientation: Some(Orientation::Quat {
                    quat: [1.0, 0.0, 0.0, 0.0],
                }),
                ..floor()
            }],
            bodies: vec![robot],
            ..Default::default()
        }),
        ..Default::default()
    };

    let xml = to_xml_string(&model)?;
    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>",
        "<mujoco model=\"hello\">",
        "<compiler balanceinertia=\"true\"/>",
        "<asset><material name=\"shiny\" reflectance=\"0.3\"/></asset>",
        "<worldbody>",
        "<geom name=\"floor\" type=\"plane\" material=\"shiny\" quat=\"1 0 0 0\" \
         rgba=\"0.5 0.5 0.5 1\" size=\"5 5 0.1\"/>",
        "<body name=\"robot\">",
        "<joint type=\"free\"/>",
        "<geom name=\"ball\" type=\"sphere\" rgba=\"1 0 0 1\" size=\"0.2\"/>",
        "</body>",
        "</worldbody>",
        "</mujoco>",
    );
    assert_eq!(xml, expected);

    Ok(())
}

#[test]
fn test_nested_bodies_serialize_recursively() -> mjcf_serde::Result<()> {
    let model = Mujoco {
        worldbody: Some(WorldBody {
            bodies: vec![Body {
                name: Some("upper".to_string()),
                bodies: vec![Body {
                    name: Some("lower".to_string()),
                    bodies: vec![Body {
                        name: Some("foot".to_string()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    };

    let xml = to_xml_string(&model)?;
    assert!(
        xml.contains(
            "<body name=\"upper\"><body name=\"lower\"><body name=\"foot\"/></body></body>"
        ),
        "{xml}"
    );
    Ok(())
}

#[test]
fn test_pretty_output_is_indented() -> mjcf_serde::Result<()> {
    let model = Mujoco {
        worldbody: Some(WorldBody {
            geoms: vec![floor()],
            ..Default::default()
        }),
        ..Default::default()
    };

    let pretty = to_xml_string_pretty(&model)?;
    assert!(pretty.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(pretty.contains("\n  <worldbody>"), "{pretty}");
    assert!(pretty.contains("\n    <geom"), "{pretty}");
    Ok(())
}
