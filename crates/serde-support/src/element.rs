//! The ordered XML element tree and the node-building trait.

use crate::error::ElementError;
use crate::value::AttrValue;

/// One XML element: a tag, an ordered attribute list and ordered children.
///
/// Attributes and children are stored in plain vectors so that iteration
/// order is insertion order. Element builders insert in declared schema
/// order, which gives the determinism and order-preservation guarantees of
/// the serializer: two structurally equal models always produce
/// byte-identical XML.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates an empty element with the given tag.
    ///
    /// An empty tag denotes a virtual helper node that only exists to be
    /// flattened into its parent's attribute list.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The attributes in emission order.
    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    /// The child elements in emission order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Looks up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn push_attr(&mut self, name: &'static str, value: String) -> Result<(), ElementError> {
        if self.attributes.iter().any(|(n, _)| *n == name) {
            return Err(ElementError::DuplicateAttribute {
                tag: self.tag.to_string(),
                name: name.to_string(),
            });
        }
        self.attributes.push((name, value));
        Ok(())
    }

    /// Sets an attribute, formatted through [`AttrValue`].
    ///
    /// Setting a name that is already present is an error, never an
    /// overwrite.
    pub fn attr<V: AttrValue + ?Sized>(
        &mut self,
        name: &'static str,
        value: &V,
    ) -> Result<(), ElementError> {
        self.push_attr(name, value.attr_string())
    }

    /// Sets an attribute if the value is present; absent values emit
    /// nothing at all (not an empty attribute).
    pub fn attr_opt<V: AttrValue>(
        &mut self,
        name: &'static str,
        value: Option<&V>,
    ) -> Result<(), ElementError> {
        match value {
            Some(value) => self.attr(name, value),
            None => Ok(()),
        }
    }

    /// Merges the attributes of an attribute-only helper node into this
    /// element.
    ///
    /// The helper is first built into its own [`XmlElement`]; it must not
    /// have produced children, and none of its attribute names may already
    /// exist here.
    pub fn flatten<N: ToElement>(&mut self, node: &N) -> Result<(), ElementError> {
        let built = node.to_element()?;
        if !built.children.is_empty() {
            return Err(ElementError::FlattenedChildren {
                tag: self.tag.to_string(),
                child: built.tag.to_string(),
            });
        }
        for (name, value) in built.attributes {
            self.push_attr(name, value)?;
        }
        Ok(())
    }

    /// Flattens a helper node if present.
    pub fn flatten_opt<N: ToElement>(&mut self, node: Option<&N>) -> Result<(), ElementError> {
        match node {
            Some(node) => self.flatten(node),
            None => Ok(()),
        }
    }

    /// Appends a single child element built from a model node.
    pub fn child<N: ToElement>(&mut self, node: &N) -> Result<(), ElementError> {
        self.children.push(node.to_element()?);
        Ok(())
    }

    /// Appends a child element if the node is present.
    pub fn child_opt<N: ToElement>(&mut self, node: Option<&N>) -> Result<(), ElementError> {
        match node {
            Some(node) => self.child(node),
            None => Ok(()),
        }
    }

    /// Appends one child element per node, preserving list order.
    pub fn child_list<N: ToElement>(&mut self, nodes: &[N]) -> Result<(), ElementError> {
        for node in nodes {
            self.child(node)?;
        }
        Ok(())
    }
}

/// Conversion from a typed schema element to an [`XmlElement`].
///
/// Implementations push attributes and children in the order the MJCF
/// schema declares them; that order is preserved all the way to the byte
/// output. The recursion terminates because the model is a tree: every
/// child is exclusively owned by its parent.
pub trait ToElement {
    /// The XML tag this node serializes to. Empty for virtual helper nodes
    /// that are only ever flattened into a parent.
    fn tag(&self) -> &'static str;

    /// Populates `el` with this node's attributes and children.
    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError>;

    /// Builds the complete element for this node.
    fn to_element(&self) -> Result<XmlElement, ElementError> {
        let mut el = XmlElement::new(self.tag());
        self.build(&mut el)?;
        Ok(el)
    }
}

impl<N: ToElement> ToElement for &N {
    fn tag(&self) -> &'static str {
        (*self).tag()
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        (*self).build(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offset {
        pos: [f64; 3],
    }

    impl ToElement for Offset {
        fn tag(&self) -> &'static str {
            ""
        }

        fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
            el.attr("pos", &self.pos)
        }
    }

    struct Marker {
        name: String,
        offset: Option<Offset>,
    }

    impl ToElement for Marker {
        fn tag(&self) -> &'static str {
            "marker"
        }

        fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
            el.attr("name", &self.name)?;
            el.flatten_opt(self.offset.as_ref())
        }
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut el = XmlElement::new("geom");
        el.attr("name", "floor").unwrap();
        el.attr("type", "plane").unwrap();
        el.attr("size", &[5.0, 5.0, 0.1]).unwrap();

        let names: Vec<_> = el.attributes().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["name", "type", "size"]);
    }

    #[test]
    fn test_absent_optional_emits_nothing() {
        let mut el = XmlElement::new("geom");
        el.attr_opt::<String>("name", None).unwrap();
        assert!(el.attributes().is_empty());
    }

    #[test]
    fn test_duplicate_attribute_is_an_error() {
        let mut el = XmlElement::new("geom");
        el.attr("name", "a").unwrap();
        let err = el.attr("name", "b").unwrap_err();
        assert_eq!(
            err,
            ElementError::DuplicateAttribute {
                tag: "geom".to_string(),
                name: "name".to_string(),
            }
        );
        // The original value survives the rejected overwrite.
        assert_eq!(el.get_attr("name"), Some("a"));
    }

    #[test]
    fn test_flatten_merges_helper_attributes() {
        let marker = Marker {
            name: "anchor".to_string(),
            offset: Some(Offset {
                pos: [0.0, 1.0, 2.0],
            }),
        };
        let el = marker.to_element().unwrap();
        assert_eq!(el.get_attr("name"), Some("anchor"));
        assert_eq!(el.get_attr("pos"), Some("0 1 2"));
    }

    #[test]
    fn test_flatten_collision_is_an_error() {
        let mut el = XmlElement::new("marker");
        el.attr("pos", "0 0 0").unwrap();
        let err = el
            .flatten(&Offset {
                pos: [1.0, 1.0, 1.0],
            })
            .unwrap_err();
        assert_eq!(
            err,
            ElementError::DuplicateAttribute {
                tag: "marker".to_string(),
                name: "pos".to_string(),
            }
        );
    }

    #[test]
    fn test_flatten_rejects_nodes_with_children() {
        struct Nested;

        impl ToElement for Nested {
            fn tag(&self) -> &'static str {
                "nested"
            }

            fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
                el.child(&Offset {
                    pos: [0.0, 0.0, 0.0],
                })
            }
        }

        let mut el = XmlElement::new("marker");
        let err = el.flatten(&Nested).unwrap_err();
        assert_eq!(
            err,
            ElementError::FlattenedChildren {
                tag: "marker".to_string(),
                child: "nested".to_string(),
            }
        );
    }

    #[test]
    fn test_child_list_preserves_order() {
        let mut el = XmlElement::new("group");
        let markers = vec![
            Marker {
                name: "a".to_string(),
                offset: None,
            },
            Marker {
                name: "b".to_string(),
                offset: None,
            },
        ];
        el.child_list(&markers).unwrap();
        let names: Vec<_> = el
            .children()
            .iter()
            .map(|c| c.get_attr("name").unwrap())
            .collect();
        assert_eq!(names, ["a", "b"]);
    }
}
