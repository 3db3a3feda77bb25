//! Error types raised while building XML element trees.

use thiserror::Error;

/// Errors detected while assembling an [`crate::XmlElement`] from a model
/// node.
///
/// Both variants indicate an inconsistency between two otherwise valid
/// nodes; they are not recoverable by retrying the same serialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// Two sources produced the same attribute name on one element.
    ///
    /// This happens when a flattened helper node carries an attribute that
    /// the owning element already set, either directly or through an
    /// earlier flattening pass. Overwriting silently would change the
    /// meaning of the model, so it is rejected.
    #[error("duplicate attribute `{name}` on <{tag}>")]
    DuplicateAttribute {
        /// Tag of the element the attribute was being added to.
        tag: String,
        /// The colliding attribute name.
        name: String,
    },

    /// A node with child elements was used as a flattened attribute value.
    ///
    /// Only attribute-only helper nodes may be merged into their parent's
    /// attribute list; child elements have nowhere to go.
    #[error("cannot flatten `{child}` into <{tag}>: flattened nodes must not have children")]
    FlattenedChildren {
        /// Tag of the element the node was being merged into.
        tag: String,
        /// Tag of the offending node (may be empty for virtual helpers).
        child: String,
    },
}
