//! # MJCF Serialization Support
//!
//! This crate provides the shared infrastructure used by the MJCF element
//! model and its serializers:
//!
//! - [`XmlElement`]: an ordered, in-memory XML element tree. Attribute and
//!   child order is exactly insertion order, which is what makes repeated
//!   serialization of the same model byte-identical.
//! - [`AttrValue`]: conversion of typed field values into MJCF attribute
//!   strings (`"true"`/`"false"` booleans, space-separated numeric vectors,
//!   keyword enums).
//! - [`ToElement`]: the trait every schema element implements to describe
//!   how it becomes an [`XmlElement`].
//!
//! ## Attribute flattening
//!
//! Some helper nodes (positions, orientations) never appear as their own
//! XML elements. Instead their attributes are merged into the element that
//! owns them:
//!
//! | Model field | XML result |
//! |-------------|------------|
//! | `pos: Pos { pos: [0, 1, 2] }` on a body | `<body pos="0 1 2">` |
//! | `orientation: Orientation::Quat { .. }` on a camera | `<camera quat="1 0 0 0">` |
//!
//! Merging is strict: a helper that produced child elements cannot be
//! flattened, and a merged attribute name that already exists on the target
//! element is an error rather than a silent overwrite. Both cases indicate
//! an inconsistency in the model being serialized and surface as
//! [`ElementError`] values naming the offending element and attribute.

pub mod element;
pub mod error;
pub mod value;

pub use element::{ToElement, XmlElement};
pub use error::ElementError;
pub use value::AttrValue;
