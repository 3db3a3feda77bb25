//! XML serialization for MJCF model elements.
//!
//! Elements describe themselves through the
//! [`ToElement`](mjcf_serde_support::ToElement) trait; this module turns
//! the resulting element tree into quick-xml events.
//!
//! ## Output shape
//!
//! - An XML declaration is written before the root element.
//! - Elements without children are written as empty-element tags
//!   (`<geom .../>`); elements with children as start/end pairs.
//! - Attribute order is the element type's declared order; child order is
//!   the declared child-field order, with list-valued children kept in
//!   list order.
//!
//! The instance is validated before any output is produced, so a model
//! that violates an exclusivity group or range constraint never emits
//! partial XML.

pub mod ser;

pub use ser::{to_xml_string, to_xml_string_pretty, to_xml_vec, to_xml_writer};
