//! # MJCF Serialization Module
//!
//! This crate is the public serialization surface for the `mjcf` element
//! model.
//!
//! ## Features
//!
//! - **XML output**: walks an element's declared attribute and child
//!   fields and streams quick-xml events, producing MJCF that a
//!   MuJoCo-compatible model compiler loads without modification. Both
//!   compact and pretty-printed forms are available.
//! - **JSON support**: thin wrappers around `serde_json` that validate
//!   deserialized instances before handing them to the caller, so an
//!   exclusivity or range violation is reported at construction time.
//!
//! ## Guarantees
//!
//! | Property | Behavior |
//! |----------|----------|
//! | Determinism | Serializing the same instance twice is byte-identical |
//! | Attribute order | Exactly the order the element type declares |
//! | Absent fields | Omitted entirely, never empty attributes |
//! | Booleans | The literal strings `"true"` / `"false"` |
//! | Numeric vectors | Space-separated, shortest round-trip formatting |
//!
//! ## Examples
//!
//! ```ignore
//! use mjcf::Mujoco;
//! use mjcf_serde::{from_json_str, to_xml_string_pretty};
//!
//! let model: Mujoco = from_json_str(r#"{"model": "hello"}"#)?;
//! let xml = to_xml_string_pretty(&model)?;
//! ```

pub mod error;
pub mod json;
pub mod xml;

pub use error::{Result, SerdeError};

pub use json::{
    from_json_slice, from_json_str, from_json_value, to_json_string, to_json_string_pretty,
    to_json_value, to_json_vec,
};

pub use xml::{to_xml_string, to_xml_string_pretty, to_xml_vec, to_xml_writer};
