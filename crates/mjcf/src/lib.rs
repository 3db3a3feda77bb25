//! # MJCF Model
//!
//! Strongly-typed Rust representations of the MJCF XML schema, the model
//! description format consumed by the MuJoCo physics engine.
//!
//! Each MJCF element is one struct (or, for elements whose attribute set
//! depends on a discriminant, one internally tagged enum). Elements
//! implement two traits:
//!
//! - [`ToElement`](mjcf_serde_support::ToElement) describes how the element
//!   becomes an XML element: attributes and children are emitted in the
//!   order the MJCF schema declares them, absent optional fields are
//!   omitted entirely, and position/orientation helpers are flattened into
//!   the owning element's attribute list.
//! - [`Validate`] enforces the instance-level constraints that the XML
//!   type system cannot: mutual-exclusion groups (for example
//!   `diaginertia` vs `fullinertia` on [`Inertial`]), numeric ranges
//!   (group indices, inertia positivity) and required-attribute rules.
//!
//! Every element also derives `Serialize`/`Deserialize`, so models can be
//! built from or dumped to structured JSON. Discriminated unions carry
//! their discriminant (`type`, `builtin`) as an ordinary JSON key and
//! round-trip to the exact variant they were built from.
//!
//! ```ignore
//! use mjcf::{Geom, GeomShape, WorldBody, Mujoco};
//!
//! let floor = Geom {
//!     name: Some("floor".to_string()),
//!     rgba: Some([0.5, 0.5, 0.5, 1.0]),
//!     shape: GeomShape::Plane {
//!         size: Some([5.0, 5.0, 0.1]),
//!     },
//!     ..Default::default()
//! };
//! let model = Mujoco {
//!     worldbody: Some(WorldBody {
//!         geoms: vec![floor],
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! ```

pub mod asset;
pub mod attach;
pub mod body;
pub mod camera;
pub mod compiler;
pub mod geom;
pub mod inertial;
pub mod joint;
pub mod light;
pub mod mujoco;
pub mod option;
pub mod orientation;
pub mod position;
pub mod site;
pub mod size;
pub mod statistic;
pub mod types;
pub mod validate;

pub use asset::{Asset, HField, Material, Mesh, MeshBuiltin};
pub use attach::Attach;
pub use body::{Body, WorldBody};
pub use camera::Camera;
pub use compiler::{Compiler, LengthRange};
pub use geom::{Geom, GeomShape};
pub use inertial::Inertial;
pub use joint::{FreeJoint, Joint};
pub use light::Light;
pub use mujoco::Mujoco;
pub use option::{Flag, MjOption};
pub use orientation::Orientation;
pub use position::Pos;
pub use site::{Site, SiteShape};
pub use size::Size;
pub use statistic::Statistic;
pub use types::*;
pub use validate::{Validate, ValidationError};
