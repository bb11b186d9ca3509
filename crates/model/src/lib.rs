//! courier-model: the shape mechanism behind every Courier model type.
//!
//! Request and response bodies for the Courier messaging and analytics
//! API are flat, optional-everywhere "shapes": every field can be unset,
//! unset is distinct from empty, and each field carries a stable JSON
//! wire name separate from its accessor name. Rather than hand-writing
//! the accessor surface for each of the service's resource shapes, this
//! crate derives all of it from a single declaration:
//!
//! ```
//! courier_model::string_enum! {
//!     /// How the recipient's device reacts to a tapped notification.
//!     pub enum TapAction {
//!         OpenApp => "OPEN_APP",
//!         Url => "URL",
//!     }
//! }
//!
//! courier_model::shape! {
//!     /// A minimal push payload.
//!     pub struct Note {
//!         /// Tap behavior.
//!         "Action" action: enum_str TapAction,
//!         /// Body text.
//!         "Body" body: string,
//!     }
//! }
//!
//! let note = Note::new().with_action(TapAction::OpenApp).with_body("hi");
//! assert_eq!(note.action(), Some("OPEN_APP"));
//! assert_eq!(note.to_string(), "{Action: OPEN_APP,Body: hi}");
//! ```
//!
//! The expansion provides getters, plain setters, fluent `with_`
//! mutators, guarded `add_*_entry` insertion for map fields, structural
//! equality and hashing, the braced debug rendering, serde
//! serialization under the wire names (unset fields omitted), and a
//! static [`Shape`] descriptor.
//!
//! # Public API
//!
//! - [`shape!`] -- declare a model type from its field list
//! - [`string_enum!`] -- declare an enum-backed string value set
//! - [`ModelError`] -- the single accessor error (duplicate map key)
//! - [`Shape`], [`FieldSpec`], [`FieldKind`], [`Shaped`] -- static
//!   per-type metadata
//! - [`WireEnum`] -- closed value sets for enum-backed string fields
//! - [`timestamp`] -- RFC 3339 helpers for timestamp fields

pub mod error;
pub mod hash;
pub mod map;
pub mod render;
pub mod shape;
pub mod timestamp;

mod enums;
mod macros;

pub use enums::WireEnum;
pub use error::ModelError;
pub use shape::{FieldKind, FieldSpec, Shape, Shaped};

// Used by the expansion of `shape!`; not part of the public API.
#[doc(hidden)]
pub use paste;
