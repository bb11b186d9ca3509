//! courier-types: request and response model types for the Courier
//! messaging and analytics API.
//!
//! One module per resource family, each declaring its shapes through
//! [`courier_model::shape!`] and its closed value sets through
//! [`courier_model::string_enum!`]:
//!
//! - [`application`] -- applications and their campaign-level settings
//! - [`channel`] -- per-channel delivery configuration (email, push, SMS)
//! - [`message`] -- direct message payloads, per-address overrides, and
//!   send results
//! - [`campaign`] -- campaigns, schedules, treatments, and their
//!   per-channel message templates
//! - [`segment`] -- audience segments, dimensions, and import metadata
//! - [`endpoint`] -- device/user endpoints and their profile data
//! - [`event`] -- client-side event submissions
//! - [`analytics`] -- KPI query responses
//!
//! All shapes share the same contract: every field is optional and
//! starts unset, accessors never fail except the guarded map-entry
//! insert, equality and hashing are structural, and serialization uses
//! the wire names with unset fields omitted.

pub mod analytics;
pub mod application;
pub mod campaign;
pub mod channel;
pub mod endpoint;
pub mod event;
pub mod message;
pub mod segment;

pub use analytics::*;
pub use application::*;
pub use campaign::*;
pub use channel::*;
pub use endpoint::*;
pub use event::*;
pub use message::*;
pub use segment::*;
