//! Core type definitions for formsync.
//!
//! This crate defines the fundamental, backend-agnostic types used throughout
//! the sync engine:
//! - Live field snapshots and control kinds
//! - Serialized field records (the persisted wire shape)
//! - Exclude rules for field eligibility
//! - The serializer/deserializer contract and the default JSON codec
//!
//! Everything host-specific (the live form, storage backends, the engine
//! lifecycle) lives in the other crates, not here.

mod codec;
mod fields;
mod record;

pub use codec::{Deserializer, JsonCodec, Serializer};
pub use fields::{ControlKind, ExcludePredicate, ExcludeRule, FieldRef, FieldState, ListenKind};
pub use record::{SerializedField, SerializedObject};
