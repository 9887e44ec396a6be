//! Schema-driven settings model.
//!
//! The admin API returns a values map plus a JSON-Schema-like description of
//! every field. This module turns that pair into what the panel shows:
//! read-mode labels ([`ReadValue`]), edit-mode widgets ([`FieldEditor`]) and
//! the pending edits ([`EditBuffer`]).

mod buffer;
mod display;
mod editor;
mod types;

pub use buffer::EditBuffer;
pub use display::{stringify, ReadValue, DISABLED, ENABLED, NOT_SET};
pub use editor::{parse_text, seed_text, FieldEditor};
pub use types::{Field, ItemsSchema, PropertySchema, PropertyType, Schema, Settings, UpdateResponse};
