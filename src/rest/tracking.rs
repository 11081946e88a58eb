//! Dirty tracking by wire-state comparison.
//!
//! When an entity is synchronized with the server (decoded from a response,
//! or saved), the wire form of every field is captured in a
//! [`StateSnapshot`]. A field is dirty when its current wire form differs
//! from the captured one. Comparing wire forms rather than typed values
//! means a link replaced by another entity with the same id is not dirty,
//! while a link to a different id is.
//!
//! # Example
//!
//! ```rust
//! use netdot_api::rest::{FieldDescriptor, FieldValues, StateSnapshot, Value};
//!
//! static FIELDS: [FieldDescriptor; 2] = [
//!     FieldDescriptor::string("name"),
//!     FieldDescriptor::integer("vid"),
//! ];
//!
//! let mut values = FieldValues::new();
//! values.insert("name", Value::from("users"));
//! values.insert("vid", Value::from(10));
//!
//! let snapshot = StateSnapshot::capture(&FIELDS, &values);
//! assert!(!snapshot.is_dirty(&FIELDS, &values));
//!
//! values.insert("vid", Value::from(20));
//! let changed: Vec<_> = snapshot.changed_fields(&FIELDS, &values).iter().map(|f| f.name).collect();
//! assert_eq!(changed, vec!["vid"]);
//! ```

use std::collections::BTreeMap;

use crate::rest::{FieldDescriptor, Value};

/// Typed field values of an entity, keyed by field name.
pub type FieldValues = BTreeMap<&'static str, Value>;

/// Wire forms of an entity's fields at the last synchronization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    /// `None` until the entity has been synchronized with the server.
    original_state: Option<BTreeMap<&'static str, Option<String>>>,
}

impl StateSnapshot {
    /// Creates the snapshot of an entity that was never persisted.
    ///
    /// Every field of such an entity is dirty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            original_state: None,
        }
    }

    /// Captures the current wire state.
    #[must_use]
    pub fn capture(fields: &[FieldDescriptor], values: &FieldValues) -> Self {
        Self {
            original_state: Some(wire_state(fields, values)),
        }
    }

    /// Returns `true` if any field differs from the captured state.
    #[must_use]
    pub fn is_dirty(&self, fields: &'static [FieldDescriptor], values: &FieldValues) -> bool {
        !self.changed_fields(fields, values).is_empty()
    }

    /// Returns the fields whose wire form differs from the captured state,
    /// in declaration order. Without a captured state, returns every field.
    #[must_use]
    pub fn changed_fields(
        &self,
        fields: &'static [FieldDescriptor],
        values: &FieldValues,
    ) -> Vec<&'static FieldDescriptor> {
        let Some(original) = &self.original_state else {
            return fields.iter().collect();
        };

        fields
            .iter()
            .filter(|field| {
                let current = field.raw(values.get(field.name).unwrap_or(&Value::Null));
                original.get(field.name) != Some(&current)
            })
            .collect()
    }

    /// Forgets the captured state, making every field dirty.
    pub fn reset(&mut self) {
        self.original_state = None;
    }
}

fn wire_state(
    fields: &[FieldDescriptor],
    values: &FieldValues,
) -> BTreeMap<&'static str, Option<String>> {
    fields
        .iter()
        .map(|field| {
            let value = values.get(field.name).unwrap_or(&Value::Null);
            (field.name, field.raw(value))
        })
        .collect()
}
