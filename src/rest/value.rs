//! Typed field values.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::rest::field::{DATETIME_FORMAT, DATE_FORMAT};
use crate::rest::Entity;

/// The typed value of a single entity field.
///
/// Produced by [`FieldDescriptor::parse`](crate::rest::FieldDescriptor::parse)
/// and accepted by [`Entity::set`](crate::rest::Entity::set). A link field
/// holds another [`Entity`], usually unresolved until it is first read.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// An integer.
    Integer(i64),
    /// A boolean.
    Bool(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// A date and time, without time zone.
    DateTime(NaiveDateTime),
    /// A string. String fields are never `Null`.
    String(String),
    /// A reference to another entity.
    Link(Box<Entity>),
}

impl Value {
    /// Returns `true` if the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the integer, if this is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the date, if this is a date value.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the date and time, if this is a date-time value.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the linked entity, if this is a link value.
    #[must_use]
    pub fn as_link(&self) -> Option<&Entity> {
        match self {
            Self::Link(entity) => Some(entity),
            _ => None,
        }
    }

    /// Returns the linked entity mutably, if this is a link value.
    #[must_use]
    pub fn as_link_mut(&mut self) -> Option<&mut Entity> {
        match self {
            Self::Link(entity) => Some(entity),
            _ => None,
        }
    }

    /// Returns the name of the value kind, for error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::String(_) => "string",
            Self::Link(_) => "link",
        }
    }
}

/// Renders the value the way `display()` lists it: `Null` is empty and a
/// link shows the label of its target.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{}", value.format(DATE_FORMAT)),
            Self::DateTime(value) => write!(f, "{}", value.format(DATETIME_FORMAT)),
            Self::String(value) => f.write_str(value),
            Self::Link(entity) => write!(f, "{entity}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Entity> for Value {
    fn from(value: Entity) -> Self {
        Self::Link(Box::new(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_displays_empty() {
        assert_eq!(Value::Null.to_string(), "");
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(
            Value::from(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()).to_string(),
            "2024-02-29"
        );
        let datetime = NaiveDate::from_ymd_opt(2023, 11, 5)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(Value::from(datetime).to_string(), "2023-11-05 08:30:00");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("core").as_str(), Some("core"));
        assert_eq!(Value::from("core").as_integer(), None);
        assert_eq!(Value::from(7_i64).as_integer(), Some(7));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert!(Value::from(None::<i64>).is_null());
    }

    #[test]
    fn test_link_value_displays_target_label() {
        let value = Value::from(Entity::unresolved("IpblockStatus", 4));
        assert_eq!(value.to_string(), "IpblockStatus/4");
        assert_eq!(value.as_link().and_then(Entity::id), Some(4));
        assert_eq!(value.kind_name(), "link");
    }
}
