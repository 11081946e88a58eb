//! Field descriptors: per-field type coercion between wire strings and
//! typed [`Value`]s.
//!
//! Every resource kind declares an ordered list of descriptors. A descriptor
//! knows how to read its slice of a record's wire attributes, how to render
//! a value back into the wire form used for dirty tracking, and how to
//! serialize it for a save request.
//!
//! # Coercion rules
//!
//! | Kind     | Absent / empty       | Parsing                                      |
//! |----------|----------------------|----------------------------------------------|
//! | Integer  | `Null`               | `i64`, error otherwise                       |
//! | Bool     | default, else false  | `"0"` is false, any other value is true      |
//! | Date     | `Null`               | ISO, day-first, month-first; error otherwise |
//! | DateTime | `Null`               | year 1970 and unparsable values are `Null`   |
//! | String   | default, else `""`   | verbatim                                     |
//! | Link     | `Null`               | id after the last `/` of `<name>_xlink`      |
//!
//! Non-ISO dates and timestamps are read day-first when both readings are
//! valid (`03/04/2021` is the 3rd of April); month-first is only tried when
//! day-first fails (`03/14/2021`).

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::rest::decoder::Attributes;
use crate::rest::errors::FieldError;
use crate::rest::{Entity, Value};

/// Wire format of date fields.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of date-time fields.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date value the server sends for an unset date.
const ZERO_DATE: &str = "0000-00-00";

/// Year the server uses for unset timestamps (`1970-01-02 00:00:01`).
const UNSET_TIMESTAMP_YEAR: i32 = 1970;

const DATETIME_FORMATS: &[&str] = &[
    DATETIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m-%d-%Y %H:%M:%S",
];

/// Non-ISO date formats, day-first before month-first.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%m-%d-%Y",
];

/// The type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A 64-bit integer.
    Integer,
    /// A boolean sent as `"1"`/`"0"`.
    Bool,
    /// A calendar date.
    Date,
    /// A timestamp.
    DateTime,
    /// Free text.
    String,
    /// A reference to an entity of another kind.
    Link {
        /// The kind name of the referenced entity.
        target: &'static str,
    },
}

impl FieldKind {
    /// Returns the name of the kind, for error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::String => "string",
            Self::Link { .. } => "link",
        }
    }
}

/// Declarative description of one field of a resource kind.
///
/// Descriptors are `const`-constructible so schemas can be declared as
/// static data:
///
/// ```rust
/// use netdot_api::rest::{FieldDescriptor, FieldKind};
///
/// const ADDRESS: FieldDescriptor = FieldDescriptor::string("address").with_display_name("Address");
/// const STATUS: FieldDescriptor = FieldDescriptor::link("status", "IpblockStatus");
/// const MONITORED: FieldDescriptor = FieldDescriptor::boolean("monitored").with_default("0");
///
/// assert_eq!(STATUS.kind, FieldKind::Link { target: "IpblockStatus" });
/// assert_eq!(STATUS.xlink_name(), "status_xlink");
/// assert_eq!(ADDRESS.display_name(), "Address");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Attribute name on the wire.
    pub name: &'static str,
    /// The field type.
    pub kind: FieldKind,
    /// Wire value used when the attribute is absent.
    pub default: Option<&'static str>,
    /// Human-readable name, defaults to `name`.
    pub display_name: Option<&'static str>,
}

impl FieldDescriptor {
    /// Creates a descriptor of the given kind.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            display_name: None,
        }
    }

    /// Creates an integer field.
    #[must_use]
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Creates a boolean field.
    #[must_use]
    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    /// Creates a date field.
    #[must_use]
    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Creates a date-time field.
    #[must_use]
    pub const fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    /// Creates a string field.
    #[must_use]
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Creates a link field referencing entities of kind `target`.
    #[must_use]
    pub const fn link(name: &'static str, target: &'static str) -> Self {
        Self::new(name, FieldKind::Link { target })
    }

    /// Sets the wire value used when the attribute is absent.
    #[must_use]
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets the human-readable name.
    #[must_use]
    pub const fn with_display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.display_name.unwrap_or(self.name)
    }

    /// Returns the attribute carrying the link target (`<name>_xlink`).
    #[must_use]
    pub fn xlink_name(&self) -> String {
        format!("{}_xlink", self.name)
    }

    /// Returns the link target kind, if this is a link field.
    #[must_use]
    pub const fn link_target(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Link { target } => Some(target),
            _ => None,
        }
    }

    /// Returns the value of a freshly created entity.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if the declared default cannot be parsed.
    pub fn default_value(&self) -> Result<Value, FieldError> {
        self.parse(&Attributes::new())
    }

    /// Reads this field from a record's wire attributes.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for non-numeric integers, unparsable dates
    /// and malformed links. Unparsable timestamps are logged and read as
    /// `Null` instead.
    pub fn parse(&self, attributes: &Attributes) -> Result<Value, FieldError> {
        if let FieldKind::Link { target } = self.kind {
            return self.parse_link(target, attributes.get(&self.xlink_name()));
        }

        let raw = attributes
            .get(self.name)
            .map(String::as_str)
            .or(self.default);

        match self.kind {
            FieldKind::Integer => self.parse_integer(raw),
            FieldKind::Bool => Ok(Value::Bool(matches!(raw, Some(v) if !v.is_empty() && v != "0"))),
            FieldKind::Date => self.parse_date(raw),
            FieldKind::DateTime => Ok(self.parse_datetime(raw)),
            FieldKind::String => Ok(Value::String(raw.unwrap_or_default().to_string())),
            FieldKind::Link { .. } => Ok(Value::Null),
        }
    }

    fn parse_integer(&self, raw: Option<&str>) -> Result<Value, FieldError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Value::Null),
            Some(value) => value
                .parse()
                .map(Value::Integer)
                .map_err(|_| FieldError::InvalidInteger {
                    field: self.name,
                    value: value.to_string(),
                }),
        }
    }

    fn parse_date(&self, raw: Option<&str>) -> Result<Value, FieldError> {
        let value = match raw.map(str::trim) {
            None | Some("") => return Ok(Value::Null),
            Some(value) if value.starts_with(ZERO_DATE) => return Ok(Value::Null),
            Some(value) => value,
        };

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .ok()
            .or_else(|| parse_datetime(value).map(|datetime| datetime.date()))
            .or_else(|| {
                FALLBACK_DATE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            })
            .map(Value::Date)
            .ok_or_else(|| FieldError::InvalidDate {
                field: self.name,
                value: value.to_string(),
            })
    }

    fn parse_datetime(&self, raw: Option<&str>) -> Value {
        let value = match raw.map(str::trim) {
            None | Some("") => return Value::Null,
            Some(value) => value,
        };

        let parsed = parse_datetime(value).or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

        match parsed {
            Some(datetime) if datetime.year() == UNSET_TIMESTAMP_YEAR => Value::Null,
            Some(datetime) => Value::DateTime(datetime),
            None => {
                tracing::warn!(field = self.name, value, "cannot parse timestamp, treating as unset");
                Value::Null
            }
        }
    }

    fn parse_link(&self, target: &'static str, xlink: Option<&String>) -> Result<Value, FieldError> {
        let xlink = match xlink.map(|value| value.trim()) {
            None | Some("") => return Ok(Value::Null),
            Some(xlink) => xlink,
        };

        let id = xlink
            .rsplit('/')
            .next()
            .and_then(|suffix| suffix.parse::<u64>().ok())
            .ok_or_else(|| FieldError::InvalidLink {
                field: self.name,
                value: xlink.to_string(),
            })?;

        Ok(Value::Link(Box::new(Entity::unresolved(target, id))))
    }

    /// Renders a value into its wire form for dirty comparison.
    ///
    /// `Null` (and a link to an unsaved entity) has no wire form.
    #[must_use]
    pub fn raw(&self, value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::Integer(value) => Some(value.to_string()),
            Value::Bool(value) => Some(if *value { "1" } else { "0" }.to_string()),
            Value::Date(value) => Some(value.format(DATE_FORMAT).to_string()),
            Value::DateTime(value) => Some(value.format(DATETIME_FORMAT).to_string()),
            Value::String(value) => Some(value.clone()),
            Value::Link(entity) => entity.id().map(|id| id.to_string()),
        }
    }

    /// Renders a value for a save request. `Null` becomes an empty string.
    #[must_use]
    pub fn serialize(&self, value: &Value) -> String {
        self.raw(value).unwrap_or_default()
    }

    /// Checks a value assigned by the caller and converts it to this
    /// field's kind where the conversion is lossless.
    ///
    /// Links accept an [`Entity`] of the target kind or a bare id (integer
    /// or numeric string), which becomes an unresolved entity. Strings accept `Null` as `""`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::TypeMismatch`] for values of another kind.
    pub fn coerce(&self, value: Value) -> Result<Value, FieldError> {
        let mismatch = || FieldError::TypeMismatch {
            field: self.name,
            expected: self.kind.name(),
        };

        match (self.kind, value) {
            (FieldKind::String, Value::Null) => Ok(Value::String(String::new())),
            (_, Value::Null) => Ok(Value::Null),
            (FieldKind::Integer, value @ Value::Integer(_))
            | (FieldKind::Bool, value @ Value::Bool(_))
            | (FieldKind::Date, value @ Value::Date(_))
            | (FieldKind::DateTime, value @ Value::DateTime(_))
            | (FieldKind::String, value @ Value::String(_)) => Ok(value),
            (FieldKind::Bool, Value::Integer(value)) => Ok(Value::Bool(value != 0)),
            (FieldKind::Date, Value::DateTime(value)) => Ok(Value::Date(value.date())),
            (FieldKind::DateTime, Value::Date(value)) => value
                .and_hms_opt(0, 0, 0)
                .map(Value::DateTime)
                .ok_or_else(mismatch),
            (FieldKind::Link { target }, Value::Link(entity)) if entity.kind() == target => {
                Ok(Value::Link(entity))
            }
            (FieldKind::Link { target }, Value::Integer(id)) => u64::try_from(id)
                .map(|id| Value::Link(Box::new(Entity::unresolved(target, id))))
                .map_err(|_| mismatch()),
            (FieldKind::Link { target }, Value::String(id)) => id
                .trim()
                .parse::<u64>()
                .map(|id| Value::Link(Box::new(Entity::unresolved(target, id))))
                .map_err(|_| mismatch()),
            _ => Err(mismatch()),
        }
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_integer_parsing() {
        let field = FieldDescriptor::integer("prefix");
        assert_eq!(field.parse(&attrs(&[("prefix", "32")])).unwrap(), Value::Integer(32));
        assert_eq!(field.parse(&attrs(&[("prefix", "")])).unwrap(), Value::Null);
        assert_eq!(field.parse(&attrs(&[])).unwrap(), Value::Null);
        assert!(matches!(
            field.parse(&attrs(&[("prefix", "abc")])),
            Err(FieldError::InvalidInteger { field: "prefix", .. })
        ));
    }

    #[test]
    fn test_integer_uses_default_when_absent() {
        let field = FieldDescriptor::integer("version").with_default("4");
        assert_eq!(field.parse(&attrs(&[])).unwrap(), Value::Integer(4));
    }

    #[test]
    fn test_bool_parsing() {
        let field = FieldDescriptor::boolean("monitored");
        assert_eq!(field.parse(&attrs(&[("monitored", "0")])).unwrap(), Value::Bool(false));
        assert_eq!(field.parse(&attrs(&[("monitored", "1")])).unwrap(), Value::Bool(true));
        assert_eq!(field.parse(&attrs(&[("monitored", "yes")])).unwrap(), Value::Bool(true));
        assert_eq!(field.parse(&attrs(&[("monitored", "")])).unwrap(), Value::Bool(false));
        assert_eq!(field.parse(&attrs(&[])).unwrap(), Value::Bool(false));

        let with_default = FieldDescriptor::boolean("snmp_managed").with_default("1");
        assert_eq!(with_default.parse(&attrs(&[])).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_date_parsing() {
        let field = FieldDescriptor::date("date_installed");
        let expected = Value::Date(NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());

        assert_eq!(field.parse(&attrs(&[("date_installed", "2021-03-14")])).unwrap(), expected);
        assert_eq!(
            field.parse(&attrs(&[("date_installed", "2021-03-14 10:00:00")])).unwrap(),
            expected
        );
        assert_eq!(field.parse(&attrs(&[("date_installed", "14/03/2021")])).unwrap(), expected);
        assert_eq!(field.parse(&attrs(&[("date_installed", "0000-00-00")])).unwrap(), Value::Null);
        assert_eq!(field.parse(&attrs(&[])).unwrap(), Value::Null);
        assert!(matches!(
            field.parse(&attrs(&[("date_installed", "someday")])),
            Err(FieldError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_date_month_first_fallback() {
        let field = FieldDescriptor::date("date_installed");

        assert_eq!(
            field.parse(&attrs(&[("date_installed", "03/14/2021")])).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2021, 3, 14).unwrap())
        );
        assert_eq!(
            field.parse(&attrs(&[("date_installed", "03-14-2021")])).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2021, 3, 14).unwrap())
        );
        // Ambiguous dates stay day-first.
        assert_eq!(
            field.parse(&attrs(&[("date_installed", "03/04/2021")])).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2021, 4, 3).unwrap())
        );
    }

    #[test]
    fn test_datetime_parsing() {
        let field = FieldDescriptor::datetime("last_updated");
        let expected = NaiveDate::from_ymd_opt(2023, 6, 1)
            .unwrap()
            .and_hms_opt(12, 30, 5)
            .unwrap();

        assert_eq!(
            field.parse(&attrs(&[("last_updated", "2023-06-01 12:30:05")])).unwrap(),
            Value::DateTime(expected)
        );
        assert_eq!(
            field.parse(&attrs(&[("last_updated", "01/06/2023 12:30:05")])).unwrap(),
            Value::DateTime(expected)
        );
        assert_eq!(
            field.parse(&attrs(&[("last_updated", "06/13/2023 12:30:05")])).unwrap(),
            Value::DateTime(
                NaiveDate::from_ymd_opt(2023, 6, 13)
                    .unwrap()
                    .and_hms_opt(12, 30, 5)
                    .unwrap()
            )
        );
        assert_eq!(field.parse(&attrs(&[("last_updated", "")])).unwrap(), Value::Null);
    }

    #[test]
    fn test_datetime_unset_sentinel_is_null() {
        let field = FieldDescriptor::datetime("last_arp");
        assert_eq!(
            field.parse(&attrs(&[("last_arp", "1970-01-02 00:00:01")])).unwrap(),
            Value::Null
        );
        assert_eq!(
            field.parse(&attrs(&[("last_arp", "1970-07-04 10:00:00")])).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_datetime_unparsable_is_null_not_error() {
        let field = FieldDescriptor::datetime("last_arp");
        assert_eq!(field.parse(&attrs(&[("last_arp", "garbage")])).unwrap(), Value::Null);
    }

    #[test]
    fn test_string_parsing() {
        let field = FieldDescriptor::string("description");
        assert_eq!(field.parse(&attrs(&[])).unwrap(), Value::String(String::new()));
        assert_eq!(
            field.parse(&attrs(&[("description", "uplink")])).unwrap(),
            Value::String("uplink".to_string())
        );

        let with_default = FieldDescriptor::string("rir").with_default("ARIN");
        assert_eq!(with_default.parse(&attrs(&[])).unwrap(), Value::from("ARIN"));
    }

    #[test]
    fn test_link_parsing() {
        let field = FieldDescriptor::link("status", "IpblockStatus");

        let value = field
            .parse(&attrs(&[("status", "Subnet"), ("status_xlink", "IpblockStatus/4")]))
            .unwrap();
        let entity = value.as_link().unwrap();
        assert_eq!(entity.kind(), "IpblockStatus");
        assert_eq!(entity.id(), Some(4));
        assert!(!entity.is_resolved());

        assert_eq!(field.parse(&attrs(&[("status", "")])).unwrap(), Value::Null);
        assert_eq!(field.parse(&attrs(&[("status_xlink", "")])).unwrap(), Value::Null);
        assert!(matches!(
            field.parse(&attrs(&[("status_xlink", "IpblockStatus/x")])),
            Err(FieldError::InvalidLink { .. })
        ));
    }

    #[test]
    fn test_raw_and_serialize() {
        let flag = FieldDescriptor::boolean("monitored");
        assert_eq!(flag.raw(&Value::Bool(true)), Some("1".to_string()));
        assert_eq!(flag.serialize(&Value::Bool(false)), "0");

        let date = FieldDescriptor::date("date_installed");
        let value = Value::Date(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
        assert_eq!(date.serialize(&value), "2020-01-02");
        assert_eq!(date.raw(&Value::Null), None);
        assert_eq!(date.serialize(&Value::Null), "");

        let link = FieldDescriptor::link("site", "Site");
        assert_eq!(link.serialize(&Value::from(Entity::unresolved("Site", 9))), "9");
    }

    #[test]
    fn test_canonical_wire_values_are_stable() {
        let cases = [
            (FieldDescriptor::integer("prefix"), "24"),
            (FieldDescriptor::integer("prefix"), "-1"),
            (FieldDescriptor::string("info"), "core uplink"),
            (FieldDescriptor::string("info"), ""),
            (FieldDescriptor::boolean("monitored"), "1"),
            (FieldDescriptor::boolean("monitored"), "0"),
            (FieldDescriptor::date("date_installed"), "2021-03-14"),
            (FieldDescriptor::datetime("last_updated"), "2023-06-01 12:30:05"),
        ];

        for (field, wire) in cases {
            let value = field.parse(&attrs(&[(field.name, wire)])).unwrap();
            assert_eq!(field.raw(&value).as_deref(), Some(wire), "{}: {wire:?}", field.name);
        }
    }

    #[test]
    fn test_non_canonical_wire_values_normalize() {
        let cases = [
            (FieldDescriptor::integer("prefix"), " 24 ", "24"),
            (FieldDescriptor::boolean("monitored"), "yes", "1"),
            (FieldDescriptor::boolean("monitored"), "", "0"),
            (FieldDescriptor::date("date_installed"), "14/03/2021", "2021-03-14"),
            (FieldDescriptor::date("date_installed"), "03/14/2021", "2021-03-14"),
            (FieldDescriptor::date("date_installed"), "2021-03-14 10:00:00", "2021-03-14"),
            (FieldDescriptor::datetime("last_updated"), "01/06/2023 12:30:05", "2023-06-01 12:30:05"),
            (FieldDescriptor::datetime("last_updated"), "2023-06-01T12:30:05", "2023-06-01 12:30:05"),
        ];

        for (field, wire, canonical) in cases {
            let value = field.parse(&attrs(&[(field.name, wire)])).unwrap();
            let raw = field.raw(&value);
            assert_eq!(raw.as_deref(), Some(canonical), "{}: {wire:?}", field.name);

            let reparsed = field.parse(&attrs(&[(field.name, canonical)])).unwrap();
            assert_eq!(reparsed, value, "{}: {wire:?}", field.name);
        }
    }

    #[test]
    fn test_link_wire_value_is_the_target_id() {
        let field = FieldDescriptor::link("site", "Site");

        for xlink in ["Site/9", "https://netdot.example.com/netdot/rest/Site/9", " Site/9 "] {
            let value = field.parse(&attrs(&[("site_xlink", xlink)])).unwrap();
            let raw = field.raw(&value).unwrap();
            assert_eq!(raw, "9", "{xlink:?}");

            let canonical = format!("Site/{raw}");
            let reparsed = field.parse(&attrs(&[("site_xlink", canonical.as_str())])).unwrap();
            assert_eq!(field.raw(&reparsed).as_deref(), Some("9"));
            assert_eq!(reparsed, value);
        }
    }

    #[test]
    fn test_coerce_link_from_id() {
        let link = FieldDescriptor::link("site", "Site");
        let value = link.coerce(Value::Integer(3)).unwrap();
        assert_eq!(value.as_link().unwrap().kind(), "Site");
        assert_eq!(value.as_link().unwrap().id(), Some(3));

        let value = link.coerce(Value::from(" 8")).unwrap();
        assert_eq!(value.as_link().unwrap().id(), Some(8));
        assert!(link.coerce(Value::from("Main")).is_err());

        assert!(matches!(
            link.coerce(Value::from(Entity::unresolved("Device", 3))),
            Err(FieldError::TypeMismatch { field: "site", .. })
        ));
    }

    #[test]
    fn test_coerce_rejects_wrong_kind() {
        let integer = FieldDescriptor::integer("prefix");
        assert!(integer.coerce(Value::from("24")).is_err());
        assert_eq!(integer.coerce(Value::Null).unwrap(), Value::Null);

        let string = FieldDescriptor::string("info");
        assert_eq!(string.coerce(Value::Null).unwrap(), Value::from(""));
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        assert_eq!(FieldDescriptor::string("info").display_name(), "info");
        assert_eq!(
            FieldDescriptor::string("info").with_display_name("Comments").display_name(),
            "Comments"
        );
    }
}
