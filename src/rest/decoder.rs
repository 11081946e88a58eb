//! Decoding of Netdot XML responses.
//!
//! Netdot answers with a single root element. A fetch of one object puts the
//! object's attributes on the root itself:
//!
//! ```xml
//! <opt id="12" name="router1" site="Main" site_xlink="Site/3" />
//! ```
//!
//! A search wraps one child element per match:
//!
//! ```xml
//! <opt>
//!   <Device id="12" name="router1" />
//!   <Device id="13" name="router2" />
//! </opt>
//! ```
//!
//! Some Netdot versions emit raw control characters (seen in interface
//! neighbor data), which makes the document invalid. They are stripped
//! before parsing and a warning is logged.

use std::borrow::Cow;
use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::rest::errors::DecodeError;

/// Attribute name to (unescaped) value mapping of one XML element.
pub type Attributes = BTreeMap<String, String>;

/// A decoded Netdot response.
///
/// # Example
///
/// ```rust
/// use netdot_api::rest::XmlDocument;
///
/// let doc = XmlDocument::parse(r#"<opt><Site id="3" name="Main"/></opt>"#).unwrap();
/// assert_eq!(doc.records.len(), 1);
/// assert_eq!(doc.records[0]["name"], "Main");
/// assert!(!doc.sanitized);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlDocument {
    /// Attributes of the root element.
    pub root: Attributes,
    /// Attributes of each direct child of the root, in document order.
    pub records: Vec<Attributes>,
    /// Whether invalid control characters were removed before parsing.
    pub sanitized: bool,
}

impl XmlDocument {
    /// Parses a response body.
    ///
    /// The body is decoded as UTF-8, replacing invalid sequences.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Xml`] for malformed XML and
    /// [`DecodeError::MissingRoot`] if the body has no element at all.
    pub fn parse(body: impl AsRef<[u8]>) -> Result<Self, DecodeError> {
        let text = String::from_utf8_lossy(body.as_ref());
        let (text, sanitized) = match sanitize(&text) {
            Cow::Borrowed(text) => (Cow::Borrowed(text), false),
            Cow::Owned(text) => {
                tracing::warn!(
                    "invalid characters found in XML received from Netdot; they were removed"
                );
                (Cow::Owned(text), true)
            }
        };

        let mut reader = Reader::from_str(&text);
        reader.trim_text(true);

        let mut root = None;
        let mut records = Vec::new();
        let mut depth = 0_usize;

        loop {
            match reader.read_event()? {
                Event::Start(element) => {
                    Self::collect(&element, depth, &mut root, &mut records)?;
                    depth += 1;
                }
                Event::Empty(element) => {
                    Self::collect(&element, depth, &mut root, &mut records)?;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
        }

        let root = root.ok_or(DecodeError::MissingRoot)?;
        Ok(Self {
            root,
            records,
            sanitized,
        })
    }

    fn collect(
        element: &BytesStart<'_>,
        depth: usize,
        root: &mut Option<Attributes>,
        records: &mut Vec<Attributes>,
    ) -> Result<(), DecodeError> {
        match depth {
            0 if root.is_none() => *root = Some(attributes(element)?),
            1 => records.push(attributes(element)?),
            _ => {}
        }
        Ok(())
    }
}

fn attributes(element: &BytesStart<'_>) -> Result<Attributes, DecodeError> {
    let mut result = Attributes::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        result.insert(key, value);
    }
    Ok(result)
}

/// Returns `true` for characters that are not allowed in XML 1.0 documents:
/// the C0 controls except tab, newline and carriage return.
const fn is_invalid_xml_char(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}')
}

/// Removes characters that are invalid in XML. Borrows when there are none.
fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_invalid_xml_char) {
        Cow::Owned(text.chars().filter(|c| !is_invalid_xml_char(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}
