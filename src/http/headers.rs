use std::collections::HashMap;
use std::collections::hash_map::Iter;

use crate::http::error::ParseError;

/// Header fields of a single request, keyed by canonical name.
///
/// Repeated fields are folded into one value joined by `", "`, in the order
/// they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one header line (without its CRLF) and records it.
    ///
    /// The line must be exactly `name:` followed by a single value token,
    /// separated by whitespace. The name is validated against the RFC 9110
    /// token character set and stored in canonical form.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfromtcp::http::headers::Headers;
    /// let mut headers = Headers::new();
    /// headers.set_or_append("accept: text/html").unwrap();
    /// headers.set_or_append("ACCEPT: */*").unwrap();
    /// assert_eq!(headers.get("Accept"), Some("text/html, */*"));
    /// ```
    pub fn set_or_append(&mut self, line: &str) -> Result<(), ParseError> {
        let mut parts = line.split_whitespace();
        let (field, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(value), None) => (field, value),
            _ => return Err(ParseError::MalformedHeaderLine(line.to_string())),
        };

        let name = field
            .strip_suffix(':')
            .ok_or_else(|| ParseError::MalformedHeaderLine(line.to_string()))?;

        if name.is_empty() || !name.bytes().all(is_token_char) {
            return Err(ParseError::InvalidFieldName(name.to_string()));
        }

        self.fields
            .entry(canonicalize(name))
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());

        Ok(())
    }

    /// Looks up a field by its canonical name. Case-sensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Returns `name` with each `-`-separated segment capitalized.
///
/// ```
/// # use httpfromtcp::http::headers::canonicalize;
/// assert_eq!(canonicalize("content-TYPE"), "Content-Type");
/// assert_eq!(canonicalize("Content-Type"), "Content-Type");
/// ```
pub fn canonicalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = true;

    for c in name.chars() {
        if c == '-' {
            segment_start = true;
            out.push(c);
        } else if segment_start {
            segment_start = false;
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }

    out
}

fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_' | b'|' | b'~'
        )
}
