// src/headers.rs

pub const CONTENT_TYPE: &str = "Content-Type";

/// Mutable response header map.
///
/// Vec-backed: response header counts are small, and insertion order is
/// preserved on the wire. Lookup is case-insensitive per RFC 9110.
pub struct HeaderMap {
    entries: Vec<(&'static str, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// First value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets `name` to `value`, replacing any existing value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        for (k, v) in self.entries.iter_mut() {
            if k.eq_ignore_ascii_case(name) {
                *v = value;
                return;
            }
        }
        self.entries.push((name, value));
    }

    /// Sets `name` to `value` only if the header is not present yet.
    pub fn set_if_absent(&mut self, name: &'static str, value: impl Into<String>) {
        if !self.contains(name) {
            self.entries.push((name, value.into()));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HeaderMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets the Content-Type header unless the handler already chose one.
/// An existing value is never overwritten.
pub fn set_content_type_if_necessary(headers: &mut HeaderMap, content_type: &'static str) {
    headers.set_if_absent(CONTENT_TYPE, content_type);
}
