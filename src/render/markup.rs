use std::collections::BTreeMap;
use std::fmt;

/// Maximum fractional digits emitted for coordinates and other numeric attributes.
pub const COORDINATE_PRECISION: usize = 3;

/// Attribute value: free text or a number serialized compactly.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => f.write_str(&format_coordinate(*value)),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Open-ended attribute map serialized in sorted name order.
///
/// Names are normalized on insert: underscores become hyphens, so
/// `text_anchor` and `text-anchor` address the same attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: BTreeMap<String, AttrValue>,
}

impl Attrs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.entries
            .insert(normalize_attr_name(name), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(&normalize_attr_name(name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Serializes as ` name="value"` pairs with escaped values.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(&value.to_string()));
            out.push('"');
        }
        out
    }
}

impl<S: AsRef<str>, V: Into<AttrValue>> FromIterator<(S, V)> for Attrs {
    fn from_iter<T: IntoIterator<Item = (S, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name.as_ref(), value);
        }
        attrs
    }
}

impl<S: AsRef<str>, V: Into<AttrValue>> Extend<(S, V)> for Attrs {
    fn extend<T: IntoIterator<Item = (S, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name.as_ref(), value);
        }
    }
}

/// Element body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    Empty,
    /// Character data, escaped on output.
    Text(&'a str),
    /// Already-serialized child elements, emitted verbatim.
    Markup(&'a str),
}

#[must_use]
pub fn normalize_attr_name(name: &str) -> String {
    name.replace('_', "-")
}

/// Serializes one element followed by a newline.
///
/// Empty bodies produce the self-closing form. Bodies spanning several
/// lines are trimmed and indented by one tab.
#[must_use]
pub fn element(tag: &str, content: Content<'_>, attrs: &Attrs) -> String {
    let body = match content {
        Content::Empty => String::new(),
        Content::Text(text) => escape_text(text),
        Content::Markup(markup) => markup.to_owned(),
    };
    let attrs = attrs.to_markup();

    if body.is_empty() {
        return format!("<{tag}{attrs} />\n");
    }

    let body = if body.contains('\n') {
        let mut indented = String::with_capacity(body.len() + 16);
        indented.push('\n');
        for line in body.trim().split('\n') {
            indented.push('\t');
            indented.push_str(line);
            indented.push('\n');
        }
        indented
    } else {
        body
    };
    format!("<{tag}{attrs}>{body}</{tag}>\n")
}

/// Escapes character data.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a double-quoted attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Shortest round-trip form of `value`, used for values shown to readers.
///
/// Whole numbers print without a fractional part and negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

/// Coordinate form of `value`: at most `COORDINATE_PRECISION` fractional
/// digits, trailing zeros stripped.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    let s = format!("{value:.prec$}", prec = COORDINATE_PRECISION);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_are_normalized_and_sorted() {
        let attrs = Attrs::new()
            .with("text_anchor", "end")
            .with("dominant_baseline", "middle")
            .with("x", 1.5);
        assert_eq!(
            attrs.to_markup(),
            r#" dominant-baseline="middle" text-anchor="end" x="1.5""#
        );
    }

    #[test]
    fn self_closing_without_content() {
        let attrs = Attrs::new().with("r", 3.0);
        assert_eq!(element("circle", Content::Empty, &attrs), "<circle r=\"3\" />\n");
        assert_eq!(element("circle", Content::Text(""), &attrs), "<circle r=\"3\" />\n");
    }

    #[test]
    fn multiline_markup_is_indented() {
        let child = element("title", Content::Text("a < b"), &Attrs::new());
        let children = format!("{child}{child}");
        let out = element("g", Content::Markup(&children), &Attrs::new());
        assert_eq!(
            out,
            "<g>\n\t<title>a &lt; b</title>\n\t<title>a &lt; b</title>\n</g>\n"
        );
    }

    #[test]
    fn attribute_values_escape_quotes() {
        let attrs = Attrs::new().with("data_label", "say \"hi\" & go");
        assert_eq!(
            attrs.to_markup(),
            r#" data-label="say &quot;hi&quot; &amp; go""#
        );
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(format_number(240.0), "240");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_coordinate(640.0 / 3.0), "213.333");
        assert_eq!(format_coordinate(12.5), "12.5");
        assert_eq!(format_coordinate(-0.0001), "0");
        assert_eq!(format_coordinate(100.0), "100");
    }
}
