//! Minimal HTML writer
//!
//! All text and attribute values pass through [`escape`].

/// Escape HTML special characters
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Append-only HTML buffer
#[derive(Debug, Default)]
pub(crate) struct Markup {
    buf: String,
}

impl Markup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
        }
    }

    pub(crate) fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.attrs(attrs);
        self.buf.push('>');
        self
    }

    /// Element without children, e.g. `<input ...>`
    pub(crate) fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs)
    }

    pub(crate) fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    pub(crate) fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    pub(crate) fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape("Single sign-on"), "Single sign-on");
    }

    #[test]
    fn attributes_are_escaped() {
        let mut m = Markup::new();
        m.element("div", &[("data-x", r#"{"a":"b"}"#)], "x < y");
        assert_eq!(
            m.finish(),
            r#"<div data-x="{&quot;a&quot;:&quot;b&quot;}">x &lt; y</div>"#
        );
    }

    #[test]
    fn void_element_has_no_close_tag() {
        let mut m = Markup::new();
        m.void("input", &[("type", "checkbox"), ("checked", "checked")]);
        assert_eq!(m.finish(), r#"<input type="checkbox" checked="checked">"#);
    }
}
