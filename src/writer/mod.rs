//! Writer sink capability and an in-memory text writer.
//!
//! [`XmlTokenWriter`] is the abstract destination the replayer emits into.
//! It covers exactly the calls a captured token buffer can produce; the
//! concrete destination (in-memory buffer, network stream, a hasher for
//! signature digests) is up to the implementation.
//!
//! [`XmlTextWriter`] is the built-in implementation: it renders the calls
//! as XML text into a `String`, with proper escaping and start-tag handling.
//!
//! # Examples
//!
//! ```
//! use xmlreplay::writer::{XmlTextWriter, XmlTokenWriter};
//!
//! let mut writer = XmlTextWriter::new();
//! writer.write_start_element("", "greeting", "");
//! writer.write_attribute_string("", "lang", "", "en");
//! writer.write_string("hello");
//! writer.write_end_element();
//! assert_eq!(writer.into_string(), "<greeting lang=\"en\">hello</greeting>");
//! ```

/// The abstract writer capability the replayer emits into.
///
/// Calls are synchronous and infallible: the replayer has no I/O error
/// taxonomy, and both of its failure conditions are checked before the
/// first writer call.
pub trait XmlTokenWriter {
    /// Writes an element start tag.
    fn write_start_element(&mut self, prefix: &str, local_name: &str, namespace_uri: &str);

    /// Writes an attribute on the currently open start tag.
    fn write_attribute_string(
        &mut self,
        prefix: &str,
        local_name: &str,
        namespace_uri: &str,
        value: &str,
    );

    /// Closes the most recently opened element.
    fn write_end_element(&mut self);

    /// Writes a CDATA section.
    fn write_cdata(&mut self, value: &str);

    /// Writes a comment.
    fn write_comment(&mut self, value: &str);

    /// Writes character data, escaped as text content.
    fn write_string(&mut self, value: &str);

    /// Writes whitespace verbatim.
    fn write_whitespace(&mut self, value: &str);
}

/// An [`XmlTokenWriter`] that renders XML text into an in-memory `String`.
///
/// Start tags are closed lazily so attributes can follow them; an element
/// ended while its start tag is still open collapses to the self-closing
/// form (`<a/>`). Qualified names are printed as `prefix:local`; namespace
/// URIs are carried by the capability calls but not printed, since the
/// capture model records `xmlns` declarations as ordinary attributes.
///
/// # Examples
///
/// ```
/// use xmlreplay::writer::{XmlTextWriter, XmlTokenWriter};
///
/// let mut writer = XmlTextWriter::new();
/// writer.write_start_element("ds", "Signature", "http://www.w3.org/2000/09/xmldsig#");
/// writer.write_end_element();
/// assert_eq!(writer.as_str(), "<ds:Signature/>");
/// ```
#[derive(Debug, Default)]
pub struct XmlTextWriter {
    out: String,
    /// Qualified names of currently open elements, innermost last.
    open_elements: Vec<String>,
    /// Whether the innermost start tag has not been closed with `>` yet.
    tag_open: bool,
}

impl XmlTextWriter {
    /// Creates an empty text writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text rendered so far.
    ///
    /// A start tag awaiting attributes is not yet terminated; call
    /// [`write_end_element`](XmlTokenWriter::write_end_element) for every
    /// open element before reading the output of a complete document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the writer and returns the rendered text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }

    fn qualified(prefix: &str, local_name: &str) -> String {
        if prefix.is_empty() {
            local_name.to_string()
        } else {
            format!("{prefix}:{local_name}")
        }
    }

    /// Terminates a pending start tag before content is written.
    fn close_pending_tag(&mut self) {
        if self.tag_open {
            self.out.push('>');
            self.tag_open = false;
        }
    }
}

impl XmlTokenWriter for XmlTextWriter {
    fn write_start_element(&mut self, prefix: &str, local_name: &str, _namespace_uri: &str) {
        self.close_pending_tag();
        let name = Self::qualified(prefix, local_name);
        self.out.push('<');
        self.out.push_str(&name);
        self.open_elements.push(name);
        self.tag_open = true;
    }

    fn write_attribute_string(
        &mut self,
        prefix: &str,
        local_name: &str,
        _namespace_uri: &str,
        value: &str,
    ) {
        // Attributes outside an open start tag have nowhere to go.
        if !self.tag_open {
            return;
        }
        self.out.push(' ');
        self.out.push_str(&Self::qualified(prefix, local_name));
        self.out.push_str("=\"");
        write_escaped_attr(&mut self.out, value);
        self.out.push('"');
    }

    fn write_end_element(&mut self) {
        let Some(name) = self.open_elements.pop() else {
            return;
        };
        if self.tag_open {
            self.out.push_str("/>");
            self.tag_open = false;
        } else {
            self.out.push_str("</");
            self.out.push_str(&name);
            self.out.push('>');
        }
    }

    fn write_cdata(&mut self, value: &str) {
        self.close_pending_tag();
        self.out.push_str("<![CDATA[");
        self.out.push_str(value);
        self.out.push_str("]]>");
    }

    fn write_comment(&mut self, value: &str) {
        self.close_pending_tag();
        self.out.push_str("<!--");
        self.out.push_str(value);
        self.out.push_str("-->");
    }

    fn write_string(&mut self, value: &str) {
        self.close_pending_tag();
        write_escaped_text(&mut self.out, value);
    }

    fn write_whitespace(&mut self, value: &str) {
        self.close_pending_tag();
        self.out.push_str(value);
    }
}

/// Writes a hexadecimal character reference (`&#xHH;`) for a code point.
fn write_hex_char_ref(out: &mut String, ch: char) {
    use std::fmt::Write;
    let _ = write!(out, "&#x{:X};", ch as u32);
}

/// Escapes text content for XML output.
///
/// `<`, `>`, `&` become named entity references, `\r` becomes `&#13;`,
/// `\t` and `\n` pass through, and other control characters below 0x20
/// are hex-encoded.
fn write_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            '\t' | '\n' => out.push(ch),
            c if (c as u32) < 0x20 => write_hex_char_ref(out, c),
            _ => out.push(ch),
        }
    }
}

/// Escapes attribute values for XML output.
///
/// In addition to the text rules, `"` becomes `&quot;` and `\t`/`\n`/`\r`
/// are encoded as decimal character references so they survive attribute
/// value normalization.
fn write_escaped_attr(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c if (c as u32) < 0x20 => write_hex_char_ref(out, c),
            _ => out.push(ch),
        }
    }
}
