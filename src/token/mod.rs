//! Captured XML node model.
//!
//! An [`XmlTokenEntry`] is one node recorded from an XML document: its node
//! type, qualified name parts, value, and (for elements) whether the source
//! used a self-closing tag. A token buffer is an ordered `Vec<XmlTokenEntry>`
//! produced by an external capture step; this crate only replays it.
//!
//! The buffer invariants the replayer relies on:
//!
//! - the sequence is well-nested: every non-empty `Element` entry has exactly
//!   one matching `EndElement` entry at the same nesting depth;
//! - `Attribute` entries form a contiguous run immediately following their
//!   owning `Element` entry;
//! - the sequence is immutable and finite, fixed at construction.
//!
//! # Examples
//!
//! ```
//! use xmlreplay::token::XmlTokenEntry;
//!
//! // <root id="1">hi</root>
//! let buffer = vec![
//!     XmlTokenEntry::element("", "root", ""),
//!     XmlTokenEntry::attribute("", "id", "", "1"),
//!     XmlTokenEntry::text("hi"),
//!     XmlTokenEntry::end_element(),
//! ];
//! assert_eq!(buffer.len(), 4);
//! ```

/// The type of a captured XML node.
///
/// These correspond to the node kinds that appear in a captured token
/// buffer. Node kinds that never survive capture (entity references,
/// processing instructions resolved away upstream) have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlNodeType {
    /// An element start tag, e.g. `<div>` or `<br/>`.
    ///
    /// For self-closing elements (`<br/>`),
    /// [`XmlTokenEntry::is_empty_element`] is `true` and no separate
    /// `EndElement` entry follows.
    Element,

    /// An element end tag, e.g. `</div>`.
    EndElement,

    /// An attribute on the directly preceding element entry.
    Attribute,

    /// A text node containing character data.
    Text,

    /// A CDATA section, e.g. `<![CDATA[...]]>`.
    CData,

    /// An XML comment, e.g. `<!-- comment -->`.
    Comment,

    /// A whitespace-only text node in element content.
    Whitespace,

    /// Whitespace in mixed content where `xml:space="preserve"` applies.
    SignificantWhitespace,

    /// A document type declaration, e.g. `<!DOCTYPE html>`.
    ///
    /// Never replayed into the sink.
    DocumentType,

    /// The XML declaration, e.g. `<?xml version="1.0"?>`.
    ///
    /// Never replayed into the sink.
    XmlDeclaration,
}

impl std::fmt::Display for XmlNodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element => write!(f, "Element"),
            Self::EndElement => write!(f, "EndElement"),
            Self::Attribute => write!(f, "Attribute"),
            Self::Text => write!(f, "Text"),
            Self::CData => write!(f, "CData"),
            Self::Comment => write!(f, "Comment"),
            Self::Whitespace => write!(f, "Whitespace"),
            Self::SignificantWhitespace => write!(f, "SignificantWhitespace"),
            Self::DocumentType => write!(f, "DocumentType"),
            Self::XmlDeclaration => write!(f, "XmlDeclaration"),
        }
    }
}

/// One captured XML node.
///
/// All name and value fields are plain strings; an empty string stands for
/// "not present" (no prefix, no namespace, no value). Which fields are
/// meaningful depends on [`node_type`](Self::node_type): an `EndElement`
/// carries no name at all, a `Text` entry only a value, and so on. The
/// per-kind constructors fill in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTokenEntry {
    /// The type of this node.
    pub node_type: XmlNodeType,
    /// The namespace prefix, or empty.
    pub prefix: String,
    /// The local name, or empty.
    pub local_name: String,
    /// The namespace URI, or empty.
    pub namespace_uri: String,
    /// The value/content (text, comment, CDATA, attribute value), or empty.
    pub value: String,
    /// Whether this is a self-closing element. Meaningful only when
    /// `node_type` is [`XmlNodeType::Element`].
    pub is_empty_element: bool,
}

impl XmlTokenEntry {
    fn named(node_type: XmlNodeType, prefix: &str, local_name: &str, namespace_uri: &str) -> Self {
        Self {
            node_type,
            prefix: prefix.to_string(),
            local_name: local_name.to_string(),
            namespace_uri: namespace_uri.to_string(),
            value: String::new(),
            is_empty_element: false,
        }
    }

    fn valued(node_type: XmlNodeType, value: &str) -> Self {
        Self {
            node_type,
            prefix: String::new(),
            local_name: String::new(),
            namespace_uri: String::new(),
            value: value.to_string(),
            is_empty_element: false,
        }
    }

    /// Creates an element start entry with an explicit end tag to follow.
    #[must_use]
    pub fn element(prefix: &str, local_name: &str, namespace_uri: &str) -> Self {
        Self::named(XmlNodeType::Element, prefix, local_name, namespace_uri)
    }

    /// Creates a self-closing element entry (`<name/>`).
    ///
    /// No `EndElement` entry follows an empty element in a buffer.
    #[must_use]
    pub fn empty_element(prefix: &str, local_name: &str, namespace_uri: &str) -> Self {
        let mut entry = Self::named(XmlNodeType::Element, prefix, local_name, namespace_uri);
        entry.is_empty_element = true;
        entry
    }

    /// Creates an element end entry.
    #[must_use]
    pub fn end_element() -> Self {
        Self::valued(XmlNodeType::EndElement, "")
    }

    /// Creates an attribute entry for the directly preceding element.
    #[must_use]
    pub fn attribute(prefix: &str, local_name: &str, namespace_uri: &str, value: &str) -> Self {
        let mut entry = Self::named(XmlNodeType::Attribute, prefix, local_name, namespace_uri);
        entry.value = value.to_string();
        entry
    }

    /// Creates a text entry.
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::valued(XmlNodeType::Text, value)
    }

    /// Creates a CDATA section entry.
    #[must_use]
    pub fn cdata(value: &str) -> Self {
        Self::valued(XmlNodeType::CData, value)
    }

    /// Creates a comment entry.
    #[must_use]
    pub fn comment(value: &str) -> Self {
        Self::valued(XmlNodeType::Comment, value)
    }

    /// Creates an insignificant-whitespace entry.
    #[must_use]
    pub fn whitespace(value: &str) -> Self {
        Self::valued(XmlNodeType::Whitespace, value)
    }

    /// Creates a significant-whitespace entry (`xml:space="preserve"`).
    #[must_use]
    pub fn significant_whitespace(value: &str) -> Self {
        Self::valued(XmlNodeType::SignificantWhitespace, value)
    }

    /// Creates an XML declaration entry. Dropped on replay.
    #[must_use]
    pub fn xml_declaration(value: &str) -> Self {
        Self::valued(XmlNodeType::XmlDeclaration, value)
    }

    /// Creates a document type declaration entry. Dropped on replay.
    #[must_use]
    pub fn document_type(value: &str) -> Self {
        Self::valued(XmlNodeType::DocumentType, value)
    }
}
