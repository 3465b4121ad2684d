//! Forward-only positional cursor over a captured token buffer.
//!
//! The [`XmlTokenCursor`] provides a cursor-style view over an immutable
//! slice of [`XmlTokenEntry`] values, similar in shape to libxml2's
//! `xmlTextReader` and .NET's `XmlReader`, except that it never parses
//! anything: it only walks entries that were captured earlier.
//!
//! Element traversal and attribute traversal interleave on the same cursor,
//! so the position is an explicit, externally inspectable index rather than
//! a hidden iterator: the replayer moves onto an element, walks its
//! attribute run with [`move_to_first_attribute`] /
//! [`move_to_next_attribute`], then continues from wherever the attribute
//! walk left the cursor.
//!
//! [`move_to_first_attribute`]: XmlTokenCursor::move_to_first_attribute
//! [`move_to_next_attribute`]: XmlTokenCursor::move_to_next_attribute
//!
//! # Examples
//!
//! ```
//! use xmlreplay::cursor::XmlTokenCursor;
//! use xmlreplay::token::{XmlNodeType, XmlTokenEntry};
//!
//! let buffer = vec![
//!     XmlTokenEntry::element("", "root", ""),
//!     XmlTokenEntry::attribute("", "a", "", "1"),
//!     XmlTokenEntry::end_element(),
//! ];
//! let mut cursor = XmlTokenCursor::new(&buffer);
//!
//! assert!(cursor.move_to_first());
//! assert_eq!(cursor.node_type(), XmlNodeType::Element);
//! assert!(cursor.move_to_first_attribute());
//! assert_eq!(cursor.value(), "1");
//! assert!(!cursor.move_to_next_attribute());
//! assert!(cursor.move_to_next());
//! assert_eq!(cursor.node_type(), XmlNodeType::EndElement);
//! assert!(!cursor.move_to_next());
//! ```

use crate::token::{XmlNodeType, XmlTokenEntry};

/// A forward-only cursor over an immutable token buffer.
///
/// The position is 0-based, monotonically non-decreasing within a pass, and
/// resettable to 0 with [`move_to_first`](Self::move_to_first) to start a
/// fresh pass. The buffer itself is only borrowed, so any number of cursors
/// may view the same buffer.
///
/// The projection accessors read the entry at the current position.
/// They panic on an empty buffer, the one contract the caller must uphold;
/// [`XmlTokenReplayer`](crate::replay::XmlTokenReplayer) guarantees it by
/// checking emptiness before the first projection.
#[derive(Debug, Clone)]
pub struct XmlTokenCursor<'a> {
    /// The captured entries, shared read-only.
    entries: &'a [XmlTokenEntry],
    /// Index of the current entry.
    position: usize,
}

impl<'a> XmlTokenCursor<'a> {
    /// Creates a cursor positioned at the start of `entries`.
    #[must_use]
    pub fn new(entries: &'a [XmlTokenEntry]) -> Self {
        Self {
            entries,
            position: 0,
        }
    }

    /// Returns the number of entries in the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the underlying buffer has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current 0-based position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    // === Navigation ===

    /// Resets the cursor to the first entry, starting a fresh pass.
    ///
    /// Returns `true` if the buffer is non-empty.
    pub fn move_to_first(&mut self) -> bool {
        self.position = 0;
        !self.entries.is_empty()
    }

    /// Advances to the next entry.
    ///
    /// Returns `true` if the cursor advanced, `false` if it was already at
    /// the last entry (the position is then left unchanged).
    pub fn move_to_next(&mut self) -> bool {
        if self.position + 1 < self.entries.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Advances onto the first attribute of the current element.
    ///
    /// Attributes are stored as a contiguous run immediately following their
    /// owning element entry, so this advances by one iff the next entry is
    /// an [`XmlNodeType::Attribute`]; otherwise it is a no-op returning
    /// `false`.
    pub fn move_to_first_attribute(&mut self) -> bool {
        if self.position + 1 < self.entries.len()
            && self.entries[self.position + 1].node_type == XmlNodeType::Attribute
        {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Advances onto the next attribute in the current attribute run.
    ///
    /// Behaviorally identical to
    /// [`move_to_first_attribute`](Self::move_to_first_attribute); both are
    /// kept as distinct operations to match the capture model's reader
    /// surface.
    pub fn move_to_next_attribute(&mut self) -> bool {
        if self.position + 1 < self.entries.len()
            && self.entries[self.position + 1].node_type == XmlNodeType::Attribute
        {
            self.position += 1;
            true
        } else {
            false
        }
    }

    // === Projections of the current entry ===

    fn current(&self) -> &'a XmlTokenEntry {
        &self.entries[self.position]
    }

    /// Returns the node type of the current entry.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    #[must_use]
    pub fn node_type(&self) -> XmlNodeType {
        self.current().node_type
    }

    /// Returns the namespace prefix of the current entry (may be empty).
    #[must_use]
    pub fn prefix(&self) -> &'a str {
        &self.current().prefix
    }

    /// Returns the local name of the current entry (may be empty).
    #[must_use]
    pub fn local_name(&self) -> &'a str {
        &self.current().local_name
    }

    /// Returns the namespace URI of the current entry (may be empty).
    #[must_use]
    pub fn namespace_uri(&self) -> &'a str {
        &self.current().namespace_uri
    }

    /// Returns the value of the current entry (may be empty).
    #[must_use]
    pub fn value(&self) -> &'a str {
        &self.current().value
    }

    /// Returns whether the current entry is a self-closing element.
    #[must_use]
    pub fn is_empty_element(&self) -> bool {
        self.current().is_empty_element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::XmlTokenEntry;

    fn buffer_with_attributes() -> Vec<XmlTokenEntry> {
        vec![
            XmlTokenEntry::element("", "root", ""),
            XmlTokenEntry::attribute("", "a", "", "1"),
            XmlTokenEntry::attribute("", "b", "", "2"),
            XmlTokenEntry::text("hi"),
            XmlTokenEntry::end_element(),
        ]
    }

    #[test]
    fn test_move_to_first_empty_buffer() {
        let entries: Vec<XmlTokenEntry> = vec![];
        let mut cursor = XmlTokenCursor::new(&entries);
        assert!(!cursor.move_to_first());
        assert!(cursor.is_empty());
        assert_eq!(cursor.len(), 0);
    }

    #[test]
    fn test_move_to_first_resets_position() {
        let entries = buffer_with_attributes();
        let mut cursor = XmlTokenCursor::new(&entries);
        assert!(cursor.move_to_first());
        assert!(cursor.move_to_next());
        assert!(cursor.move_to_next());
        assert_eq!(cursor.position(), 2);
        assert!(cursor.move_to_first());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_move_to_next_stops_at_last_entry() {
        let entries = buffer_with_attributes();
        let mut cursor = XmlTokenCursor::new(&entries);
        cursor.move_to_first();
        let mut advanced = 0;
        while cursor.move_to_next() {
            advanced += 1;
        }
        assert_eq!(advanced, entries.len() - 1);
        assert_eq!(cursor.position(), entries.len() - 1);
        // Still positioned on the last entry, not past it.
        assert_eq!(cursor.node_type(), XmlNodeType::EndElement);
        assert!(!cursor.move_to_next());
    }

    #[test]
    fn test_attribute_walk() {
        let entries = buffer_with_attributes();
        let mut cursor = XmlTokenCursor::new(&entries);
        cursor.move_to_first();

        assert!(cursor.move_to_first_attribute());
        assert_eq!(cursor.node_type(), XmlNodeType::Attribute);
        assert_eq!(cursor.local_name(), "a");
        assert_eq!(cursor.value(), "1");

        assert!(cursor.move_to_next_attribute());
        assert_eq!(cursor.local_name(), "b");
        assert_eq!(cursor.value(), "2");

        // Next entry is text, so the attribute run is over.
        assert!(!cursor.move_to_next_attribute());
        assert_eq!(cursor.local_name(), "b");
    }

    #[test]
    fn test_attribute_moves_noop_without_attributes() {
        let entries = vec![
            XmlTokenEntry::element("", "root", ""),
            XmlTokenEntry::text("hi"),
            XmlTokenEntry::end_element(),
        ];
        let mut cursor = XmlTokenCursor::new(&entries);
        cursor.move_to_first();
        assert!(!cursor.move_to_first_attribute());
        assert!(!cursor.move_to_next_attribute());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_first_and_next_attribute_agree_everywhere() {
        // The two attribute moves are behaviorally identical: at every
        // position of a mixed buffer they return the same answer and land
        // on the same position.
        let entries = buffer_with_attributes();
        for start in 0..entries.len() {
            let mut first = XmlTokenCursor::new(&entries);
            let mut next = XmlTokenCursor::new(&entries);
            first.move_to_first();
            next.move_to_first();
            for _ in 0..start {
                first.move_to_next();
                next.move_to_next();
            }
            assert_eq!(
                first.move_to_first_attribute(),
                next.move_to_next_attribute(),
                "diverged at position {start}"
            );
            assert_eq!(first.position(), next.position());
        }
    }

    #[test]
    fn test_projections() {
        let entries = vec![XmlTokenEntry::attribute("xsi", "type", "urn:xsi", "int")];
        let mut cursor = XmlTokenCursor::new(&entries);
        cursor.move_to_first();
        assert_eq!(cursor.prefix(), "xsi");
        assert_eq!(cursor.local_name(), "type");
        assert_eq!(cursor.namespace_uri(), "urn:xsi");
        assert_eq!(cursor.value(), "int");
        assert!(!cursor.is_empty_element());
    }

    #[test]
    fn test_shared_buffer_independent_cursors() {
        let entries = buffer_with_attributes();
        let mut one = XmlTokenCursor::new(&entries);
        let mut two = XmlTokenCursor::new(&entries);
        one.move_to_first();
        two.move_to_first();
        one.move_to_next();
        assert_eq!(one.position(), 1);
        assert_eq!(two.position(), 0);
    }
}
