//! Depth-tracked replay of a captured token buffer into a writer sink.
//!
//! The [`XmlTokenReplayer`] walks a token buffer front to back exactly once
//! per [`write_to`](XmlTokenReplayer::write_to) call, emitting one writer
//! call per replayable entry, and can suppress a single configured subtree
//! along the way.
//!
//! The motivating scenario is enveloped XML digital signatures: the
//! signature element must not sign its own value, so verification replays
//! the captured document with the `Signature` subtree excluded.
//!
//! # Examples
//!
//! ```
//! use xmlreplay::replay::{ExcludedElement, XmlTokenReplayer};
//! use xmlreplay::token::XmlTokenEntry;
//! use xmlreplay::writer::XmlTextWriter;
//!
//! let buffer = vec![
//!     XmlTokenEntry::element("", "root", ""),
//!     XmlTokenEntry::empty_element("", "body", ""),
//!     XmlTokenEntry::end_element(),
//! ];
//!
//! let excluded = ExcludedElement::new("body", "");
//! let mut replayer = XmlTokenReplayer::with_exclusion(&buffer, excluded);
//! let mut writer = XmlTextWriter::new();
//! replayer.write_to(Some(&mut writer)).unwrap();
//! assert_eq!(writer.into_string(), "<root/>");
//! ```

use crate::cursor::XmlTokenCursor;
use crate::error::ReplayError;
use crate::token::{XmlNodeType, XmlTokenEntry};
use crate::writer::XmlTokenWriter;

/// Identifies the single element subtree to suppress during replay.
///
/// An element matches when its local name and namespace URI both equal the
/// target's, and, if a parent depth is pinned, its parent sits at exactly
/// that depth (the root element's parent is at depth 0). A target that
/// matches nothing in the buffer is not an error; the whole buffer is
/// replayed.
///
/// # Examples
///
/// ```
/// use xmlreplay::replay::ExcludedElement;
///
/// let anywhere = ExcludedElement::new("Signature", "http://www.w3.org/2000/09/xmldsig#");
/// let top_level_only = ExcludedElement::new("Signature", "http://www.w3.org/2000/09/xmldsig#")
///     .parent_depth(1);
/// assert_eq!(anywhere.local_name(), top_level_only.local_name());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedElement {
    local_name: String,
    namespace_uri: String,
    parent_depth: Option<u32>,
}

impl ExcludedElement {
    /// Creates a target matching `local_name` in `namespace_uri` at any depth.
    #[must_use]
    pub fn new(local_name: &str, namespace_uri: &str) -> Self {
        Self {
            local_name: local_name.to_string(),
            namespace_uri: namespace_uri.to_string(),
            parent_depth: None,
        }
    }

    /// Restricts matching to elements whose parent sits at exactly `depth`.
    #[must_use]
    pub fn parent_depth(mut self, depth: u32) -> Self {
        self.parent_depth = Some(depth);
        self
    }

    /// Returns the target's local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the target's namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }
}

/// The exclusion state machine for one pass.
///
/// Either every entry is being emitted, or an exclusion region is active
/// and remembers the depth of its root element. Because a new region can
/// only start from `Including`, regions can never nest or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplayState {
    /// Entries are being emitted.
    Including,
    /// Entries are being suppressed until the element at `root_depth` closes.
    Excluding {
        /// The depth at which the active exclusion region began.
        root_depth: u32,
    },
}

impl ReplayState {
    fn is_including(self) -> bool {
        matches!(self, Self::Including)
    }
}

/// Replays a captured token buffer into an [`XmlTokenWriter`].
///
/// A replayer borrows its buffer immutably, so any number of replayers may
/// share one buffer; each keeps its own traversal state. A single pass is
/// synchronous and runs to completion, and a fresh pass starts from the
/// beginning, so the same replayer may be driven repeatedly.
///
/// # Examples
///
/// ```
/// use xmlreplay::replay::XmlTokenReplayer;
/// use xmlreplay::token::XmlTokenEntry;
/// use xmlreplay::writer::XmlTextWriter;
///
/// let buffer = vec![
///     XmlTokenEntry::element("", "doc", ""),
///     XmlTokenEntry::text("hello"),
///     XmlTokenEntry::end_element(),
/// ];
/// let mut replayer = XmlTokenReplayer::new(&buffer);
/// let mut writer = XmlTextWriter::new();
/// replayer.write_to(Some(&mut writer)).unwrap();
/// assert_eq!(writer.into_string(), "<doc>hello</doc>");
/// ```
#[derive(Debug)]
pub struct XmlTokenReplayer<'a> {
    cursor: XmlTokenCursor<'a>,
    excluded: Option<ExcludedElement>,
}

impl<'a> XmlTokenReplayer<'a> {
    /// Creates a replayer that emits every replayable entry of `entries`.
    #[must_use]
    pub fn new(entries: &'a [XmlTokenEntry]) -> Self {
        Self {
            cursor: XmlTokenCursor::new(entries),
            excluded: None,
        }
    }

    /// Creates a replayer that suppresses the subtree matching `excluded`.
    #[must_use]
    pub fn with_exclusion(entries: &'a [XmlTokenEntry], excluded: ExcludedElement) -> Self {
        Self {
            cursor: XmlTokenCursor::new(entries),
            excluded: Some(excluded),
        }
    }

    /// Returns the configured exclusion target, if any.
    #[must_use]
    pub fn excluded_element(&self) -> Option<&ExcludedElement> {
        self.excluded.as_ref()
    }

    /// Replays the buffer into `writer` in one forward pass.
    ///
    /// Each entry produces at most one writer call: start tags, attributes,
    /// end tags, text, CDATA, comments, and whitespace map onto the
    /// corresponding [`XmlTokenWriter`] capabilities, while XML declaration
    /// and DOCTYPE entries are dropped. While the exclusion region is
    /// active, nothing is emitted, including the region root's own start
    /// tag and attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::MissingWriter`] if `writer` is `None`, and
    /// [`ReplayError::EmptyTokenStream`] if the buffer has no entries. Both
    /// are checked before the first writer call, so a failed replay emits
    /// nothing.
    pub fn write_to(&mut self, writer: Option<&mut dyn XmlTokenWriter>) -> Result<(), ReplayError> {
        let Some(writer) = writer else {
            tracing::error!("replay invoked without a writer");
            return Err(ReplayError::MissingWriter);
        };

        if !self.cursor.move_to_first() {
            tracing::error!("replay invoked over an empty token buffer");
            return Err(ReplayError::EmptyTokenStream);
        }

        let mut depth: u32 = 0;
        let mut state = ReplayState::Including;

        loop {
            match self.cursor.node_type() {
                XmlNodeType::Element => {
                    let is_empty = self.cursor.is_empty_element();
                    depth += 1;

                    if state.is_including() && self.matches_excluded(depth) {
                        tracing::debug!(
                            local_name = self.cursor.local_name(),
                            namespace_uri = self.cursor.namespace_uri(),
                            depth,
                            "exclusion region opened"
                        );
                        state = ReplayState::Excluding { root_depth: depth };
                    }

                    // The region root's own start tag is suppressed too.
                    if state.is_including() {
                        writer.write_start_element(
                            self.cursor.prefix(),
                            self.cursor.local_name(),
                            self.cursor.namespace_uri(),
                        );
                    }

                    if self.cursor.move_to_first_attribute() {
                        loop {
                            if state.is_including() {
                                writer.write_attribute_string(
                                    self.cursor.prefix(),
                                    self.cursor.local_name(),
                                    self.cursor.namespace_uri(),
                                    self.cursor.value(),
                                );
                            }
                            if !self.cursor.move_to_next_attribute() {
                                break;
                            }
                        }
                    }

                    // A self-closing element ends at the same depth without
                    // a separate EndElement entry.
                    if is_empty {
                        state = close_element(state, &mut depth, writer);
                    }
                }
                XmlNodeType::EndElement => {
                    state = close_element(state, &mut depth, writer);
                }
                XmlNodeType::CData => {
                    if state.is_including() {
                        writer.write_cdata(self.cursor.value());
                    }
                }
                XmlNodeType::Comment => {
                    if state.is_including() {
                        writer.write_comment(self.cursor.value());
                    }
                }
                XmlNodeType::Text => {
                    if state.is_including() {
                        writer.write_string(self.cursor.value());
                    }
                }
                XmlNodeType::Whitespace | XmlNodeType::SignificantWhitespace => {
                    if state.is_including() {
                        writer.write_whitespace(self.cursor.value());
                    }
                }
                // Dropped on replay, exclusion state notwithstanding.
                XmlNodeType::DocumentType | XmlNodeType::XmlDeclaration => {}
                // Attribute runs are consumed by the Element arm above; a
                // stray attribute entry has no owning element to attach to.
                XmlNodeType::Attribute => {}
            }

            if !self.cursor.move_to_next() {
                break;
            }
        }

        Ok(())
    }

    /// Whether the current element entry matches the exclusion target.
    ///
    /// `depth` is the element's own depth (already incremented); a pinned
    /// parent depth must equal `depth - 1`.
    fn matches_excluded(&self, depth: u32) -> bool {
        let Some(excluded) = &self.excluded else {
            return false;
        };
        (excluded.parent_depth.is_none() || excluded.parent_depth == Some(depth - 1))
            && self.cursor.local_name() == excluded.local_name
            && self.cursor.namespace_uri() == excluded.namespace_uri
    }
}

/// Shared close handling for `EndElement` entries and self-closing elements.
///
/// Emits the end tag while including; closes the exclusion region when the
/// region root's depth is reached. The depth decrement is unconditional.
fn close_element(
    state: ReplayState,
    depth: &mut u32,
    writer: &mut dyn XmlTokenWriter,
) -> ReplayState {
    let next = match state {
        ReplayState::Including => {
            writer.write_end_element();
            ReplayState::Including
        }
        ReplayState::Excluding { root_depth } if root_depth == *depth => {
            tracing::debug!(depth = *depth, "exclusion region closed");
            ReplayState::Including
        }
        excluding => excluding,
    };
    *depth = depth.saturating_sub(1);
    next
}
