//! # xmlreplay
//!
//! Replays a previously captured, immutable sequence of XML nodes (a token
//! buffer) into an XML-writing sink, with the ability to suppress exactly
//! one subtree during replay.
//!
//! The motivating use case is XML digital-signature processing: verifying
//! or reconstructing a canonical document representation while excluding
//! the signature element itself, because an enveloped signature must not
//! sign its own value.
//!
//! ## Quick Start
//!
//! ```
//! use xmlreplay::{ExcludedElement, XmlTextWriter, XmlTokenEntry, XmlTokenReplayer};
//!
//! // <doc><Signature>...</Signature><body>payload</body></doc>
//! let buffer = vec![
//!     XmlTokenEntry::element("", "doc", ""),
//!     XmlTokenEntry::element("ds", "Signature", "http://www.w3.org/2000/09/xmldsig#"),
//!     XmlTokenEntry::text("..."),
//!     XmlTokenEntry::end_element(),
//!     XmlTokenEntry::element("", "body", ""),
//!     XmlTokenEntry::text("payload"),
//!     XmlTokenEntry::end_element(),
//!     XmlTokenEntry::end_element(),
//! ];
//!
//! let excluded = ExcludedElement::new("Signature", "http://www.w3.org/2000/09/xmldsig#");
//! let mut replayer = XmlTokenReplayer::with_exclusion(&buffer, excluded);
//! let mut writer = XmlTextWriter::new();
//! replayer.write_to(Some(&mut writer)).unwrap();
//!
//! assert_eq!(writer.into_string(), "<doc><body>payload</body></doc>");
//! ```

pub mod cursor;
pub mod error;
pub mod replay;
pub mod token;
pub mod writer;

// Re-export primary types at the crate root for convenience.
pub use error::ReplayError;
pub use replay::{ExcludedElement, XmlTokenReplayer};
pub use token::{XmlNodeType, XmlTokenEntry};
pub use writer::{XmlTextWriter, XmlTokenWriter};
