//! Error types for token buffer replay.
//!
//! Only two conditions are errors, and both are precondition failures
//! detected before any writer call is made. Everything else, in
//! particular an exclusion target that cannot match anything in the
//! buffer, degrades to "no exclusion applied" rather than failing,
//! preferring complete output over a crash.

use thiserror::Error;

/// Errors returned by [`XmlTokenReplayer::write_to`].
///
/// [`XmlTokenReplayer::write_to`]: crate::replay::XmlTokenReplayer::write_to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// No writer sink was supplied for replay (argument error).
    #[error("no writer was supplied for replay")]
    MissingWriter,

    /// Replay was attempted over an empty token buffer (invalid state).
    #[error("the token buffer is empty")]
    EmptyTokenStream,
}
