//! Error taxonomy for the call chain.
//!
//! Three shapes of failure leave [`query`](crate::query::query):
//! - [`SentinelError`]: one well-known value, matched by identity against [`SENTINEL`].
//! - [`QueryError`]: a structured payload, matched by type after unwrapping context.
//! - ad-hoc formatted errors built with [`anyhow::anyhow!`], matched by text only.
//!
//! Wrapping attaches a [`WrapSite`] as the context, so the call site and a
//! stack trace travel with the error alongside the message.

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

use thiserror::Error;

// ============================================================================
// Sentinel
// ============================================================================

/// Shared failure value returned by `query` for selector 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("query function error")]
pub struct SentinelError;

/// The well-known sentinel instance callers compare against.
pub const SENTINEL: SentinelError = SentinelError;

/// Returns `true` if `err`, or any context layer wrapped around it, is [`SENTINEL`].
///
/// Replacement destroys identity: an error rebuilt from the sentinel's
/// message does not match.
pub fn is_sentinel(err: &anyhow::Error) -> bool {
    err.downcast_ref::<SentinelError>() == Some(&SENTINEL)
}

// ============================================================================
// Structured failure
// ============================================================================

/// Structured failure returned by `query` for selector 2.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Recover a [`QueryError`] from beneath any context layers.
pub fn as_query_error(err: &anyhow::Error) -> Option<&QueryError> {
    err.downcast_ref::<QueryError>()
}

// ============================================================================
// Wrap site
// ============================================================================

/// Context recorded where an error was wrapped.
///
/// Displays as its message only, so the rendered chain is unchanged.
#[derive(Debug)]
pub struct WrapSite {
    message: &'static str,
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl WrapSite {
    /// Record the caller's location and a stack trace.
    ///
    /// The trace is captured regardless of `RUST_BACKTRACE`.
    #[track_caller]
    pub fn here(message: &'static str) -> Self {
        Self {
            message,
            location: Location::caller(),
            backtrace: Backtrace::force_capture(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for WrapSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// The site where `err` was wrapped, if it was.
pub fn wrap_site(err: &anyhow::Error) -> Option<&WrapSite> {
    err.downcast_ref::<WrapSite>()
}

/// Render the whole chain on one line, outermost context first.
///
/// `"クエリーでエラーが発生: query function error"` for a wrapped sentinel.
pub fn chain_message(err: &anyhow::Error) -> String {
    format!("{err:#}")
}
