//! Bottom of the call chain: produces the failure.

use std::fmt;

use anyhow::anyhow;

use crate::error::{QueryError, SENTINEL};

/// Message carried by the structured failure.
pub const QUERY_ERROR_MESSAGE: &str = "クエリーでエラーが発生";

/// Message of the ad-hoc failure returned when no selector is given.
pub const ADHOC_MESSAGE: &str = "クエリーの実行に失敗しました";

/// Selector choosing which failure `query` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param(pub i64);

impl Param {
    pub const SENTINEL: Param = Param(1);
    pub const STRUCTURED: Param = Param(2);
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Run the query.
///
/// - `Some(1)`: the shared [`SENTINEL`].
/// - `Some(2)`: a [`QueryError`] carrying [`QUERY_ERROR_MESSAGE`].
/// - `None`: a freshly formatted error with no type identity.
///
/// # Panics
///
/// Any other selector aborts; it is not a recoverable failure.
pub fn query(param: Option<Param>) -> anyhow::Result<()> {
    match param {
        None => Err(anyhow!("{ADHOC_MESSAGE}")),
        Some(Param::SENTINEL) => Err(SENTINEL.into()),
        Some(Param::STRUCTURED) => Err(QueryError::new(QUERY_ERROR_MESSAGE).into()),
        Some(other) => panic!("unexpected selector: {other}"),
    }
}
