//! Middle of the call chain: decides what the caller gets to see.

use anyhow::{Context, anyhow};
use tracing::error;

use crate::error::{WrapSite, chain_message};
use crate::query::{Param, query};

/// Context attached by [`Propagation::WrapWithContext`].
pub const WRAP_CONTEXT: &str = "クエリーでエラーが発生";

/// Message of the error returned by the replacing policies.
pub const REPLACEMENT_MESSAGE: &str = "サービスでエラーが発生";

/// How `service` propagates a failure from `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Return the failure unchanged.
    PassThrough,
    /// Attach [`WRAP_CONTEXT`], keeping the original as the cause.
    ///
    /// The context is a [`WrapSite`] recording this call site and a stack trace.
    WrapWithContext,
    /// Drop the failure and return a new one.
    Replace,
    /// Log the failure here, then drop it and return a new one.
    ///
    /// The caller logging the replacement produces a second record for
    /// the same failure.
    LogAndReplace,
}

impl Propagation {
    /// Whether the original failure can still be recovered by the caller.
    pub fn preserves_cause(self) -> bool {
        matches!(self, Self::PassThrough | Self::WrapWithContext)
    }
}

/// Run `query` and propagate its failure according to `policy`.
pub fn service(param: Option<Param>, policy: Propagation) -> anyhow::Result<()> {
    let Err(err) = query(param) else {
        return Ok(());
    };

    match policy {
        Propagation::PassThrough => Err(err),
        Propagation::WrapWithContext => Err(err).context(WrapSite::here(WRAP_CONTEXT)),
        Propagation::Replace => Err(anyhow!("{REPLACEMENT_MESSAGE}")),
        Propagation::LogAndReplace => {
            let cause = chain_message(&err);
            error!(cause = %cause, "サービスでエラーが発生しました");
            Err(anyhow!("{REPLACEMENT_MESSAGE}"))
        }
    }
}
