//! Top of the call chain: logs every failure and inspects it.

use std::io::{self, Write};

use tracing::error;

use crate::error::{QueryError, as_query_error, chain_message, is_sentinel, wrap_site};
use crate::service::service;
use crate::variant::Variant;

/// What one handler run observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Chain rendering of each failure received, in call order.
    pub failures: Vec<String>,
    /// The first failure matched the sentinel.
    pub sentinel_matched: bool,
    /// Structured failure recovered from the second failure.
    pub recovered: Option<QueryError>,
}

/// Run `variant`'s call chain, logging each failure.
///
/// Wrapped failures also carry `location` and `stacktrace` fields naming
/// where the wrap happened. Diagnostic lines from the inspection checks go
/// to `out` as plain text.
pub fn handle<W: Write>(variant: Variant, out: &mut W) -> io::Result<Outcome> {
    let mut outcome = Outcome::default();

    for (index, &param) in variant.selectors().iter().enumerate() {
        let Err(err) = service(param, variant.policy()) else {
            continue;
        };

        let cause = chain_message(&err);
        if let Some(site) = wrap_site(&err) {
            error!(
                cause = %cause,
                location = %site.location(),
                stacktrace = %site.backtrace(),
                "{} エラーが発生しました",
                index + 1
            );
        } else {
            error!(cause = %cause, "{} エラーが発生しました", index + 1);
        }
        outcome.failures.push(cause);

        if !variant.inspects() {
            continue;
        }

        match index {
            0 if is_sentinel(&err) => {
                outcome.sentinel_matched = true;
                writeln!(out, "error is SentinelError: {err:#}")?;
            }
            1 => {
                if let Some(query_error) = as_query_error(&err) {
                    writeln!(out, "unwrap error: {query_error:?}")?;
                    outcome.recovered = Some(query_error.clone());
                }
            }
            _ => {}
        }
    }

    Ok(outcome)
}
