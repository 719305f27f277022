//! The six example programs, each one call chain setup.

use crate::query::Param;
use crate::service::Propagation;

/// A fixed handler -> service -> query setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Wraps the sentinel and the structured failure, then inspects both.
    Inspect,
    /// Same calls and checks as [`Variant::Inspect`], but `service` replaces.
    InspectReplaced,
    /// Ad-hoc failure returned unchanged.
    PassThrough,
    /// Ad-hoc failure wrapped with context.
    Wrap,
    /// Ad-hoc failure replaced by a new error.
    Replace,
    /// Ad-hoc failure logged in `service`, then replaced.
    LogAndReplace,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Inspect,
        Variant::InspectReplaced,
        Variant::PassThrough,
        Variant::Wrap,
        Variant::Replace,
        Variant::LogAndReplace,
    ];

    /// Selectors passed to `service`, one call each.
    pub fn selectors(self) -> &'static [Option<Param>] {
        match self {
            Self::Inspect | Self::InspectReplaced => {
                &[Some(Param::SENTINEL), Some(Param::STRUCTURED)]
            }
            Self::PassThrough | Self::Wrap | Self::Replace | Self::LogAndReplace => &[None],
        }
    }

    pub fn policy(self) -> Propagation {
        match self {
            Self::Inspect | Self::Wrap => Propagation::WrapWithContext,
            Self::InspectReplaced | Self::Replace => Propagation::Replace,
            Self::PassThrough => Propagation::PassThrough,
            Self::LogAndReplace => Propagation::LogAndReplace,
        }
    }

    /// Whether the handler runs the sentinel and structured-failure checks.
    pub fn inspects(self) -> bool {
        matches!(self, Self::Inspect | Self::InspectReplaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspecting_variants_call_twice() {
        for variant in Variant::ALL {
            let expected = if variant.inspects() { 2 } else { 1 };
            assert_eq!(variant.selectors().len(), expected, "{variant:?}");
        }
    }

    #[test]
    fn every_policy_is_covered() {
        for policy in [
            Propagation::PassThrough,
            Propagation::WrapWithContext,
            Propagation::Replace,
            Propagation::LogAndReplace,
        ] {
            assert!(Variant::ALL.iter().any(|v| v.policy() == policy), "{policy:?}");
        }
    }
}
