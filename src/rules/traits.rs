use crate::domain::Receipt;
use std::fmt::Debug;

/// Trait for independent scoring rules.
///
/// Every rule is evaluated against every receipt; rules never exclude one
/// another, even when their trigger conditions overlap. A rule that cannot
/// parse the field it inspects contributes zero points rather than failing
/// the computation.
pub trait ScoringRule: Send + Sync + Debug {
    /// Unique identifier for this rule.
    fn id(&self) -> &str;

    /// Points contributed by this rule for the given receipt.
    fn points(&self, receipt: &Receipt) -> u64;
}
