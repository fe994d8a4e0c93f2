pub mod afternoon;
pub mod description_bonus;
pub mod item_pairs;
pub mod odd_day;
pub mod quarter_total;
pub mod retailer_alnum;
pub mod round_dollar;
pub mod traits;

pub use afternoon::AfternoonRule;
pub use description_bonus::DescriptionBonusRule;
pub use item_pairs::ItemPairsRule;
pub use odd_day::OddDayRule;
pub use quarter_total::QuarterTotalRule;
pub use retailer_alnum::RetailerAlnumRule;
pub use round_dollar::RoundDollarRule;
pub use traits::ScoringRule;

use crate::domain::Receipt;
use std::sync::Arc;

/// Collection of scoring rules evaluated against every receipt.
pub struct RuleSet {
    pub rules: Vec<Arc<dyn ScoringRule>>,
}

impl RuleSet {
    /// The fixed production rule set, R1 through R7.
    pub fn standard() -> Self {
        RuleSet {
            rules: vec![
                Arc::new(RetailerAlnumRule),
                Arc::new(RoundDollarRule),
                Arc::new(QuarterTotalRule),
                Arc::new(ItemPairsRule),
                Arc::new(DescriptionBonusRule),
                Arc::new(OddDayRule),
                Arc::new(AfternoonRule),
            ],
        }
    }

    /// Total score for a receipt: the plain sum of every rule's contribution.
    ///
    /// Rules are independent and non-exclusive, so overlapping triggers each
    /// award their points. Deterministic and non-negative by construction.
    pub fn total_points(&self, receipt: &Receipt) -> u64 {
        self.rules.iter().map(|rule| rule.points(receipt)).sum()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::standard()
    }
}
