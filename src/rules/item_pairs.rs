use crate::domain::Receipt;
use crate::rules::traits::ScoringRule;

/// 5 points for every two items on the receipt; an odd item is ignored.
#[derive(Debug, Default)]
pub struct ItemPairsRule;

impl ScoringRule for ItemPairsRule {
    fn id(&self) -> &str {
        "R4_ITEM_PAIRS"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        (receipt.items.len() as u64 / 2) * 5
    }
}
