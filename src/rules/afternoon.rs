use crate::domain::Receipt;
use crate::rules::traits::ScoringRule;
use crate::validate;

/// 10 points if the purchase time falls in the 14:00-15:59 window.
#[derive(Debug, Default)]
pub struct AfternoonRule;

impl ScoringRule for AfternoonRule {
    fn id(&self) -> &str {
        "R7_AFTERNOON"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        if validate::is_afternoon(&receipt.purchase_time) {
            10
        } else {
            0
        }
    }
}
