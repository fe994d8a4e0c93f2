use crate::domain::Receipt;
use crate::rules::traits::ScoringRule;
use crate::validate;

/// 6 points if the day of the purchase date is odd.
#[derive(Debug, Default)]
pub struct OddDayRule;

impl ScoringRule for OddDayRule {
    fn id(&self) -> &str {
        "R6_ODD_DAY"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        if validate::is_odd_day(&receipt.purchase_date) {
            6
        } else {
            0
        }
    }
}
