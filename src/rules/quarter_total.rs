use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::Receipt;
use crate::rules::traits::ScoringRule;

/// 25 points if the total is a multiple of 0.25.
///
/// The total is scaled to integer cents (truncating) before the divisibility
/// check. Independent of the round-dollar rule: a whole-dollar total earns
/// both awards.
#[derive(Debug, Default)]
pub struct QuarterTotalRule;

impl ScoringRule for QuarterTotalRule {
    fn id(&self) -> &str {
        "R3_QUARTER_TOTAL"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        let Ok(total) = Decimal::from_str(&receipt.total) else {
            return 0;
        };
        let cents = (total * Decimal::ONE_HUNDRED).trunc();
        match cents.to_i64() {
            Some(cents) if cents % 25 == 0 => 25,
            _ => 0,
        }
    }
}
