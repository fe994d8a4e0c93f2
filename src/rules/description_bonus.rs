use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::Receipt;
use crate::rules::traits::ScoringRule;

/// Per-item bonus: if the trimmed description length is a multiple of 3,
/// award ceil(price * 0.2) points for that item.
///
/// Rounding is always toward positive infinity. An item whose price does not
/// parse contributes nothing; the remaining items are still scored.
#[derive(Debug, Default)]
pub struct DescriptionBonusRule;

impl ScoringRule for DescriptionBonusRule {
    fn id(&self) -> &str {
        "R5_DESCRIPTION_BONUS"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        let mut points = 0;
        for item in &receipt.items {
            if item.short_description.trim().len() % 3 != 0 {
                continue;
            }
            let Ok(price) = Decimal::from_str(&item.price) else {
                continue;
            };
            let bonus = (price * Decimal::new(2, 1)).ceil();
            points += bonus.to_u64().unwrap_or(0);
        }
        points
    }
}
