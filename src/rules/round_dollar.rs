use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::Receipt;
use crate::rules::traits::ScoringRule;

/// 50 points if the total is a round dollar amount with no cents.
///
/// Fail-soft: a total that does not parse as a decimal awards nothing.
#[derive(Debug, Default)]
pub struct RoundDollarRule;

impl ScoringRule for RoundDollarRule {
    fn id(&self) -> &str {
        "R2_ROUND_DOLLAR"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        match Decimal::from_str(&receipt.total) {
            Ok(total) if total.fract().is_zero() => 50,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::receipt::test_receipt;

    #[test]
    fn test_round_dollar() {
        let rule = RoundDollarRule;

        assert_eq!(rule.points(&test_receipt("T", "9.00", 1)), 50);
        assert_eq!(rule.points(&test_receipt("T", "100.00", 1)), 50);
    }

    #[test]
    fn test_with_cents() {
        let rule = RoundDollarRule;

        assert_eq!(rule.points(&test_receipt("T", "35.35", 1)), 0);
        assert_eq!(rule.points(&test_receipt("T", "0.01", 1)), 0);
    }

    #[test]
    fn test_unparseable_total_awards_nothing() {
        let rule = RoundDollarRule;

        assert_eq!(rule.points(&test_receipt("T", "abc", 1)), 0);
        assert_eq!(rule.points(&test_receipt("T", "", 1)), 0);
    }
}
