use crate::domain::Receipt;
use crate::rules::traits::ScoringRule;

/// One point for every ASCII letter or digit in the retailer name.
///
/// Non-ASCII letters are excluded; punctuation and whitespace never count.
#[derive(Debug, Default)]
pub struct RetailerAlnumRule;

impl ScoringRule for RetailerAlnumRule {
    fn id(&self) -> &str {
        "R1_RETAILER_ALNUM"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        receipt
            .retailer
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .count() as u64
    }
}
