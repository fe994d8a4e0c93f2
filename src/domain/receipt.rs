use serde::{Deserialize, Serialize};

/// A single line item on a receipt.
///
/// Prices travel as strings (e.g. "6.49") so that malformed values can be
/// absorbed by the scoring rules instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description, e.g. "Mountain Dew 12PK"
    pub short_description: String,

    /// Item price as printed, two fractional digits expected
    pub price: String,
}

/// A purchase receipt as submitted for scoring.
///
/// Immutable once accepted by the store; the score is computed exactly once
/// at insertion and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name
    pub retailer: String,

    /// Purchase date, expected pattern YYYY-MM-DD
    pub purchase_date: String,

    /// Purchase time, expected pattern HH:MM (24-hour)
    pub purchase_time: String,

    /// Line items, at least one required at the boundary
    pub items: Vec<Item>,

    /// Receipt total, must match `^\d+\.\d{2}$` to be accepted
    pub total: String,
}

/// Receipt with neutral date/time/items so a single field can be varied.
#[cfg(test)]
pub fn test_receipt(retailer: &str, total: &str, item_count: usize) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "13:01".to_string(),
        items: (0..item_count)
            .map(|_| Item {
                short_description: "Gatorade".to_string(),
                price: "2.25".to_string(),
            })
            .collect(),
        total: total.to_string(),
    }
}

/// The worked Target example: scores exactly 28 points.
#[cfg(test)]
pub fn target_receipt() -> Receipt {
    let items = [
        ("Mountain Dew 12PK", "6.49"),
        ("Emils Cheese Pizza", "12.25"),
        ("Knorr Creamy Chicken", "1.26"),
        ("Doritos Nacho Cheese", "3.35"),
        ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
    ];

    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: items
            .iter()
            .map(|(desc, price)| Item {
                short_description: desc.to_string(),
                price: price.to_string(),
            })
            .collect(),
        total: "35.35".to_string(),
    }
}
