use serde::{Deserialize, Serialize};

use crate::domain::{Item, Receipt};

/// Body of a receipt-processing request.
///
/// Structural validation (required fields present and non-empty, at least
/// one item) happens here at the boundary. Anything past this point is
/// handled leniently by the scoring rules.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    #[serde(default)]
    pub retailer: String,

    #[serde(default)]
    pub purchase_date: String,

    #[serde(default)]
    pub purchase_time: String,

    #[serde(default)]
    pub items: Vec<ItemRequest>,

    #[serde(default)]
    pub total: String,
}

/// Item portion of the request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub price: String,
}

impl ProcessReceiptRequest {
    /// Validate the payload shape and convert it into a domain Receipt.
    pub fn into_receipt(self) -> Result<Receipt, &'static str> {
        if self.retailer.is_empty() {
            return Err("retailer is required");
        }
        if self.purchase_date.is_empty() {
            return Err("purchaseDate is required");
        }
        if self.purchase_time.is_empty() {
            return Err("purchaseTime is required");
        }
        if self.items.is_empty() {
            return Err("items must contain at least one item");
        }
        if self.total.is_empty() {
            return Err("total is required");
        }
        for item in &self.items {
            if item.short_description.is_empty() {
                return Err("shortDescription is required for every item");
            }
            if item.price.is_empty() {
                return Err("price is required for every item");
            }
        }

        Ok(Receipt {
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            items: self
                .items
                .into_iter()
                .map(|item| Item {
                    short_description: item.short_description,
                    price: item.price,
                })
                .collect(),
            total: self.total,
        })
    }
}
