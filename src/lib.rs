pub mod api;
pub mod config;
pub mod domain;
pub mod observability;
pub mod rules;
pub mod store;
pub mod validate;

pub use config::Config;
pub use domain::{Item, Receipt};
pub use rules::{RuleSet, ScoringRule};
pub use store::{ReceiptStore, StoreError};
