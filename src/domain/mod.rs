pub mod receipt;

pub use receipt::{Item, Receipt};
