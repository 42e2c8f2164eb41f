pub mod marketplace;
pub mod price;
pub mod product;

pub use marketplace::*;
pub use price::*;
pub use product::*;

pub const CURRENCY_INR: &str = "INR";
