//! External nutrition lookup module
//!
//! Provider trait plus the USDA FoodData Central implementation.

pub mod fdc;
pub mod provider;

pub use fdc::FdcClient;
pub use provider::{LookupError, NutritionProvider, ProviderHit};
