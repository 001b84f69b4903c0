//! Unit conversion module
//!
//! Canonical unit metadata, base-unit conversion, and quantity
//! combination.

pub mod converter;
pub mod descriptors;

pub use converter::{combine, to_base_unit, CombinedQuantity, ConvertedQuantity, UnitError};
pub use descriptors::{find_unit, is_generic_count_unit, Dimension, UnitDescriptor, UNIT_TABLE};
