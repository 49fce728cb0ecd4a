//! Hint types and values.
//!
//! - [`kind`] - The closed set of hint types and their canonical names
//! - [`value`] - [`Hint`] and [`KeyValue`] values with canonical rendering

pub mod kind;
pub mod value;

pub use kind::HintType;
pub use value::{Hint, KeyValue};
