//! income-domain
//!
//! Pure domain models for a financial statement (Income, Job, Asset, Expense, SimpleValue).
//! No I/O, no CLI, no storage. Only data types, period arithmetic and filters.

pub mod asset;
pub mod attribute;
pub mod common;
pub mod error;
pub mod expense;
pub mod income;
pub mod job;
pub mod period;
pub mod value;

pub use asset::*;
pub use attribute::*;
pub use common::*;
pub use error::DomainError;
pub use expense::*;
pub use income::*;
pub use job::*;
pub use value::*;

// Re-export so consumers can rely on this crate as a façade.
pub use rust_decimal;
pub use uuid;
