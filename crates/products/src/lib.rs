//! Products domain module.
//!
//! This crate contains business rules for stocked products (quantities, pricing,
//! low-stock detection), implemented purely as deterministic domain logic
//! (no IO, no storage).

pub mod product;

pub use product::{DEFAULT_REORDER_THRESHOLD, Product, ProductRecord};
