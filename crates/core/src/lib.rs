//! `agrostock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod validate;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductCode, SupplierId};
pub use value_object::ValueObject;
