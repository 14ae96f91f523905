//! `agrostock-auth` — user records and roles.
//!
//! Users are inert records: nothing in the inventory is gated by role, and no
//! credentials are stored here.

pub mod roles;
pub mod user;

pub use roles::{AccessLevel, DEFAULT_TILL, Role};
pub use user::{User, UserId};
