//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization, `serde_with` for lenient
//! query-string and one-or-many fields, and validator for input validation.

pub mod auth;
pub mod chat;
pub mod compare;
pub mod health;
pub mod pagination;
pub mod recommend;
pub mod score_rank;
pub mod search;
pub mod stats;
pub mod university;
