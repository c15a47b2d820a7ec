//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod compare;
pub mod health;
pub mod recommend;
pub mod score_rank;
pub mod search;
pub mod stats;
pub mod universities;

pub use auth::{login_handler, verify_handler};
pub use catalog::{locations_handler, years_handler};
pub use chat::chat_handler;
pub use compare::compare_handler;
pub use health::health_handler;
pub use recommend::recommend_handler;
pub use score_rank::score_rank_handler;
pub use search::{export_handler, search_handler};
pub use stats::stats_handler;
pub use universities::{
    university_detail_handler, university_list_handler, university_search_handler,
};
