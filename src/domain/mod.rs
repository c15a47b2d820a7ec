//! Domain layer containing business entities and logic.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository and provider traits define the contracts implemented by
//! the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Admission records, university views, chat messages
//! - [`criteria`] - Query contract for the record store
//! - [`repositories`] - Data access trait definitions
//! - [`score_rank`] - Nearest-value score/rank resolution
//! - [`recommendation`] - Reach / match / safety tier policy
//! - [`chat_provider`] - Chat-completion port

pub mod chat_provider;
pub mod criteria;
pub mod entities;
pub mod recommendation;
pub mod repositories;
pub mod score_rank;
