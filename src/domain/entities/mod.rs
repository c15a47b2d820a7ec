//! Core domain entities.
//!
//! - [`AdmissionRecord`] - One historical admission row
//! - [`ScoreRankPair`] / [`ScoreRankMapping`] - Resolver input and output
//! - [`UniversityDetail`] and friends - University page views
//! - [`ChatMessage`] / [`StudentContext`] - Advisor conversation types

pub mod admission;
pub mod chat;
pub mod university;

pub use admission::{AdmissionRecord, NewAdmissionRecord, ScoreRankMapping, ScoreRankPair};
pub use chat::{ChatMessage, ChatPrompt, ChatRole, StudentContext};
pub use university::{
    MajorRanking, ScoreTrend, UniversityAdmission, UniversityDetail, UniversityMajor,
    UniversityProfile, UniversityStats, UniversitySummary,
};
