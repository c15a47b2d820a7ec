//! Infrastructure layer: PostgreSQL repositories, the LLM client and CSV
//! import.

pub mod csv_import;
pub mod llm;
pub mod persistence;
