//! Wayfinder — personalized GenAI learning-roadmap generation.
//!
//! A linear prompt-orchestration pipeline over the Gemini API: extract a
//! structured user profile from free text, classify a persona, plan a
//! multi-level curriculum (topics → structure → activities), and render the
//! result as a text table and optionally a PDF. Stage failures degrade to empty
//! defaults and are reported alongside the result; a run never aborts.

pub mod config;
pub mod errors;
pub mod ingest;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod render;
