//! Pipeline error types.
//!
//! Stages never panic and never abort the run. A stage returns `Result<T, StageError>`;
//! the orchestrator logs the failure, records a `StageFailure` (carrying the raw model
//! output so callers can distinguish "the user has no goals" from "extraction failed"),
//! and substitutes the stage's empty default.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::llm::LlmError;

/// Identifies one prompt/generate/decode unit in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ProfileExtraction,
    PersonaClassification,
    TopicDiscovery,
    StructurePlanning,
    ActivityPlanning,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::ProfileExtraction => "profile extraction",
            Stage::PersonaClassification => "persona classification",
            Stage::TopicDiscovery => "topic discovery",
            Stage::StructurePlanning => "structure planning",
            Stage::ActivityPlanning => "activity planning",
        };
        f.write_str(label)
    }
}

/// A single stage failure.
///
/// `Parse` keeps the raw model output alongside the decode error so the offending
/// text is never lost when the orchestrator degrades to a default.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("{stage} model call failed: {source}")]
    Model {
        stage: Stage,
        #[source]
        source: LlmError,
    },

    #[error("{stage} returned output that does not decode: {source}")]
    Parse {
        stage: Stage,
        /// The raw model output, before fence stripping.
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StageError {
    pub fn stage(&self) -> Stage {
        match self {
            StageError::Model { stage, .. } | StageError::Parse { stage, .. } => *stage,
        }
    }

    /// The raw model output, if the model produced any.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            StageError::Model { .. } => None,
            StageError::Parse { raw, .. } => Some(raw),
        }
    }
}

/// Failure record surfaced in the pipeline outcome.
#[derive(Debug, Clone, Serialize)]
pub struct StageFailure {
    pub stage: Stage,
    pub reason: String,
    pub raw_output: Option<String>,
}

impl From<&StageError> for StageFailure {
    fn from(err: &StageError) -> Self {
        Self {
            stage: err.stage(),
            reason: err.to_string(),
            raw_output: err.raw_output().map(str::to_string),
        }
    }
}
