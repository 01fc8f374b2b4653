//! User profile extraction — embeds resume, interview summary, and goals text in
//! a prompt and decodes the model's JSON answer into a [`UserProfile`].

use crate::errors::{Stage, StageError};
use crate::llm::TextGenerator;
use crate::models::{LearningPreference, UserProfile};

use super::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use super::{run_stage, StageTrace};

const STAGE: Stage = Stage::ProfileExtraction;

/// Builds the extraction prompt. The learning-preference option list is rendered
/// from the enum, so the prompt and the decoder always agree on legal values.
pub fn extraction_prompt(resume: &str, interview: &str, goals: &str) -> String {
    let options = LearningPreference::ALL
        .iter()
        .map(|p| format!("'{}'", p.label()))
        .collect::<Vec<_>>()
        .join(", ");
    EXTRACTION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume)
        .replace("{interview_text}", interview)
        .replace("{goals_text}", goals)
        .replace("{preference_options}", &options)
}

pub async fn extract_profile(
    llm: &dyn TextGenerator,
    resume: &str,
    interview: &str,
    goals: &str,
) -> Result<UserProfile, StageError> {
    let prompt = extraction_prompt(resume, interview, goals);
    run_stage(llm, STAGE, EXTRACTION_SYSTEM, &prompt).await.0
}

/// Trace variant: same extraction, but the exact prompt and raw model response
/// come back alongside the result.
pub async fn extract_profile_trace(
    llm: &dyn TextGenerator,
    resume: &str,
    interview: &str,
    goals: &str,
) -> (Result<UserProfile, StageError>, StageTrace) {
    let prompt = extraction_prompt(resume, interview, goals);
    let (result, response) = run_stage(llm, STAGE, EXTRACTION_SYSTEM, &prompt).await;
    (
        result,
        StageTrace {
            stage: STAGE,
            prompt,
            response,
        },
    )
}
