//! Persona classification — embeds the extracted profile and the fixed category
//! list in a prompt and decodes a [`PersonaVerdict`].

use crate::errors::{Stage, StageError};
use crate::llm::TextGenerator;
use crate::models::{Persona, PersonaVerdict, UserProfile};

use super::prompts::{PERSONA_PROMPT_TEMPLATE, PERSONA_SYSTEM};
use super::{pretty_json, run_stage, StageTrace};

const STAGE: Stage = Stage::PersonaClassification;

/// Builds the classification prompt. The category list is rendered from
/// [`Persona::ALL`], so the prompt offers exactly the strings the decoder accepts.
pub fn classification_prompt(profile: &UserProfile) -> String {
    let categories = Persona::ALL
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join("\n- ");
    PERSONA_PROMPT_TEMPLATE
        .replace("{profile_json}", &pretty_json(profile))
        .replace("{categories}", &categories)
}

pub async fn classify_persona(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
) -> Result<PersonaVerdict, StageError> {
    let prompt = classification_prompt(profile);
    run_stage(llm, STAGE, PERSONA_SYSTEM, &prompt).await.0
}

/// Trace variant of [`classify_persona`].
pub async fn classify_persona_trace(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
) -> (Result<PersonaVerdict, StageError>, StageTrace) {
    let prompt = classification_prompt(profile);
    let (result, response) = run_stage(llm, STAGE, PERSONA_SYSTEM, &prompt).await;
    (
        result,
        StageTrace {
            stage: STAGE,
            prompt,
            response,
        },
    )
}
