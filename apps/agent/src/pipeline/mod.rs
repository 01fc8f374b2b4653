//! Pipeline orchestration.
//!
//! Flow: extract_profile → classify_persona → plan_roadmap (topics → structure
//! → activities) → format_table (+ optional PDF).
//!
//! Each stage blocks on its model round trip before the next begins; data moves
//! by value and nothing is shared. No stage failure aborts the run: the
//! orchestrator substitutes the stage's empty default, records a
//! [`StageFailure`], and continues, so a run always ends with a document —
//! possibly a degraded one, with the degradation visible in `failures`.

pub mod persona;
pub mod planner;
pub mod profile;
pub mod prompts;

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::errors::{Stage, StageError, StageFailure};
use crate::llm::{decode_stage, GenParams, TextGenerator};
use crate::models::RoadmapDocument;
use crate::render;

pub use planner::{plan_roadmap, plan_roadmap_trace, PlannerTrace};

// ────────────────────────────────────────────────────────────────────────────
// Shared stage plumbing
// ────────────────────────────────────────────────────────────────────────────

/// The exact prompt and raw model response of one stage execution.
#[derive(Debug, Clone, Serialize)]
pub struct StageTrace {
    pub stage: Stage,
    pub prompt: String,
    /// Raw model output before fence stripping; empty if the model call failed.
    pub response: String,
}

pub(crate) fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Runs one prompt/generate/decode unit and returns the result together with
/// the raw response text (for trace capture).
pub(crate) async fn run_stage<T: DeserializeOwned>(
    llm: &dyn TextGenerator,
    stage: Stage,
    system: &str,
    prompt: &str,
) -> (Result<T, StageError>, String) {
    match llm.generate(prompt, system, GenParams::default()).await {
        Ok(raw) => (decode_stage(stage, &raw), raw),
        Err(source) => (Err(StageError::Model { stage, source }), String::new()),
    }
}

/// Logs a stage failure and substitutes the stage's empty default.
pub(crate) fn recover<T: Default>(
    failures: &mut Vec<StageFailure>,
    result: Result<T, StageError>,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(stage = %err.stage(), "stage failed, substituting empty default: {err}");
            if let Some(raw) = err.raw_output() {
                warn!(stage = %err.stage(), "raw model output: {raw}");
            }
            failures.push(StageFailure::from(&err));
            T::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Full pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Free-text inputs for one roadmap run.
#[derive(Debug, Clone, Default)]
pub struct RoadmapRequest {
    pub resume_text: String,
    pub interview_text: String,
    pub goals_text: String,
    pub write_pdf: bool,
}

/// Everything a run produces. `failures` is empty on a fully clean run.
#[derive(Debug)]
pub struct RoadmapOutcome {
    pub document: RoadmapDocument,
    pub table: String,
    pub pdf_path: Option<PathBuf>,
    pub failures: Vec<StageFailure>,
}

/// Prompts and raw responses from every stage of a traced run.
#[derive(Debug, Clone)]
pub struct PipelineTrace {
    pub profile: StageTrace,
    pub persona: StageTrace,
    pub planner: PlannerTrace,
}

/// Runs the full pipeline. Always returns an outcome, never an error.
pub async fn generate_roadmap(llm: &dyn TextGenerator, request: &RoadmapRequest) -> RoadmapOutcome {
    let mut failures = Vec::new();

    let profile = recover(
        &mut failures,
        profile::extract_profile(
            llm,
            &request.resume_text,
            &request.interview_text,
            &request.goals_text,
        )
        .await,
    );

    let verdict = recover(&mut failures, persona::classify_persona(llm, &profile).await);

    let (document, mut plan_failures) =
        planner::plan_roadmap(llm, &profile, verdict.persona, None).await;
    failures.append(&mut plan_failures);

    finish(document, request.write_pdf, failures)
}

/// Trace variant of [`generate_roadmap`]: same outcome, plus every stage's
/// prompt and raw response for auditing model behavior.
pub async fn generate_roadmap_trace(
    llm: &dyn TextGenerator,
    request: &RoadmapRequest,
) -> (RoadmapOutcome, PipelineTrace) {
    let mut failures = Vec::new();

    let (profile_result, profile_trace) = profile::extract_profile_trace(
        llm,
        &request.resume_text,
        &request.interview_text,
        &request.goals_text,
    )
    .await;
    let profile = recover(&mut failures, profile_result);

    let (verdict_result, persona_trace) = persona::classify_persona_trace(llm, &profile).await;
    let verdict = recover(&mut failures, verdict_result);

    let (document, mut plan_failures, planner_trace) =
        planner::plan_roadmap_trace(llm, &profile, verdict.persona, None).await;
    failures.append(&mut plan_failures);

    (
        finish(document, request.write_pdf, failures),
        PipelineTrace {
            profile: profile_trace,
            persona: persona_trace,
            planner: planner_trace,
        },
    )
}

fn finish(
    document: RoadmapDocument,
    write_pdf: bool,
    failures: Vec<StageFailure>,
) -> RoadmapOutcome {
    let table = render::table::format_table(&document);
    let pdf_path = if write_pdf {
        render::render_pdf_to_temp(&document)
    } else {
        None
    };
    RoadmapOutcome {
        document,
        table,
        pdf_path,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedGenerator;
    use crate::models::Persona;

    const PROFILE_JSON: &str = r#"{
        "domain": "Backend engineering",
        "skills": {"technical": [{"name": "Python", "proficiency": "Advanced"}], "soft": []},
        "goals": ["Integrate GenAI into workflow"],
        "learning_preference": "project-based",
        "weekly_availability_hours": 8
    }"#;
    const PERSONA_JSON: &str =
        r#"{"persona": "Working professional (tech)", "justification": "5 years backend"}"#;
    const TOPICS_JSON: &str =
        r#"[{"topic": "Prompt engineering", "justification": "developer workflow"}]"#;
    const STRUCTURE_JSON: &str = r#"{
        "duration_days": 21,
        "levels": [{"level": 1, "title": "Foundations", "topics": ["Prompt engineering"], "justification": "start small"}],
        "structure_justification": "tight but feasible at 8 hrs/week"
    }"#;
    const ACTIVITIES_JSON: &str = r#"{
        "levels": [{
            "level": 1,
            "title": "Foundations",
            "estimated_hours": 16,
            "topics": [{"topic": "Prompt engineering", "activity": "Build a prompt playground", "estimated_hours": 16, "justification": "hands-on"}]
        }],
        "total_estimated_hours": 16
    }"#;

    fn sample_request() -> RoadmapRequest {
        RoadmapRequest {
            resume_text: "5 years backend, Python advanced".to_string(),
            interview_text: "prefers hands-on, 8 hrs/week".to_string(),
            goals_text: "integrate GenAI into workflow".to_string(),
            write_pdf: false,
        }
    }

    #[tokio::test]
    async fn test_end_to_end_happy_path() {
        let llm = ScriptedGenerator::replies([
            PROFILE_JSON,
            PERSONA_JSON,
            TOPICS_JSON,
            STRUCTURE_JSON,
            ACTIVITIES_JSON,
        ]);
        let outcome = generate_roadmap(&llm, &sample_request()).await;

        assert!(outcome.failures.is_empty());
        let roadmap = &outcome.document.roadmap;
        assert!(crate::models::DurationDays::LEGAL.contains(&roadmap.duration_days.as_days()));
        assert!(!roadmap.levels.is_empty());
        assert_eq!(
            outcome.document.user_profile_summary.persona,
            Some(Persona::WorkingProfessionalTech)
        );
        assert!(outcome.table.contains("Personalized GenAI Roadmap"));
        assert!(outcome.pdf_path.is_none());
    }

    #[tokio::test]
    async fn test_end_to_end_all_calls_fail() {
        let llm = ScriptedGenerator::failing();
        let outcome = generate_roadmap(&llm, &sample_request()).await;

        let roadmap = &outcome.document.roadmap;
        assert_eq!(roadmap.duration_days.as_days(), 30);
        assert_eq!(roadmap.total_estimated_hours, 0);
        assert!(roadmap.levels.is_empty());
        // One failure per stage: profile, persona, topics, structure, activities.
        assert_eq!(outcome.failures.len(), 5);
        // The table still renders a well-formed header-only block.
        assert!(outcome.table.contains("Personalized GenAI Roadmap"));
        assert!(outcome.table.contains("Duration: 30 days | Total Hours: 0"));
    }

    #[tokio::test]
    async fn test_midway_garbage_degrades_downstream_not_everything() {
        // Profile parses, persona is prose → downstream keeps running with no persona.
        let llm = ScriptedGenerator::replies([
            PROFILE_JSON,
            "Definitely a tech professional.",
            TOPICS_JSON,
            STRUCTURE_JSON,
            ACTIVITIES_JSON,
        ]);
        let outcome = generate_roadmap(&llm, &sample_request()).await;

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].stage, Stage::PersonaClassification);
        assert_eq!(
            outcome.failures[0].raw_output.as_deref(),
            Some("Definitely a tech professional.")
        );
        assert!(outcome.document.user_profile_summary.persona.is_none());
        assert_eq!(outcome.document.roadmap.title, "Personalized GenAI Roadmap");
        assert_eq!(outcome.document.roadmap.levels.len(), 1);
    }

    #[tokio::test]
    async fn test_trace_variant_captures_every_stage() {
        let llm = ScriptedGenerator::replies([
            PROFILE_JSON,
            PERSONA_JSON,
            TOPICS_JSON,
            STRUCTURE_JSON,
            ACTIVITIES_JSON,
        ]);
        let (outcome, trace) = generate_roadmap_trace(&llm, &sample_request()).await;

        assert!(outcome.failures.is_empty());
        assert!(trace.profile.prompt.contains("5 years backend"));
        assert_eq!(trace.profile.response, PROFILE_JSON);
        assert_eq!(trace.persona.response, PERSONA_JSON);
        assert_eq!(trace.planner.topics.response, TOPICS_JSON);
        assert_eq!(trace.planner.structure.response, STRUCTURE_JSON);
        assert_eq!(trace.planner.activities.response, ACTIVITIES_JSON);
        // Later prompts embed earlier parsed output.
        assert!(trace.planner.structure.prompt.contains("Prompt engineering"));
        assert!(trace.planner.activities.prompt.contains("Foundations"));
    }

    #[tokio::test]
    async fn test_failed_model_call_yields_empty_trace_response() {
        let llm = ScriptedGenerator::failing();
        let (outcome, trace) = generate_roadmap_trace(&llm, &sample_request()).await;
        assert_eq!(outcome.failures.len(), 5);
        assert!(trace.profile.response.is_empty());
        assert!(!trace.profile.prompt.is_empty());
    }
}
