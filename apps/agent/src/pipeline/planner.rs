//! Roadmap planning — three sequential prompt/decode stages (topics → structure
//! → activities), each consuming the prior stage's parsed output, followed by
//! assembly of the final [`RoadmapDocument`].
//!
//! `plan_roadmap` accepts precomputed topics so a caller that already ran topic
//! discovery (e.g. concurrently with classification) can skip that round trip.

use tracing::info;

use crate::errors::{Stage, StageError, StageFailure};
use crate::llm::TextGenerator;
use crate::models::{
    ActivityPlan, DurationDays, Persona, ProfileSummary, Roadmap, RoadmapDocument,
    RoadmapStructure, Topic, UserProfile,
};

use super::prompts::{
    ACTIVITIES_PROMPT_TEMPLATE, PLANNER_SYSTEM, STRUCTURE_PROMPT_TEMPLATE, TOPICS_PROMPT_TEMPLATE,
};
use super::{pretty_json, recover, run_stage, StageTrace};

/// Per-sub-stage prompts and raw responses from a traced planning run.
#[derive(Debug, Clone)]
pub struct PlannerTrace {
    pub topics: StageTrace,
    pub structure: StageTrace,
    pub activities: StageTrace,
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

fn duration_options() -> String {
    let days: Vec<String> = DurationDays::LEGAL.iter().map(u64::to_string).collect();
    format!(
        "{}, or {}",
        days[..days.len() - 1].join(", "),
        days[days.len() - 1]
    )
}

fn duration_set() -> String {
    DurationDays::LEGAL
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

pub fn topics_prompt(profile: &UserProfile, persona: Option<Persona>) -> String {
    let persona_line = persona
        .map(|p| format!("Persona: {p}\n"))
        .unwrap_or_default();
    TOPICS_PROMPT_TEMPLATE
        .replace("{profile_json}", &pretty_json(profile))
        .replace("{persona_line}", &persona_line)
}

pub fn structure_prompt(topics: &[Topic]) -> String {
    STRUCTURE_PROMPT_TEMPLATE
        .replace("{topics_json}", &pretty_json(&topics))
        .replace("{duration_options}", &duration_options())
        .replace("{duration_set}", &duration_set())
}

pub fn activities_prompt(
    profile: &UserProfile,
    persona: Option<Persona>,
    structure: &RoadmapStructure,
) -> String {
    let persona_label = persona.map(|p| p.to_string()).unwrap_or_default();
    ACTIVITIES_PROMPT_TEMPLATE
        .replace("{profile_json}", &pretty_json(profile))
        .replace("{persona}", &persona_label)
        .replace("{structure_json}", &pretty_json(structure))
}

// ────────────────────────────────────────────────────────────────────────────
// Stages
// ────────────────────────────────────────────────────────────────────────────

/// Think: identify the most relevant topics for this user.
pub async fn identify_topics(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
    persona: Option<Persona>,
) -> Result<Vec<Topic>, StageError> {
    let prompt = topics_prompt(profile, persona);
    run_stage(llm, Stage::TopicDiscovery, PLANNER_SYSTEM, &prompt)
        .await
        .0
}

/// Trace variant of [`identify_topics`].
pub async fn identify_topics_trace(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
    persona: Option<Persona>,
) -> (Result<Vec<Topic>, StageError>, StageTrace) {
    let prompt = topics_prompt(profile, persona);
    let (result, response) = run_stage(llm, Stage::TopicDiscovery, PLANNER_SYSTEM, &prompt).await;
    (
        result,
        StageTrace {
            stage: Stage::TopicDiscovery,
            prompt,
            response,
        },
    )
}

/// Plan: choose a duration and assign topics to levels.
pub async fn plan_structure(
    llm: &dyn TextGenerator,
    topics: &[Topic],
) -> Result<RoadmapStructure, StageError> {
    let prompt = structure_prompt(topics);
    run_stage(llm, Stage::StructurePlanning, PLANNER_SYSTEM, &prompt)
        .await
        .0
}

async fn plan_structure_trace(
    llm: &dyn TextGenerator,
    topics: &[Topic],
) -> (Result<RoadmapStructure, StageError>, StageTrace) {
    let prompt = structure_prompt(topics);
    let (result, response) =
        run_stage(llm, Stage::StructurePlanning, PLANNER_SYSTEM, &prompt).await;
    (
        result,
        StageTrace {
            stage: Stage::StructurePlanning,
            prompt,
            response,
        },
    )
}

/// Rethink: flesh each topic out with activities and hour estimates.
pub async fn plan_activities(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
    persona: Option<Persona>,
    structure: &RoadmapStructure,
) -> Result<ActivityPlan, StageError> {
    let prompt = activities_prompt(profile, persona, structure);
    run_stage(llm, Stage::ActivityPlanning, PLANNER_SYSTEM, &prompt)
        .await
        .0
}

async fn plan_activities_trace(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
    persona: Option<Persona>,
    structure: &RoadmapStructure,
) -> (Result<ActivityPlan, StageError>, StageTrace) {
    let prompt = activities_prompt(profile, persona, structure);
    let (result, response) =
        run_stage(llm, Stage::ActivityPlanning, PLANNER_SYSTEM, &prompt).await;
    (
        result,
        StageTrace {
            stage: Stage::ActivityPlanning,
            prompt,
            response,
        },
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Assembles the final document from whatever the stages produced.
///
/// Pure and total: degraded stage output (defaults) yields a degraded but
/// well-formed document — duration 30, zero hours, no levels.
pub fn assemble_document(
    profile: &UserProfile,
    persona: Option<Persona>,
    structure: RoadmapStructure,
    activities: ActivityPlan,
) -> RoadmapDocument {
    let title = match persona {
        Some(p) => format!("Personalized GenAI Roadmap for {p}"),
        None => "Personalized GenAI Roadmap".to_string(),
    };
    RoadmapDocument {
        user_profile_summary: ProfileSummary {
            persona,
            domain: profile.domain.clone(),
            goals: profile.goals.clone(),
            weekly_availability_hours: profile.weekly_availability_hours,
        },
        roadmap: Roadmap {
            title,
            duration_days: structure.duration_days,
            total_estimated_hours: activities.total_estimated_hours,
            levels: activities.levels,
        },
    }
}

/// Runs the three planning stages and assembles the document.
///
/// Stage failures are recorded, not propagated — planning always yields a
/// document. Pass `precomputed_topics` to skip the topic-discovery round trip.
pub async fn plan_roadmap(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
    persona: Option<Persona>,
    precomputed_topics: Option<Vec<Topic>>,
) -> (RoadmapDocument, Vec<StageFailure>) {
    let mut failures = Vec::new();

    let topics = match precomputed_topics {
        Some(topics) => topics,
        None => recover(
            &mut failures,
            identify_topics(llm, profile, persona).await,
        ),
    };
    info!("planning over {} topics", topics.len());

    let structure = recover(&mut failures, plan_structure(llm, &topics).await);
    let activities = recover(
        &mut failures,
        plan_activities(llm, profile, persona, &structure).await,
    );

    (
        assemble_document(profile, persona, structure, activities),
        failures,
    )
}

/// Trace variant of [`plan_roadmap`]. When topics are precomputed, the recorded
/// topics "response" is their serialized JSON rather than a model reply.
pub async fn plan_roadmap_trace(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
    persona: Option<Persona>,
    precomputed_topics: Option<Vec<Topic>>,
) -> (RoadmapDocument, Vec<StageFailure>, PlannerTrace) {
    let mut failures = Vec::new();

    let (topics, topics_trace) = match precomputed_topics {
        Some(topics) => {
            let trace = StageTrace {
                stage: Stage::TopicDiscovery,
                prompt: topics_prompt(profile, persona),
                response: pretty_json(&topics),
            };
            (topics, trace)
        }
        None => {
            let (result, trace) = identify_topics_trace(llm, profile, persona).await;
            (recover(&mut failures, result), trace)
        }
    };

    let (structure_result, structure_trace) = plan_structure_trace(llm, &topics).await;
    let structure = recover(&mut failures, structure_result);

    let (activities_result, activities_trace) =
        plan_activities_trace(llm, profile, persona, &structure).await;
    let activities = recover(&mut failures, activities_result);

    (
        assemble_document(profile, persona, structure, activities),
        failures,
        PlannerTrace {
            topics: topics_trace,
            structure: structure_trace,
            activities: activities_trace,
        },
    )
}
