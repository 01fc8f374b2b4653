//! Domain types for the roadmap pipeline.
//!
//! Every value set that appears inside a prompt (personas, learning preferences,
//! legal durations) is a closed enumeration here, so prompt construction and
//! result validation share one definition instead of re-typing free strings.
//!
//! Wire-facing structs default every field: a model response may omit anything,
//! and a failed stage degrades to the type's `Default`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// User profile
// ────────────────────────────────────────────────────────────────────────────

/// A technical skill with the model's proficiency estimate (free text, e.g. "Advanced").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSkill {
    pub name: String,
    #[serde(default)]
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub technical: Vec<TechnicalSkill>,
    #[serde(default)]
    pub soft: Vec<String>,
}

/// How the user prefers to learn. The serialized names are the exact strings
/// offered in the extraction prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningPreference {
    ProjectBased,
    VideoBased,
    Reading,
    #[default]
    Mixed,
}

impl LearningPreference {
    pub const ALL: [LearningPreference; 4] = [
        LearningPreference::ProjectBased,
        LearningPreference::VideoBased,
        LearningPreference::Reading,
        LearningPreference::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LearningPreference::ProjectBased => "project-based",
            LearningPreference::VideoBased => "video-based",
            LearningPreference::Reading => "reading",
            LearningPreference::Mixed => "mixed",
        }
    }
}

/// Structured user data extracted from resume, interview summary, and goals.
///
/// No field is guaranteed present — the default (empty) profile is also the
/// extraction-failure shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub learning_preference: LearningPreference,
    #[serde(default)]
    pub weekly_availability_hours: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Persona
// ────────────────────────────────────────────────────────────────────────────

/// The six fixed audience categories used to tailor roadmap content.
///
/// The serde/Display strings are exactly what the classification prompt offers,
/// so an answer outside the list is a decode failure, not a silently accepted
/// free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "College student")]
    CollegeStudent,
    #[serde(rename = "Working professional (tech)")]
    WorkingProfessionalTech,
    #[serde(rename = "Working professional (non-tech)")]
    WorkingProfessionalNonTech,
    #[serde(rename = "Marketing/Sales background")]
    MarketingSales,
    #[serde(rename = "Non-tech aiming to enter tech")]
    NonTechEnteringTech,
    #[serde(rename = "Senior professional (10+ years experience)")]
    SeniorProfessional,
}

impl Persona {
    pub const ALL: [Persona; 6] = [
        Persona::CollegeStudent,
        Persona::WorkingProfessionalTech,
        Persona::WorkingProfessionalNonTech,
        Persona::MarketingSales,
        Persona::NonTechEnteringTech,
        Persona::SeniorProfessional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Persona::CollegeStudent => "College student",
            Persona::WorkingProfessionalTech => "Working professional (tech)",
            Persona::WorkingProfessionalNonTech => "Working professional (non-tech)",
            Persona::MarketingSales => "Marketing/Sales background",
            Persona::NonTechEnteringTech => "Non-tech aiming to enter tech",
            Persona::SeniorProfessional => "Senior professional (10+ years experience)",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification result. `persona` is `None` when classification failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonaVerdict {
    #[serde(default)]
    pub persona: Option<Persona>,
    #[serde(default)]
    pub justification: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Planning stages
// ────────────────────────────────────────────────────────────────────────────

/// A candidate topic with the model's reasoning for why it fits this user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    #[serde(default)]
    pub justification: String,
}

/// Legal roadmap durations. Serialized as the bare day count; anything outside
/// {21, 30, 45} is rejected at decode time rather than passed through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum DurationDays {
    Sprint,
    #[default]
    Standard,
    Extended,
}

impl DurationDays {
    pub const LEGAL: [u64; 3] = [21, 30, 45];

    pub fn as_days(self) -> u64 {
        match self {
            DurationDays::Sprint => 21,
            DurationDays::Standard => 30,
            DurationDays::Extended => 45,
        }
    }
}

impl TryFrom<u64> for DurationDays {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            21 => Ok(DurationDays::Sprint),
            30 => Ok(DurationDays::Standard),
            45 => Ok(DurationDays::Extended),
            other => Err(format!(
                "duration_days must be one of 21, 30, or 45, got {other}"
            )),
        }
    }
}

impl From<DurationDays> for u64 {
    fn from(value: DurationDays) -> Self {
        value.as_days()
    }
}

/// Output of the structure-planning stage: duration plus topic-to-level assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStructure {
    #[serde(default)]
    pub duration_days: DurationDays,
    #[serde(default)]
    pub levels: Vec<StructureLevel>,
    #[serde(default)]
    pub structure_justification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureLevel {
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub justification: String,
}

/// A topic fleshed out with a concrete learning activity and time estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedActivity {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub estimated_hours: u32,
    #[serde(default)]
    pub justification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapLevel {
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub estimated_hours: u32,
    #[serde(default)]
    pub topics: Vec<PlannedActivity>,
}

/// Output of the activity-planning stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityPlan {
    #[serde(default)]
    pub levels: Vec<RoadmapLevel>,
    #[serde(default)]
    pub total_estimated_hours: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Final document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default)]
    pub persona: Option<Persona>,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub weekly_availability_hours: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration_days: DurationDays,
    #[serde(default)]
    pub total_estimated_hours: u32,
    #[serde(default)]
    pub levels: Vec<RoadmapLevel>,
}

/// The assembled roadmap: curriculum plus a summary of the profile it was built for.
/// Produced once per run and discarded after formatting; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapDocument {
    pub user_profile_summary: ProfileSummary,
    pub roadmap: Roadmap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_full_deserializes() {
        let json = r#"{
            "domain": "Backend engineering",
            "skills": {
                "technical": [
                    {"name": "Python", "proficiency": "Advanced"},
                    {"name": "AWS", "proficiency": "Basic"}
                ],
                "soft": ["Mentoring", "Team leadership"]
            },
            "goals": ["Integrate GenAI into current workflow"],
            "learning_preference": "project-based",
            "weekly_availability_hours": 8
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.domain, "Backend engineering");
        assert_eq!(profile.skills.technical.len(), 2);
        assert_eq!(profile.skills.technical[0].proficiency, "Advanced");
        assert_eq!(profile.skills.soft.len(), 2);
        assert_eq!(profile.learning_preference, LearningPreference::ProjectBased);
        assert_eq!(profile.weekly_availability_hours, 8);
    }

    #[test]
    fn test_empty_object_is_default_profile() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
        assert_eq!(profile.learning_preference, LearningPreference::Mixed);
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = UserProfile {
            domain: "Data science".to_string(),
            skills: SkillSet {
                technical: vec![TechnicalSkill {
                    name: "SQL".to_string(),
                    proficiency: "Advanced".to_string(),
                }],
                soft: vec!["Communication".to_string()],
            },
            goals: vec!["Ship an LLM-backed feature".to_string()],
            learning_preference: LearningPreference::Reading,
            weekly_availability_hours: 5,
        };
        let json = serde_json::to_string(&profile).unwrap();
        let recovered: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, profile);
    }

    #[test]
    fn test_persona_serde_uses_prompt_labels() {
        for persona in Persona::ALL {
            let json = serde_json::to_string(&persona).unwrap();
            assert_eq!(json, format!("\"{}\"", persona.label()));
            let recovered: Persona = serde_json::from_str(&json).unwrap();
            assert_eq!(recovered, persona);
        }
    }

    #[test]
    fn test_unknown_persona_string_is_rejected() {
        let result: Result<Persona, _> = serde_json::from_str("\"Astronaut\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_learning_preference_kebab_case() {
        let pref: LearningPreference = serde_json::from_str("\"video-based\"").unwrap();
        assert_eq!(pref, LearningPreference::VideoBased);
        assert_eq!(
            serde_json::to_string(&LearningPreference::ProjectBased).unwrap(),
            "\"project-based\""
        );
    }

    #[test]
    fn test_duration_accepts_only_legal_values() {
        for days in DurationDays::LEGAL {
            let parsed: DurationDays = serde_json::from_str(&days.to_string()).unwrap();
            assert_eq!(parsed.as_days(), days);
        }
        assert!(serde_json::from_str::<DurationDays>("14").is_err());
        assert!(serde_json::from_str::<DurationDays>("60").is_err());
    }

    #[test]
    fn test_duration_default_is_30() {
        assert_eq!(DurationDays::default().as_days(), 30);
    }

    #[test]
    fn test_duration_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&DurationDays::Extended).unwrap(), "45");
    }

    #[test]
    fn test_structure_with_invalid_duration_fails_decode() {
        // An out-of-range duration poisons the whole structure payload — the
        // stage falls back to its default rather than passing 60 through.
        let json = r#"{"duration_days": 60, "levels": []}"#;
        assert!(serde_json::from_str::<RoadmapStructure>(json).is_err());
    }

    #[test]
    fn test_structure_without_duration_defaults_to_30() {
        let json = r#"{"levels": [{"level": 1, "title": "Foundations", "topics": ["RAG"], "justification": "start here"}]}"#;
        let structure: RoadmapStructure = serde_json::from_str(json).unwrap();
        assert_eq!(structure.duration_days.as_days(), 30);
        assert_eq!(structure.levels.len(), 1);
    }

    #[test]
    fn test_activity_plan_deserializes() {
        let json = r#"{
            "levels": [
                {
                    "level": 1,
                    "title": "Foundations",
                    "estimated_hours": 12,
                    "topics": [
                        {
                            "topic": "Prompt engineering",
                            "activity": "Build a prompt playground",
                            "estimated_hours": 6,
                            "justification": "hands-on learner"
                        }
                    ]
                }
            ],
            "total_estimated_hours": 12
        }"#;
        let plan: ActivityPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.total_estimated_hours, 12);
        assert_eq!(plan.levels[0].topics[0].topic, "Prompt engineering");
    }

    #[test]
    fn test_persona_verdict_defaults_empty() {
        let verdict = PersonaVerdict::default();
        assert!(verdict.persona.is_none());
        assert!(verdict.justification.is_empty());
    }
}
