// All LLM prompt constants for the pipeline stages.
// Category and option lists are rendered from the enums in `models` at build
// time — the templates carry placeholders, never re-typed value sets.

/// System prompt for profile extraction — enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str =
    "You are an expert career coach and GenAI learning consultant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Profile extraction prompt template.
/// Replace: `{resume_text}`, `{interview_text}`, `{goals_text}`, `{preference_options}`
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Given the following user inputs:

Resume:
{resume_text}

Interview Summary:
{interview_text}

Personal Goals:
{goals_text}

Extract the following as a JSON object:
- domain: the user's professional domain/field
- skills: { "technical": [{"name": <skill>, "proficiency": <level>}, ...], "soft": [<skill>, ...] }
- goals: list of specific goals
- learning_preference: one of [{preference_options}]
- weekly_availability_hours: integer estimate

Output ONLY the JSON object. Do not include any explanation."#;

/// System prompt for persona classification — enforces JSON-only output.
pub const PERSONA_SYSTEM: &str =
    "You are an expert career coach classifying learners into audience categories. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona classification prompt template.
/// Replace: `{profile_json}`, `{categories}`
pub const PERSONA_PROMPT_TEMPLATE: &str = r#"Given the following user profile data (JSON):
{profile_json}

Classify the user into ONE of these categories:
- {categories}

Respond as a JSON object:
{
  "persona": <category, exactly as listed above>,
  "justification": <brief justification for your choice>
}"#;

/// System prompt shared by the three planning stages — enforces JSON-only output.
pub const PLANNER_SYSTEM: &str =
    "You are an expert GenAI curriculum designer building personalized learning roadmaps. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Topic discovery prompt template (the Think step).
/// Replace: `{profile_json}`, `{persona_line}`
pub const TOPICS_PROMPT_TEMPLATE: &str = r#"Given the user's profile below, identify the most relevant GenAI topics/use-cases for them. For each topic, include a brief justification of why it is relevant for this user.

User Profile:
{profile_json}
{persona_line}
Respond as a JSON array of objects:
[
  {"topic": <topic>, "justification": <why this topic is relevant>}, ...
]"#;

/// Structure planning prompt template (the Plan step).
/// Replace: `{topics_json}`, `{duration_options}`, `{duration_set}`
pub const STRUCTURE_PROMPT_TEMPLATE: &str = r#"Given the user's profile and the following topics (with justifications):
{topics_json}

Propose a suitable roadmap duration (choose one: {duration_options} days) and structure the roadmap into levels (e.g., Foundations, Hands-on, Application). Assign topics to levels. Justify your choices based on the user's background, goals, and weekly availability.

Respond as a JSON object:
{
  "duration_days": <{duration_set}>,
  "levels": [
    {"level": <int>, "title": <level title>, "topics": [<topic>, ...], "justification": <why this structure/leveling>}, ...
  ],
  "structure_justification": <overall justification>
}"#;

/// Activity planning prompt template (the Rethink step).
/// Replace: `{profile_json}`, `{persona}`, `{structure_json}`
pub const ACTIVITIES_PROMPT_TEMPLATE: &str = r#"Given the roadmap structure below, the user's learning preference, and their weekly availability, detail the specific learning activities for each topic. Estimate the hours required per activity so that the total fits within the duration and weekly hours. For each activity, provide a justification.

User Profile:
{profile_json}
Persona: {persona}
Roadmap Structure:
{structure_json}

Respond as a JSON object in this format:
{
  "levels": [
    {
      "level": <int>,
      "title": <level title>,
      "estimated_hours": <int>,
      "topics": [
        {
          "topic": <topic>,
          "activity": <activity description>,
          "estimated_hours": <int>,
          "justification": <why this activity/topic for this user>
        }, ...
      ]
    }, ...
  ],
  "total_estimated_hours": <int>
}"#;
