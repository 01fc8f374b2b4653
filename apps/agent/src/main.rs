use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wayfinder::config::Config;
use wayfinder::llm::GeminiClient;
use wayfinder::pipeline::{generate_roadmap, RoadmapRequest};

const SAMPLE_RESUME: &str = "\
Experienced software engineer with 5 years in backend development. \
Skills: Python (Advanced), JavaScript (Intermediate), AWS (Basic), SQL (Advanced). \
Led teams, contributed to open source, and mentored juniors.";

const SAMPLE_INTERVIEW: &str = "\
The candidate is highly motivated, prefers hands-on learning, and is interested \
in integrating GenAI into their workflow. Comfortable with Python and cloud \
platforms. Weekly learning availability: ~8 hours.";

const SAMPLE_GOALS: &str = "\
1. Integrate GenAI into current development workflow
2. Build a GenAI-powered feature for a personal project
3. Understand LLM deployment strategies";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wayfinder v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(config.gemini_api_key.clone()).with_model(config.model.clone());
    info!("Gemini client initialized (model: {})", llm.model());

    let request = RoadmapRequest {
        resume_text: SAMPLE_RESUME.to_string(),
        interview_text: SAMPLE_INTERVIEW.to_string(),
        goals_text: SAMPLE_GOALS.to_string(),
        write_pdf: config.write_pdf,
    };

    let outcome = generate_roadmap(&llm, &request).await;

    for failure in &outcome.failures {
        warn!(stage = %failure.stage, "stage degraded to empty default: {}", failure.reason);
    }

    println!("\n===== Personalized GenAI Roadmap (JSON) =====\n");
    println!("{}", serde_json::to_string_pretty(&outcome.document)?);
    println!("\n===== Roadmap Table =====\n");
    println!("{}", outcome.table);
    if let Some(path) = &outcome.pdf_path {
        println!("PDF generated at: {}", path.display());
    }

    Ok(())
}
