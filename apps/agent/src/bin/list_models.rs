//! Lists the Gemini models available to the configured API key.

use anyhow::Result;
use serde::Deserialize;

use wayfinder::config::Config;
use wayfinder::llm::GEMINI_API_BASE;

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{GEMINI_API_BASE}/models"))
        .header("x-goog-api-key", &config.gemini_api_key)
        .send()
        .await?
        .error_for_status()?;
    let list: ModelList = response.json().await?;

    println!("Available Gemini models for your API key:");
    for model in list.models {
        println!(
            "- {} (supported methods: {})",
            model.name,
            model.supported_generation_methods.join(", ")
        );
    }

    Ok(())
}
