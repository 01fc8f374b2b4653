//! Plain-text rendering of a roadmap document.

use crate::models::RoadmapDocument;

const RULE_WIDTH: usize = 60;

/// Renders the roadmap as a fixed-width text table.
///
/// Pure and deterministic: identical input produces byte-identical output.
/// Missing data renders as empty strings or zeros; an empty document still
/// yields the header block.
pub fn format_table(document: &RoadmapDocument) -> String {
    let roadmap = &document.roadmap;
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);

    let mut lines = Vec::new();
    lines.push(format!("\n{heavy_rule}"));
    lines.push(roadmap.title.clone());
    lines.push(format!(
        "Duration: {} days | Total Hours: {}",
        roadmap.duration_days.as_days(),
        roadmap.total_estimated_hours
    ));
    lines.push(heavy_rule.clone());

    for level in &roadmap.levels {
        lines.push(format!(
            "\nLevel {}: {} (Est. {} hrs)",
            level.level, level.title, level.estimated_hours
        ));
        lines.push(light_rule.clone());
        for topic in &level.topics {
            lines.push(format!("- Topic: {}", topic.topic));
            lines.push(format!("  Activity: {}", topic.activity));
            lines.push(format!("  Est. Hours: {}", topic.estimated_hours));
            lines.push(format!("  Justification: {}\n", topic.justification));
        }
    }

    lines.push(format!("{heavy_rule}\n"));
    lines.join("\n")
}
