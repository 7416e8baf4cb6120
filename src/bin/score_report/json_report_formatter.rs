use pronounce_rs::{Report, ScoringError};

pub fn render(report: &Report) -> Result<String, ScoringError> {
    let mut rendered = serde_json::to_string_pretty(report)
        .map_err(|e| ScoringError::json("serialize report", e))?;
    rendered.push('\n');
    Ok(rendered)
}
