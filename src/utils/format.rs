/// Format a game-clock string for display: "00:07:45" and "07:45" both
/// become "7:45". Anything that doesn't look like a clock is returned
/// unchanged rather than erroring.
pub fn format_time(raw: &str) -> String {
    let parts: Vec<&str> = raw.split(':').collect();
    let parsed: Option<Vec<u32>> = parts.iter().map(|part| part.parse().ok()).collect();

    match parsed.as_deref() {
        Some([hours, minutes, seconds]) => {
            format!("{}:{:02}", hours * 60 + minutes, seconds)
        }
        Some([minutes, seconds]) => format!("{}:{:02}", minutes, seconds),
        _ => raw.to_string(),
    }
}
