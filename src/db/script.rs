/// Statements executed per round trip when replaying a rebuild script.
pub const STATEMENTS_PER_BATCH: usize = 200;

/// Split a SQL script into individual statements on `;`, dropping empty
/// fragments and surrounding whitespace. A trailing statement without a
/// terminator is kept.
pub fn split_statements(script: &str) -> Vec<String> {
    script
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
