use crate::models::RecommendationField;

/// Decorates a recommendation blob for display
///
/// Splits on newlines, drops blank lines, and prefixes each recognized field
/// line with its emoji. Lines already carrying a field emoji are left alone,
/// so formatting an already-formatted (or translated) blob never doubles
/// prefixes.
pub fn decorate(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(decorate_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn decorate_line(line: &str) -> String {
    if has_emoji_prefix(line) {
        return line.to_string();
    }

    match RecommendationField::from_line(line) {
        Some(field) => format!("{} {}", field.emoji(), line),
        None => line.to_string(),
    }
}

fn has_emoji_prefix(line: &str) -> bool {
    RecommendationField::ALL
        .iter()
        .any(|field| line.starts_with(field.emoji()))
}
