use crate::types::scoring::Points;

/// Reads a leading integer the way page text is usually written ("2",
/// " 3 pts", "+4"). Returns `None` for blank, non-numeric or negative text.
pub fn parse_points(text: &str) -> Option<Points> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}

/// Declared total for a quiz, falling back to `default` when the element is
/// absent or its text does not parse.
pub fn declared_points(text: Option<&str>, default: Points) -> Points {
    text.and_then(parse_points).unwrap_or(default)
}
