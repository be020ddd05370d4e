//! Id normalization shared by every lookup table

/// Normalize a display name into a lookup id.
///
/// Keeps ASCII letters (lowercased) and digits, drops everything else,
/// so `"Mr. Mime"` and `"mrmime"` resolve to the same entry.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
