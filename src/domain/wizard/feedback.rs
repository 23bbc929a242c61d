//! Composition of free-text feedback into the single `user_feedback` value.

const LIKED_HEADER: &str = "What I liked: ";
const CHANGE_HEADER: &str = "What I'd like to change: ";

/// Combines the concept step's "liked" and "would change" fields.
///
/// Each non-empty field becomes a headed section; sections are joined by a
/// blank line. Returns `None` when both fields are empty.
pub fn combine_concept_feedback(liked: &str, disliked: &str) -> Option<String> {
    let sections: Vec<String> = [(LIKED_HEADER, liked), (CHANGE_HEADER, disliked)]
        .into_iter()
        .filter_map(|(header, text)| {
            let text = text.trim();
            (!text.is_empty()).then(|| format!("{}{}", header, text))
        })
        .collect();

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

/// Normalizes the vendor step's single feedback field.
pub fn vendor_feedback(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
