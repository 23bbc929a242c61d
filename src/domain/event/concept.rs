//! EventConcept - a generated thematic proposal for the event.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ConceptId;

/// Rough cost positioning of a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BudgetLevel {
    #[serde(rename = "Budget-friendly")]
    BudgetFriendly,
    #[default]
    Balanced,
    Premium,
}

impl BudgetLevel {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetLevel::BudgetFriendly => "Budget-friendly",
            BudgetLevel::Balanced => "Balanced",
            BudgetLevel::Premium => "Premium",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A generated event concept.
///
/// Concepts are immutable once built; the wizard only ever refers to them
/// by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConcept {
    id: ConceptId,
    title: String,
    description: String,
    theme: String,
    location: String,
    budget_level: BudgetLevel,
    tags: Vec<String>,
}

impl EventConcept {
    /// Creates a concept with empty theme, location and tags and a
    /// `Balanced` budget level.
    pub fn new(id: ConceptId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            theme: String::new(),
            location: String::new(),
            budget_level: BudgetLevel::default(),
            tags: Vec::new(),
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_budget_level(mut self, level: BudgetLevel) -> Self {
        self.budget_level = level;
        self
    }

    /// Sets the tags, dropping duplicates while keeping first-seen order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.clear();
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn id(&self) -> &ConceptId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn budget_level(&self) -> BudgetLevel {
        self.budget_level
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_concept_uses_defaults() {
        let concept = EventConcept::new(ConceptId::new("c-1"), "Garden Party", "Outdoors");

        assert_eq!(concept.title(), "Garden Party");
        assert_eq!(concept.theme(), "");
        assert_eq!(concept.location(), "");
        assert_eq!(concept.budget_level(), BudgetLevel::Balanced);
        assert!(concept.tags().is_empty());
    }

    #[test]
    fn with_tags_deduplicates_in_order() {
        let concept = EventConcept::new(ConceptId::new("c-1"), "t", "d")
            .with_tags(["Casual", "Outdoor", "Casual", "Relaxed"]);

        assert_eq!(concept.tags(), ["Casual", "Outdoor", "Relaxed"]);
    }

    #[test]
    fn budget_level_serializes_with_display_labels() {
        let json = serde_json::to_string(&BudgetLevel::BudgetFriendly).unwrap();
        assert_eq!(json, "\"Budget-friendly\"");

        let level: BudgetLevel = serde_json::from_str("\"Premium\"").unwrap();
        assert_eq!(level, BudgetLevel::Premium);
    }
}
