//! Mapping between domain records and the generation service schema.
//!
//! Every function here is total: degenerate input produces degenerate but
//! well-formed output, never an error.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::schema::{
    ConceptsPayload, ExternalConcept, ExternalEventProfile, ExternalVendorGroup, VendorsPayload,
};
use crate::domain::event::{EventConcept, EventProfile, Vendor, VendorCategory};
use crate::domain::foundation::{next_id_stamp, CategoryId, ConceptId, VendorId};

/// Splits newline-delimited free text into trimmed, non-empty entries.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Combines the event date and start time as `YYYY-MM-DDTHH:MM:00`.
///
/// An empty start time means midnight. Without a date the result is empty.
pub fn format_event_datetime(date: Option<NaiveDate>, time_start: &str) -> String {
    let Some(date) = date else {
        return String::new();
    };

    let time = match time_start.trim() {
        "" => "00:00",
        time => time,
    };
    format!("{}T{}:00", date.format("%Y-%m-%d"), time)
}

/// Converts the profile into the service's event profile.
pub fn to_external_profile(profile: &EventProfile) -> ExternalEventProfile {
    ExternalEventProfile {
        description: profile.overview.clone(),
        min_budget: profile.budget().min(),
        max_budget: profile.budget().max(),
        min_guests: profile.guests().min(),
        max_guests: profile.guests().max(),
        event_datetime: format_event_datetime(profile.event_date, profile.event_time_start()),
        must_haves: parse_list(&profile.must_haves),
        nice_to_haves: parse_list(&profile.nice_to_haves),
        things_to_avoid: parse_list(&profile.things_to_avoid),
        special_needs: profile.special_needs.clone(),
        restrictions: profile.dietary_restrictions.clone(),
        concept: None,
    }
}

/// Builds the concept generation request body.
pub fn concepts_payload(
    profile: &EventProfile,
    additional_ideas: &str,
    feedback: Option<&str>,
) -> ConceptsPayload {
    ConceptsPayload {
        event_ideas: additional_ideas.to_string(),
        event_profile: to_external_profile(profile),
        user_feedback: feedback.map(str::to_string),
    }
}

/// Builds the vendor generation request body.
pub fn vendors_payload(profile: &EventProfile, feedback: Option<&str>) -> VendorsPayload {
    VendorsPayload {
        event_profile: to_external_profile(profile),
        user_feedback: feedback.map(str::to_string),
    }
}

/// Converts a concept response into domain concepts, keeping order.
///
/// Ids are `concept-<position>-<stamp>`; theme, location and tags are left
/// empty and the budget level is `Balanced`.
pub fn from_external_concepts(concepts: Vec<ExternalConcept>) -> Vec<EventConcept> {
    let stamp = next_id_stamp();
    concepts
        .into_iter()
        .enumerate()
        .map(|(index, concept)| {
            EventConcept::new(
                ConceptId::new(format!("concept-{}-{}", index + 1, stamp)),
                concept.name,
                concept.description,
            )
        })
        .collect()
}

/// Converts a vendor response into categories.
///
/// Groups sharing a category name are merged; categories appear in
/// first-seen order and vendors in input order. A vendor's type is the
/// idea's own name. The group-level description is dropped.
pub fn from_external_vendors(groups: Vec<ExternalVendorGroup>) -> Vec<VendorCategory> {
    let stamp = next_id_stamp();
    let mut categories: Vec<VendorCategory> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (group_index, group) in groups.into_iter().enumerate() {
        let position = *positions.entry(group.category.clone()).or_insert_with(|| {
            categories.push(VendorCategory {
                id: CategoryId::new(format!("category-{}-{}", categories.len(), stamp)),
                name: group.category.clone(),
                vendors: Vec::new(),
            });
            categories.len() - 1
        });

        let vendors = group
            .ideas
            .into_iter()
            .enumerate()
            .map(|(idea_index, idea)| Vendor {
                id: VendorId::new(format!("vendor-{}-{}-{}", group_index, idea_index, stamp)),
                vendor_type: idea.name.clone(),
                name: idea.name,
                reasoning: idea.explanation,
            });
        categories[position].vendors.extend(vendors);
    }

    categories
}
