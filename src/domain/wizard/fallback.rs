//! Fixed placeholder content used when the generation service is unreachable.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::domain::event::{BudgetLevel, EventConcept, Vendor, VendorCategory};
use crate::domain::foundation::{CategoryId, ConceptId, VendorId};

/// What to do when concept generation fails before any concepts exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptFallbackPolicy {
    /// Leave the concept list empty and show the error so the user can retry.
    #[default]
    SurfaceError,
    /// Show the canned concepts alongside the error.
    UseCannedConcepts,
}

static FALLBACK_CONCEPTS: Lazy<Vec<EventConcept>> = Lazy::new(|| {
    vec![
        EventConcept::new(
            ConceptId::new("1"),
            "Elegant Rooftop Dinner",
            "An intimate dining experience under the stars with sophisticated décor and ambient lighting.",
        )
        .with_theme("Modern Elegance")
        .with_location("Downtown rooftop venue with city views")
        .with_budget_level(BudgetLevel::Premium)
        .with_tags(["Intimate", "Modern", "Sophisticated", "Evening"]),
        EventConcept::new(
            ConceptId::new("2"),
            "Garden Party Celebration",
            "A relaxed outdoor gathering with natural beauty, string lights, and casual dining.",
        )
        .with_theme("Natural & Rustic")
        .with_location("Botanical garden or outdoor park")
        .with_budget_level(BudgetLevel::Balanced)
        .with_tags(["Casual", "Outdoor", "Natural", "Relaxed"]),
        EventConcept::new(
            ConceptId::new("3"),
            "Beach Sunset Gathering",
            "A laid-back beachside celebration with ocean views, bonfire, and coastal vibes.",
        )
        .with_theme("Coastal Casual")
        .with_location("Beachfront with sunset views")
        .with_budget_level(BudgetLevel::BudgetFriendly)
        .with_tags(["Casual", "Outdoor", "Relaxed", "Scenic"]),
        EventConcept::new(
            ConceptId::new("4"),
            "Industrial Chic Celebration",
            "A trendy urban event in a converted warehouse space with modern touches.",
        )
        .with_theme("Urban Industrial")
        .with_location("Converted warehouse or loft space")
        .with_budget_level(BudgetLevel::Balanced)
        .with_tags(["Modern", "Urban", "Trendy", "Spacious"]),
        EventConcept::new(
            ConceptId::new("5"),
            "Classic Ballroom Affair",
            "A traditional elegant celebration with formal dining and classic décor.",
        )
        .with_theme("Timeless Elegance")
        .with_location("Hotel ballroom or event hall")
        .with_budget_level(BudgetLevel::Premium)
        .with_tags(["Formal", "Traditional", "Elegant", "Grand"]),
    ]
});

fn vendor(id: &str, name: &str, vendor_type: &str, reasoning: &str) -> Vendor {
    Vendor {
        id: VendorId::new(id),
        name: name.to_string(),
        vendor_type: vendor_type.to_string(),
        reasoning: reasoning.to_string(),
    }
}

fn category(id: &str, name: &str, vendors: Vec<Vendor>) -> VendorCategory {
    VendorCategory {
        id: CategoryId::new(id),
        name: name.to_string(),
        vendors,
    }
}

static FALLBACK_VENDORS: Lazy<Vec<VendorCategory>> = Lazy::new(|| {
    vec![
        category(
            "venue",
            "Venue",
            vec![
                vendor(
                    "v1",
                    "Grand Ballroom at The Plaza",
                    "Elegant hotel ballroom",
                    "Perfect for your guest count with a sophisticated atmosphere and excellent catering options within your budget range.",
                ),
                vendor(
                    "v2",
                    "Sunset Rooftop Terrace",
                    "Open-air rooftop venue",
                    "Offers stunning city views and natural ambiance, ideal for creating memorable moments under the stars.",
                ),
                vendor(
                    "v3",
                    "The Garden Estate",
                    "Outdoor garden venue",
                    "Beautiful natural setting with flexible layout options, great for both intimate and larger celebrations.",
                ),
            ],
        ),
        category(
            "catering",
            "Catering",
            vec![
                vendor(
                    "c1",
                    "Artisan Cuisine Co.",
                    "Full-service catering with dietary accommodations",
                    "Specializes in customizable menus including gluten-free options, matching your must-haves perfectly.",
                ),
                vendor(
                    "c2",
                    "Farm-to-Table Catering",
                    "Organic local ingredients",
                    "Fresh, seasonal menu with excellent presentation, fits well within your balanced budget approach.",
                ),
                vendor(
                    "c3",
                    "Classic Elegance Catering",
                    "Traditional fine dining service",
                    "Proven track record with formal events, offers elegant plated dinners ideal for your celebration style.",
                ),
            ],
        ),
        category(
            "entertainment",
            "Entertainment",
            vec![
                vendor(
                    "e1",
                    "Jazz Quartet Ensemble",
                    "Live jazz band",
                    "Creates sophisticated ambiance perfect for dinner events, can adjust volume for conversation.",
                ),
                vendor(
                    "e2",
                    "DJ Marcus Events",
                    "Professional event DJ",
                    "Versatile music selection with modern sound system, keeps energy flowing throughout your celebration.",
                ),
                vendor(
                    "e3",
                    "Acoustic Duo",
                    "Live acoustic musicians",
                    "Intimate live music that complements dining, perfect for creating a warm, personal atmosphere.",
                ),
            ],
        ),
        category(
            "decor",
            "Decor",
            vec![
                vendor(
                    "d1",
                    "Elegant Occasions Decor",
                    "Full-service event styling",
                    "Specializes in sophisticated color palettes and ambient lighting, can avoid specific colors you mentioned.",
                ),
                vendor(
                    "d2",
                    "Bloom & Co. Florals",
                    "Premium floral design",
                    "Creates stunning centerpieces and arrangements that elevate any venue within your budget.",
                ),
                vendor(
                    "d3",
                    "Modern Minimalist Design",
                    "Contemporary event styling",
                    "Clean, elegant aesthetic with focus on quality over quantity, perfect for a refined celebration.",
                ),
            ],
        ),
    ]
});

/// The five canned concepts.
pub fn fallback_concepts() -> Vec<EventConcept> {
    FALLBACK_CONCEPTS.clone()
}

/// The canned vendor categories: Venue, Catering, Entertainment, Decor.
pub fn fallback_vendor_categories() -> Vec<VendorCategory> {
    FALLBACK_VENDORS.clone()
}
