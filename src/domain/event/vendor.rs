//! Vendor suggestions grouped by category.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, VendorId};

/// One suggested vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    #[serde(rename = "type")]
    pub vendor_type: String,
    pub reasoning: String,
}

/// A named group of vendor suggestions, e.g. "Venue" or "Catering".
///
/// Categories are always regenerated wholesale; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorCategory {
    pub id: CategoryId,
    pub name: String,
    pub vendors: Vec<Vendor>,
}

impl VendorCategory {
    /// Total number of vendors across a set of categories.
    pub fn vendor_count(categories: &[VendorCategory]) -> usize {
        categories.iter().map(|c| c.vendors.len()).sum()
    }
}
