//! Static use-case catalog for classifying QR codes.
//!
//! Every record stores the id of a catalog entry plus a snapshot of its name
//! taken at save time. The catalog itself is fixed at compile time and is
//! never created or mutated at runtime; the form reads it to populate the
//! use-case selector and to show the description of the current choice.

use std::fmt;

/// Category grouping for use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Network access (WiFi credentials and the like)
    Connectivity,
    /// General property information
    Information,
    /// Emergency and safety material
    Safety,
    /// Local recommendations and guest services
    Hospitality,
    /// Step-by-step usage instructions
    Instructions,
}

impl Category {
    /// Lowercase tag used in listings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connectivity => "connectivity",
            Self::Information => "information",
            Self::Safety => "safety",
            Self::Hospitality => "hospitality",
            Self::Instructions => "instructions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCase {
    /// Stable identifier referenced by records
    pub id: &'static str,
    /// Display name, snapshotted into records on save
    pub name: &'static str,
    /// One-line description shown next to the selector
    pub description: &'static str,
    /// Category tag
    pub category: Category,
}

/// The fixed set of use cases offered by the form
pub static USE_CASES: [UseCase; 8] = [
    UseCase {
        id: "uc-001",
        name: "WiFi Connection",
        description: "Share WiFi credentials with guests. The QR code will auto-connect their device.",
        category: Category::Connectivity,
    },
    UseCase {
        id: "uc-002",
        name: "House Rules",
        description: "Link to property rules and guidelines guests should follow.",
        category: Category::Information,
    },
    UseCase {
        id: "uc-003",
        name: "Emergency Info",
        description: "Quick access to emergency contacts and local services.",
        category: Category::Safety,
    },
    UseCase {
        id: "uc-004",
        name: "Check-in Instructions",
        description: "Step-by-step guide for the guest check-in process.",
        category: Category::Information,
    },
    UseCase {
        id: "uc-005",
        name: "Local Recommendations",
        description: "Curated list of nearby restaurants, attractions, and services.",
        category: Category::Hospitality,
    },
    UseCase {
        id: "uc-006",
        name: "Appliance Guide",
        description: "Instructions for using specific appliances in the property.",
        category: Category::Instructions,
    },
    UseCase {
        id: "uc-007",
        name: "Parking Instructions",
        description: "Parking location and access instructions.",
        category: Category::Information,
    },
    UseCase {
        id: "uc-008",
        name: "Checkout Checklist",
        description: "Tasks guests should complete before checkout.",
        category: Category::Information,
    },
];

/// Look up a catalog entry by id
#[must_use]
pub fn get(id: &str) -> Option<&'static UseCase> {
    USE_CASES.iter().find(|uc| uc.id == id)
}

/// Position of an entry in [`USE_CASES`], for selector cursors
#[must_use]
pub fn position(id: &str) -> Option<usize> {
    USE_CASES.iter().position(|uc| uc.id == id)
}

/// Resolve the display name for an id
///
/// Returns an empty string when the id does not resolve. The form only
/// offers catalog-sourced ids, so this path is a defensive fallback.
#[must_use]
pub fn name_of(id: &str) -> &'static str {
    get(id).map_or("", |uc| uc.name)
}
