//! Identifiers for the developer-tooling overlay.
//!
//! Every tagged element on the page carries an opaque [`DevId`] and,
//! optionally, a human readable name and description. Nothing at runtime
//! depends on them; inspection tooling reads them off the DOM as
//! `data-dev-*` attributes.

use serde::Serialize;

/// Opaque identifier consumed by the component registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DevId(&'static str);

impl DevId {
    /// Sentinel for elements with no registry entry.
    pub const NONE: DevId = DevId("noID");

    /// Wrap a registry id.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Raw identifier string as written to the DOM.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for DevId {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::fmt::Display for DevId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Repeated-card families that get positional identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Cards in the stats grid
    StatCard,
    /// Cards in the services grid
    ServiceCard,
    /// Initials tile above each specialty
    SpecialtyIcon,
    /// Name badge below each specialty
    SpecialtyBadge,
}

const STAT_CARD_IDS: [DevId; 4] = [
    DevId("stat-card-0"),
    DevId("stat-card-1"),
    DevId("stat-card-2"),
    DevId("stat-card-3"),
];

const SERVICE_CARD_IDS: [DevId; 4] = [
    DevId("service-card-0"),
    DevId("service-card-1"),
    DevId("service-card-2"),
    DevId("service-card-3"),
];

const SPECIALTY_ICON_IDS: [DevId; 6] = [
    DevId("specialty-icon-0"),
    DevId("specialty-icon-1"),
    DevId("specialty-icon-2"),
    DevId("specialty-icon-3"),
    DevId("specialty-icon-4"),
    DevId("specialty-icon-5"),
];

const SPECIALTY_BADGE_IDS: [DevId; 6] = [
    DevId("specialty-badge-0"),
    DevId("specialty-badge-1"),
    DevId("specialty-badge-2"),
    DevId("specialty-badge-3"),
    DevId("specialty-badge-4"),
    DevId("specialty-badge-5"),
];

/// Registry id for the `index`-th element of `category`.
///
/// Total: indices past the registered set map to [`DevId::NONE`].
pub fn identifier_for(category: Category, index: usize) -> DevId {
    let ids: &[DevId] = match category {
        Category::StatCard => &STAT_CARD_IDS,
        Category::ServiceCard => &SERVICE_CARD_IDS,
        Category::SpecialtyIcon => &SPECIALTY_ICON_IDS,
        Category::SpecialtyBadge => &SPECIALTY_BADGE_IDS,
    };
    ids.get(index).copied().unwrap_or(DevId::NONE)
}

/// Registry metadata attached to one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DevMeta {
    /// Registry id (or the sentinel)
    pub id: DevId,
    /// Display name shown by the overlay
    pub name: Option<String>,
    /// Longer description shown by the overlay
    pub description: Option<String>,
}

impl DevMeta {
    /// Id with overlay name and description.
    pub fn named(id: DevId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

/// Component ids of the top-level section containers.
pub mod components {
    /// Whole page
    pub const LANDING_ROOT: &str = "landing-page-root";
    /// Hero block
    pub const HERO: &str = "hero-section";
    /// Stats grid
    pub const STATS: &str = "stats-section";
    /// Services grid
    pub const SERVICES: &str = "services-section";
    /// About the doctor
    pub const ABOUT: &str = "about-section";
    /// Appointment form
    pub const APPOINTMENT: &str = "appointment-section";
    /// Contact block
    pub const CONTACT: &str = "contact-section";
}
