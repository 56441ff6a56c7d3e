//! Fixed content tables for the landing page.
//!
//! Each table is defined once and iterated in order. The `*_cards`
//! helpers pair every entry with its overlay metadata so the views only
//! have to render what they are handed.

use crate::config::SiteConfig;
use crate::devtools::{Category, DevId, DevMeta, identifier_for};

/// Decorative glyph shown on a service card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    /// Preventive care
    Heart,
    /// Primary care
    Stethoscope,
    /// Health monitoring
    Activity,
    /// Emergency care
    Shield,
}

/// One card in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    /// Card glyph
    pub icon: ServiceIcon,
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// One figure in the stats strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatEntry {
    /// Caption under the figure
    pub label: &'static str,
    /// Display value, already formatted
    pub value: &'static str,
}

/// One specialty tile in the about panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialtyEntry {
    /// Specialty name
    pub name: &'static str,
    /// Gradient token used to colour the initials tile
    pub gradient: &'static str,
}

impl SpecialtyEntry {
    /// Initials shown inside the tile ("Family Medicine" -> "FM").
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

/// First letter of each whitespace separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Services grid content.
pub const SERVICES: [ServiceEntry; 4] = [
    ServiceEntry {
        icon: ServiceIcon::Heart,
        title: "Preventive Care",
        description: "Comprehensive health screenings, vaccinations, and wellness checkups to keep you healthy",
    },
    ServiceEntry {
        icon: ServiceIcon::Stethoscope,
        title: "Primary Care",
        description: "Complete primary care services for adults and families with personalized treatment plans",
    },
    ServiceEntry {
        icon: ServiceIcon::Activity,
        title: "Health Monitoring",
        description: "Ongoing health monitoring and chronic disease management with regular follow-ups",
    },
    ServiceEntry {
        icon: ServiceIcon::Shield,
        title: "Emergency Care",
        description: "24/7 emergency consultation and urgent care services when you need them most",
    },
];

/// Stats strip content.
pub const STATS: [StatEntry; 4] = [
    StatEntry {
        label: "Patients Served",
        value: "5,000+",
    },
    StatEntry {
        label: "Years Experience",
        value: "15+",
    },
    StatEntry {
        label: "Success Rate",
        value: "98%",
    },
    StatEntry {
        label: "Satisfaction",
        value: "4.9/5",
    },
];

/// Specialties shown in the about panel.
pub const SPECIALTIES: [SpecialtyEntry; 6] = [
    SpecialtyEntry {
        name: "Family Medicine",
        gradient: "gradient-blue",
    },
    SpecialtyEntry {
        name: "Preventive Care",
        gradient: "gradient-green",
    },
    SpecialtyEntry {
        name: "Chronic Disease",
        gradient: "gradient-purple",
    },
    SpecialtyEntry {
        name: "Emergency Care",
        gradient: "gradient-red",
    },
    SpecialtyEntry {
        name: "Health Screening",
        gradient: "gradient-yellow",
    },
    SpecialtyEntry {
        name: "Wellness Plans",
        gradient: "gradient-teal",
    },
];

/// Stars on the doctor profile card.
pub const STAR_COUNT: usize = 5;

/// A table entry paired with its overlay metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tagged<T> {
    /// Position in the source table
    pub index: usize,
    /// The entry itself
    pub entry: T,
    /// Overlay metadata for the card wrapping the entry
    pub dev: DevMeta,
}

/// Stats strip, in table order.
pub fn stat_cards() -> Vec<Tagged<StatEntry>> {
    STATS
        .iter()
        .enumerate()
        .map(|(index, stat)| Tagged {
            index,
            entry: *stat,
            dev: DevMeta::named(
                identifier_for(Category::StatCard, index),
                format!("{} Stat Card", stat.label),
                format!("Statistical card showing {}: {}", stat.label, stat.value),
            ),
        })
        .collect()
}

/// Services grid, in table order.
pub fn service_cards() -> Vec<Tagged<ServiceEntry>> {
    SERVICES
        .iter()
        .enumerate()
        .map(|(index, service)| Tagged {
            index,
            entry: *service,
            dev: DevMeta::named(
                identifier_for(Category::ServiceCard, index),
                format!("{} Service Card", service.title),
                format!(
                    "Service card highlighting {}: {}",
                    service.title, service.description
                ),
            ),
        })
        .collect()
}

/// A specialty with its two tagged elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialtyTile {
    /// Position in [`SPECIALTIES`]
    pub index: usize,
    /// The specialty
    pub entry: SpecialtyEntry,
    /// Derived initials
    pub initials: String,
    /// Id of the initials tile (no overlay text)
    pub icon_id: DevId,
    /// Metadata of the name badge
    pub badge: DevMeta,
}

/// Specialty tiles, in table order.
pub fn specialty_tiles() -> Vec<SpecialtyTile> {
    SPECIALTIES
        .iter()
        .enumerate()
        .map(|(index, specialty)| SpecialtyTile {
            index,
            entry: *specialty,
            initials: specialty.initials(),
            icon_id: identifier_for(Category::SpecialtyIcon, index),
            badge: DevMeta::named(
                identifier_for(Category::SpecialtyBadge, index),
                format!("{} Specialty Badge", specialty.name),
                format!("Specialty badge for {}", specialty.name),
            ),
        })
        .collect()
}

/// Kind of contact channel, drives the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    /// Office phone
    Phone,
    /// Office email
    Email,
    /// Street address
    Address,
}

/// One column of the contact block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    /// Channel
    pub kind: ContactKind,
    /// Column heading
    pub title: &'static str,
    /// Value from config
    pub value: String,
}

/// Contact columns (phone, email, address) built from config.
pub fn contact_entries(config: &SiteConfig) -> [ContactEntry; 3] {
    [
        ContactEntry {
            kind: ContactKind::Phone,
            title: "Phone",
            value: config.contact.phone.clone(),
        },
        ContactEntry {
            kind: ContactKind::Email,
            title: "Email",
            value: config.contact.email.clone(),
        },
        ContactEntry {
            kind: ContactKind::Address,
            title: "Address",
            value: config.contact.address.clone(),
        },
    ]
}

/// Footer link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    /// Link text
    pub label: &'static str,
    /// Target
    pub href: &'static str,
}

/// Footer links, left to right.
pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink {
        label: "Privacy Policy",
        href: "#",
    },
    FooterLink {
        label: "Terms of Service",
        href: "#",
    },
    FooterLink {
        label: "Contact",
        href: "#",
    },
];

/// Footer copyright line.
pub fn copyright_line(config: &SiteConfig) -> String {
    format!(
        "© {} {} Medical Practice. {}",
        config.copyright_year, config.brand_name, config.footer_tagline
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn specialty_initials() {
        assert_eq!(initials("Family Medicine"), "FM");
        assert_eq!(initials("Preventive Care"), "PC");
        assert_eq!(initials("Cardiology"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn initials_ignore_repeated_spaces() {
        assert_eq!(initials("  Health   Screening "), "HS");
    }

    #[test]
    fn stat_cards_follow_table_order() {
        let cards = stat_cards();
        assert_eq!(cards.len(), 4);

        let labels: Vec<_> = cards.iter().map(|c| c.entry.label).collect();
        assert_eq!(
            labels,
            vec!["Patients Served", "Years Experience", "Success Rate", "Satisfaction"]
        );

        let ids: Vec<_> = cards.iter().map(|c| c.dev.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["stat-card-0", "stat-card-1", "stat-card-2", "stat-card-3"]
        );
    }

    #[test]
    fn stat_card_overlay_text() {
        let cards = stat_cards();
        assert_eq!(cards[2].dev.name.as_deref(), Some("Success Rate Stat Card"));
        assert_eq!(
            cards[2].dev.description.as_deref(),
            Some("Statistical card showing Success Rate: 98%")
        );
    }

    #[test]
    fn service_cards_follow_table_order() {
        let cards = service_cards();
        let titles: Vec<_> = cards.iter().map(|c| c.entry.title).collect();
        assert_eq!(
            titles,
            vec!["Preventive Care", "Primary Care", "Health Monitoring", "Emergency Care"]
        );
        assert_eq!(cards[0].entry.icon, ServiceIcon::Heart);
        assert_eq!(cards[3].entry.icon, ServiceIcon::Shield);
        assert_eq!(
            cards[1].dev.name.as_deref(),
            Some("Primary Care Service Card")
        );
    }

    #[test]
    fn specialty_tiles_cover_all_six() {
        let tiles = specialty_tiles();
        assert_eq!(tiles.len(), 6);

        let initials: Vec<_> = tiles.iter().map(|t| t.initials.as_str()).collect();
        assert_eq!(initials, vec!["FM", "PC", "CD", "EC", "HS", "WP"]);

        for (idx, tile) in tiles.iter().enumerate() {
            assert_eq!(tile.index, idx);
            assert_eq!(tile.icon_id.as_str(), format!("specialty-icon-{idx}"));
            assert_eq!(tile.badge.id.as_str(), format!("specialty-badge-{idx}"));
        }
        assert_eq!(
            tiles[5].badge.description.as_deref(),
            Some("Specialty badge for Wellness Plans")
        );
    }

    #[test]
    fn tables_have_no_duplicates() {
        let services: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        let stats: HashSet<_> = STATS.iter().map(|s| s.label).collect();
        let specialties: HashSet<_> = SPECIALTIES.iter().map(|s| s.name).collect();
        let gradients: HashSet<_> = SPECIALTIES.iter().map(|s| s.gradient).collect();

        assert_eq!(services.len(), SERVICES.len());
        assert_eq!(stats.len(), STATS.len());
        assert_eq!(specialties.len(), SPECIALTIES.len());
        assert_eq!(gradients.len(), SPECIALTIES.len());
        assert_eq!(STAR_COUNT, 5);
    }

    #[test]
    fn contact_entries_come_from_config() {
        let config = SiteConfig::default();
        let [phone, email, address] = contact_entries(&config);

        assert_eq!(phone.kind, ContactKind::Phone);
        assert_eq!(phone.value, "(555) 123-4567");
        assert_eq!(email.value, "info@drmike.com");
        assert_eq!(address.value, "123 Health St, Medical City, MC 12345");
    }

    #[test]
    fn footer_copyright_uses_brand_and_year() {
        let line = copyright_line(&SiteConfig::default());
        assert_eq!(
            line,
            "© 2024 Dr. Mike Medical Practice. Providing quality healthcare with compassion."
        );
        assert_eq!(FOOTER_LINKS.len(), 3);
    }
}
