//! Inline SVG glyphs (stroke style, 24x24 grid).
//!
//! Purely decorative: every icon is `aria-hidden`.

use leptos::prelude::*;
use practice_core::content::{ContactKind, ServiceIcon};

/// Glyphs used on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Heart,
    Stethoscope,
    Activity,
    Shield,
    Star,
    User,
    Calendar,
    Phone,
    Mail,
    MapPin,
}

impl Glyph {
    /// SVG path data (the `d` attribute).
    pub const fn path(self) -> &'static str {
        match self {
            Glyph::Heart => ICON_HEART,
            Glyph::Stethoscope => ICON_STETHOSCOPE,
            Glyph::Activity => ICON_ACTIVITY,
            Glyph::Shield => ICON_SHIELD,
            Glyph::Star => ICON_STAR,
            Glyph::User => ICON_USER,
            Glyph::Calendar => ICON_CALENDAR,
            Glyph::Phone => ICON_PHONE,
            Glyph::Mail => ICON_MAIL,
            Glyph::MapPin => ICON_MAP_PIN,
        }
    }
}

impl From<ServiceIcon> for Glyph {
    fn from(icon: ServiceIcon) -> Self {
        match icon {
            ServiceIcon::Heart => Glyph::Heart,
            ServiceIcon::Stethoscope => Glyph::Stethoscope,
            ServiceIcon::Activity => Glyph::Activity,
            ServiceIcon::Shield => Glyph::Shield,
        }
    }
}

impl From<ContactKind> for Glyph {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Phone => Glyph::Phone,
            ContactKind::Email => Glyph::Mail,
            ContactKind::Address => Glyph::MapPin,
        }
    }
}

/// Colour class for a service glyph.
pub const fn service_tone(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::Heart => "tone-red",
        ServiceIcon::Stethoscope => "tone-blue",
        ServiceIcon::Activity => "tone-green",
        ServiceIcon::Shield => "tone-purple",
    }
}

/// Colour class for a contact glyph.
pub const fn contact_tone(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Phone => "tone-blue",
        ContactKind::Email => "tone-green",
        ContactKind::Address => "tone-purple",
    }
}

/// Renders one glyph.
///
/// # Props
///
/// * `glyph` - which icon
/// * `class` - extra CSS classes (sizing / tone)
/// * `filled` - fill the shape instead of stroking only
#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = "")] class: &'static str,
    #[prop(default = false)] filled: bool,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill=if filled { "currentColor" } else { "none" }
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("icon {class}")
            aria-hidden="true"
        >
            <path d=glyph.path()></path>
        </svg>
    }
}

const ICON_HEART: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

const ICON_STETHOSCOPE: &str = "M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6a6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3M8 15v1a6 6 0 0 0 6 6a6 6 0 0 0 6-6v-4M20 10a2 2 0 1 0 0-4a2 2 0 0 0 0 4Z";

const ICON_ACTIVITY: &str = "M22 12h-4l-3 9L9 3l-3 9H2";

const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z";

const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2Z";

const ICON_USER: &str = "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8a4 4 0 0 0 0 8Z";

const ICON_CALENDAR: &str = "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z";

const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2a19.79 19.79 0 0 1-8.63-3.07a19.5 19.5 0 0 1-6-6a19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72a12.84 12.84 0 0 0 .7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45a12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92Z";

const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2ZM22 6l-10 7L2 6";

const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0ZM12 13a3 3 0 1 0 0-6a3 3 0 0 0 0 6Z";
