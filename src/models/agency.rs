//! The agency details shown next to the contact form.

use serde::Serialize;

/// Static contact details for the agency behind the form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AgencyProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub services: &'static [&'static str],
    pub social_networks: &'static [&'static str],
}

impl AgencyProfile {
    /// ASKAA Media's published details.
    pub const ASKAA_MEDIA: AgencyProfile = AgencyProfile {
        name: "ASKAA Media",
        tagline: "Transforming businesses through innovative digital marketing solutions.",
        phone: "+91 8803880397",
        email: "askaamedia@gmail.com",
        services: &[
            "Lead and Sales Generation",
            "Social Media Marketing",
            "Pay-Per-Click Advertising",
            "Conversion Tracking & Analytics",
            "WhatsApp Marketing",
            "Campaign Optimization & Scaling",
        ],
        social_networks: &["Facebook", "Twitter", "LinkedIn", "Instagram"],
    };
}

impl Default for AgencyProfile {
    fn default() -> Self {
        Self::ASKAA_MEDIA
    }
}
