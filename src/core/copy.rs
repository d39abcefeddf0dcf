//! Static page copy: brand, hero, composer defaults, and the content sections
//! below the hero, in page order.

use crate::core::palette::Rgb;
use crate::core::reveal::OverlayVariant;

pub const BRAND: &str = "Signal";
pub const HEADLINE: &str = "Launch GTM Plays That Actually Win.";
pub const COMPOSER_PLACEHOLDER: &str = "e.g., Magic with AI-powered insights";

pub const DEFAULT_PHRASES: [&str; 5] = [
    "Identify the best go-to-market strategy for SaaS products",
    "Find proven growth patterns for healthcare technology companies",
    "Discover lead generation strategies for B2B startups",
    "Analyze market entry tactics for fintech companies",
    "Generate qualified leads for enterprise software",
];

pub const DASHBOARD_TITLE: &str = "Signal Dashboard";
pub const DASHBOARD_WELCOME: &str = "Welcome to the Signal Dashboard";
pub const DASHBOARD_PREPARING: &str = "Dashboard components are being prepared...";
pub const DASHBOARD_NO_INPUT: &str = "None provided";

pub const TEST_POPUP_TITLE: &str = "Test SVG Preview";
pub const TEST_POPUP_DESCRIPTION: &str = "This is a test SVG popup preview. If you like how this looks, we can add similar elements throughout the project.";

/// Named jump targets on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    About,
    Features,
}

/// Which side of a section the illustration sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub anchor: Option<Anchor>,
    /// Large heading above the section ("About", "Features").
    pub heading: Option<&'static str>,
    pub title: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
    pub overlay: OverlayVariant,
    pub art_side: ArtSide,
    /// Background tint of the illustration pane.
    pub tint: Rgb,
}

pub const SECTIONS: [Section; 4] = [
    Section {
        anchor: Some(Anchor::About),
        heading: Some("About"),
        title: "Your AI-Powered GTM Co-Pilot",
        body: "Stop guessing your go-to-market strategy. Signal analyzes thousands of successful companies to deliver data-driven insights tailored to your industry, target market, and business model.",
        cta: "Start strategizing",
        overlay: OverlayVariant::About,
        art_side: ArtSide::Left,
        tint: Rgb::new(0x1c, 0x2b, 0x3a),
    },
    Section {
        anchor: Some(Anchor::Features),
        heading: Some("Features"),
        title: "Deploy Winning GTM Strategies in Minutes",
        body: "From product launches to market expansion, Signal delivers battle-tested go-to-market strategies used by unicorns and industry leaders. Simply describe your goal, get instant actionable plans.",
        cta: "Launch faster",
        overlay: OverlayVariant::Strategy,
        art_side: ArtSide::Right,
        tint: Rgb::new(0x2a, 0x1f, 0x3d),
    },
    Section {
        anchor: None,
        heading: None,
        title: "Market Intelligence That Drives Revenue",
        body: "Access real-time market data, competitor analysis, and customer insights. Signal's AI identifies untapped opportunities and warns you about market threats before they impact your bottom line.",
        cta: "Analyze market",
        overlay: OverlayVariant::Analytics,
        art_side: ArtSide::Left,
        tint: Rgb::new(0x12, 0x30, 0x24),
    },
    Section {
        anchor: None,
        heading: None,
        title: "High-Intent Leads, Delivered Daily",
        body: "Signal's AI scours the market to identify prospects actively seeking solutions like yours. Get qualified leads with verified contact info, buying signals, and personalized outreach strategies.",
        cta: "Get leads",
        overlay: OverlayVariant::Leads,
        art_side: ArtSide::Right,
        tint: Rgb::new(0x3a, 0x22, 0x14),
    },
];

/// Index into [`SECTIONS`] of the section carrying `anchor`.
pub fn section_index(anchor: Anchor) -> usize {
    SECTIONS
        .iter()
        .position(|s| s.anchor == Some(anchor))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_point_at_their_sections() {
        assert_eq!(section_index(Anchor::About), 0);
        assert_eq!(section_index(Anchor::Features), 1);
    }

    #[test]
    fn every_section_has_a_cta() {
        let ctas: Vec<&str> = SECTIONS.iter().map(|s| s.cta).collect();
        assert_eq!(
            ctas,
            ["Start strategizing", "Launch faster", "Analyze market", "Get leads"]
        );
    }

    #[test]
    fn illustrations_alternate_sides() {
        for pair in SECTIONS.windows(2) {
            assert_ne!(pair[0].art_side, pair[1].art_side);
        }
    }
}
