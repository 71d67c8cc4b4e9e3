pub mod document;

pub use document::{render_document, DocumentRenderer, PlainTextRenderer, RenderError, ReportDocument};

use crate::scoring::{HealthTier, ScoreComponent, ScoringResult};
use serde::Serialize;

/// Color token handed to the gauge widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Green,
    Orange,
    Red,
}

impl ColorToken {
    pub const fn label(self) -> &'static str {
        match self {
            ColorToken::Green => "green",
            ColorToken::Orange => "orange",
            ColorToken::Red => "red",
        }
    }
}

const fn tier_color(tier: HealthTier) -> ColorToken {
    match tier {
        HealthTier::Excellent => ColorToken::Green,
        HealthTier::Healthy => ColorToken::Orange,
        HealthTier::AtRisk => ColorToken::Red,
    }
}

/// Everything the display collaborator needs to render one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPayload {
    pub score: u8,
    pub tier: HealthTier,
    pub tier_label: &'static str,
    pub color: ColorToken,
    pub message: &'static str,
    pub recommendations: Vec<&'static str>,
    pub components: Vec<ScoreComponent>,
}

/// Map a scoring result to its display payload. Pure lookup, no computation.
pub fn present(result: &ScoringResult) -> DisplayPayload {
    DisplayPayload {
        score: result.score,
        tier: result.tier,
        tier_label: result.tier.label(),
        color: tier_color(result.tier),
        message: result.tier.message(),
        recommendations: result.recommendations.clone(),
        components: result.components.clone(),
    }
}

/// One fixed color band of the gauge widget. `range` is half-open except for
/// the final band, which includes 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeBand {
    pub from: u8,
    pub to: u8,
    pub color: ColorToken,
}

/// The gauge's three bands, matching the tier boundaries exactly.
pub const fn gauge_bands() -> [GaugeBand; 3] {
    [
        GaugeBand {
            from: 0,
            to: 50,
            color: ColorToken::Red,
        },
        GaugeBand {
            from: 50,
            to: 80,
            color: ColorToken::Orange,
        },
        GaugeBand {
            from: 80,
            to: 100,
            color: ColorToken::Green,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{KpiInput, ScoringEngine};

    fn scored(input: &KpiInput) -> ScoringResult {
        ScoringEngine::standard()
            .score(input)
            .expect("input in domain")
    }

    #[test]
    fn present_maps_tiers_to_fixed_colors() {
        let excellent = scored(&KpiInput {
            monthly_revenue: 60_000.0,
            conversion_rate: 4.0,
            avg_order_value: 120.0,
            cost_per_click: 0.5,
            cart_abandonment_rate: 30.0,
            organic_traffic: 12_000,
        });
        let payload = present(&excellent);
        assert_eq!(payload.color, ColorToken::Green);
        assert_eq!(payload.tier_label, "Excellent");

        let at_risk = scored(&KpiInput {
            monthly_revenue: 5_000.0,
            conversion_rate: 1.0,
            avg_order_value: 20.0,
            cost_per_click: 2.0,
            cart_abandonment_rate: 80.0,
            organic_traffic: 1_000,
        });
        let payload = present(&at_risk);
        assert_eq!(payload.color, ColorToken::Red);
        assert_eq!(payload.message, HealthTier::AtRisk.message());
    }

    #[test]
    fn gauge_bands_match_tier_boundaries() {
        let bands = gauge_bands();
        assert_eq!(bands[0].to, 50);
        assert_eq!(bands[1].from, 50);
        assert_eq!(bands[1].to, 80);
        assert_eq!(bands[2].from, 80);
        for band in bands {
            assert_eq!(
                band.color,
                tier_color(HealthTier::from_score(band.from)),
                "band starting at {} must carry the tier color",
                band.from
            );
        }
    }
}
