mod domain;
mod rubric;

pub use domain::{HealthTier, KpiInput, KpiMetric, KpiValidationError};

use serde::Serialize;

/// Stateless engine folding the fixed rubric over a KPI snapshot.
pub struct ScoringEngine {
    rules: [rubric::ScoreRule; 6],
}

impl ScoringEngine {
    pub fn standard() -> Self {
        Self {
            rules: rubric::standard_rules(),
        }
    }

    /// Score a KPI snapshot, validating at the boundary first.
    ///
    /// Deterministic: identical input always produces an identical result,
    /// with recommendations in rule-evaluation order.
    pub fn score(&self, input: &KpiInput) -> Result<ScoringResult, KpiValidationError> {
        input.validate()?;

        let components: Vec<ScoreComponent> = self
            .rules
            .iter()
            .map(|rule| rule.evaluate(input))
            .collect();

        let score = components
            .iter()
            .map(|component| component.points as u32)
            .sum::<u32>() as u8;

        let recommendations = components
            .iter()
            .filter_map(|component| component.recommendation)
            .collect();

        Ok(ScoringResult {
            score,
            tier: HealthTier::from_score(score),
            recommendations,
            components,
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Discrete contribution of one rubric rule, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub metric: KpiMetric,
    pub points: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
}

/// Composite outcome of one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringResult {
    pub score: u8,
    pub tier: HealthTier,
    pub recommendations: Vec<&'static str>,
    pub components: Vec<ScoreComponent>,
}
