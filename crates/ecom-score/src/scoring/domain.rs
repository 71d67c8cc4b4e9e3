use serde::{Deserialize, Serialize};

/// KPI snapshot collected from the storefront owner before scoring.
///
/// Organic traffic is the only optional field on the intake form; a missing
/// value counts as zero visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiInput {
    pub monthly_revenue: f64,
    pub conversion_rate: f64,
    pub avg_order_value: f64,
    pub cost_per_click: f64,
    pub cart_abandonment_rate: f64,
    #[serde(default)]
    pub organic_traffic: u64,
}

impl KpiInput {
    /// Reject out-of-domain values before they reach the rubric.
    ///
    /// Currency metrics must be finite and non-negative; percentage metrics
    /// must additionally sit inside [0, 100].
    pub fn validate(&self) -> Result<(), KpiValidationError> {
        check_currency(KpiMetric::MonthlyRevenue, self.monthly_revenue)?;
        check_percent(KpiMetric::ConversionRate, self.conversion_rate)?;
        check_currency(KpiMetric::AvgOrderValue, self.avg_order_value)?;
        check_currency(KpiMetric::CostPerClick, self.cost_per_click)?;
        check_percent(KpiMetric::CartAbandonment, self.cart_abandonment_rate)?;
        Ok(())
    }
}

fn check_currency(metric: KpiMetric, value: f64) -> Result<(), KpiValidationError> {
    if !value.is_finite() {
        return Err(KpiValidationError::NonFinite { metric });
    }
    if value < 0.0 {
        return Err(KpiValidationError::Negative { metric, value });
    }
    Ok(())
}

fn check_percent(metric: KpiMetric, value: f64) -> Result<(), KpiValidationError> {
    if !value.is_finite() {
        return Err(KpiValidationError::NonFinite { metric });
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(KpiValidationError::PercentOutOfRange { metric, value });
    }
    Ok(())
}

/// Metrics permitted in the scoring rubric, in rule-evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiMetric {
    MonthlyRevenue,
    ConversionRate,
    AvgOrderValue,
    CostPerClick,
    CartAbandonment,
    OrganicTraffic,
}

impl KpiMetric {
    pub const fn label(self) -> &'static str {
        match self {
            KpiMetric::MonthlyRevenue => "monthly revenue",
            KpiMetric::ConversionRate => "conversion rate",
            KpiMetric::AvgOrderValue => "average order value",
            KpiMetric::CostPerClick => "cost per click",
            KpiMetric::CartAbandonment => "cart abandonment rate",
            KpiMetric::OrganicTraffic => "organic traffic",
        }
    }
}

/// Validation failure raised at the engine boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KpiValidationError {
    #[error("{} must be a finite number", .metric.label())]
    NonFinite { metric: KpiMetric },
    #[error("{} must be non-negative (got {value})", .metric.label())]
    Negative { metric: KpiMetric, value: f64 },
    #[error("{} must be between 0 and 100 percent (got {value})", .metric.label())]
    PercentOutOfRange { metric: KpiMetric, value: f64 },
}

/// Coarse health bucket derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Excellent,
    Healthy,
    AtRisk,
}

impl HealthTier {
    /// Tier boundaries: >= 80 Excellent, >= 50 Healthy, below that AtRisk.
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthTier::Excellent
        } else if score >= 50 {
            HealthTier::Healthy
        } else {
            HealthTier::AtRisk
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent",
            HealthTier::Healthy => "Healthy",
            HealthTier::AtRisk => "At Risk",
        }
    }

    /// Fixed message shown next to the gauge for each tier.
    pub const fn message(self) -> &'static str {
        match self {
            HealthTier::Excellent => "Your store is in excellent health. Keep accelerating!",
            HealthTier::Healthy => "Your store performs well, but there is room to scale.",
            HealthTier::AtRisk => "Risk of slowdown. Optimize quickly!",
        }
    }
}
