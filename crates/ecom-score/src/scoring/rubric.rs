use super::domain::{KpiInput, KpiMetric};
use super::ScoreComponent;

pub(crate) const REVENUE_RECOMMENDATION: &str =
    "Grow revenue with local SEO or tightly targeted paid social campaigns.";
pub(crate) const FUNNEL_RECOMMENDATION: &str =
    "Optimize your conversion funnel (simplified checkout, trust badges).";
pub(crate) const UPSELL_RECOMMENDATION: &str =
    "Offer upsells or bundles to raise the average order value.";
pub(crate) const AD_TARGETING_RECOMMENDATION: &str =
    "Review your ad targeting to reduce cost per click and improve ROAS.";
pub(crate) const CART_RECOVERY_RECOMMENDATION: &str =
    "Add email/SMS follow-ups to recover abandoned carts.";
pub(crate) const SEO_RECOMMENDATION: &str =
    "Invest in local SEO to grow organic traffic.";

/// Whether a metric scores better when it rises or when it falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// One rubric entry: a metric selector plus two strict thresholds.
///
/// Values landing in the floor bracket earn the floor points and attach the
/// rule's recommendation; the stronger brackets never recommend anything.
pub(crate) struct ScoreRule {
    pub metric: KpiMetric,
    pub select: fn(&KpiInput) -> f64,
    pub direction: Direction,
    pub strong_threshold: f64,
    pub strong_points: u8,
    pub fair_threshold: f64,
    pub fair_points: u8,
    pub floor_points: u8,
    pub recommendation: &'static str,
}

impl ScoreRule {
    pub(crate) fn evaluate(&self, input: &KpiInput) -> ScoreComponent {
        let value = (self.select)(input);
        let strong = match self.direction {
            Direction::HigherIsBetter => value > self.strong_threshold,
            Direction::LowerIsBetter => value < self.strong_threshold,
        };
        let fair = match self.direction {
            Direction::HigherIsBetter => value > self.fair_threshold,
            Direction::LowerIsBetter => value < self.fair_threshold,
        };

        let (points, recommendation) = if strong {
            (self.strong_points, None)
        } else if fair {
            (self.fair_points, None)
        } else {
            (self.floor_points, Some(self.recommendation))
        };

        ScoreComponent {
            metric: self.metric,
            points,
            recommendation,
        }
    }
}

/// The standard rubric, in fixed evaluation order. Comparisons are strict;
/// boundary values fall into the lower bracket. The organic-traffic rule is
/// the only one with a zero-point floor.
pub(crate) fn standard_rules() -> [ScoreRule; 6] {
    [
        ScoreRule {
            metric: KpiMetric::MonthlyRevenue,
            select: |input| input.monthly_revenue,
            direction: Direction::HigherIsBetter,
            strong_threshold: 50_000.0,
            strong_points: 25,
            fair_threshold: 20_000.0,
            fair_points: 15,
            floor_points: 5,
            recommendation: REVENUE_RECOMMENDATION,
        },
        ScoreRule {
            metric: KpiMetric::ConversionRate,
            select: |input| input.conversion_rate,
            direction: Direction::HigherIsBetter,
            strong_threshold: 3.0,
            strong_points: 20,
            fair_threshold: 1.5,
            fair_points: 10,
            floor_points: 5,
            recommendation: FUNNEL_RECOMMENDATION,
        },
        ScoreRule {
            metric: KpiMetric::AvgOrderValue,
            select: |input| input.avg_order_value,
            direction: Direction::HigherIsBetter,
            strong_threshold: 100.0,
            strong_points: 15,
            fair_threshold: 50.0,
            fair_points: 10,
            floor_points: 5,
            recommendation: UPSELL_RECOMMENDATION,
        },
        ScoreRule {
            metric: KpiMetric::CostPerClick,
            select: |input| input.cost_per_click,
            direction: Direction::LowerIsBetter,
            strong_threshold: 0.8,
            strong_points: 15,
            fair_threshold: 1.5,
            fair_points: 10,
            floor_points: 5,
            recommendation: AD_TARGETING_RECOMMENDATION,
        },
        ScoreRule {
            metric: KpiMetric::CartAbandonment,
            select: |input| input.cart_abandonment_rate,
            direction: Direction::LowerIsBetter,
            strong_threshold: 50.0,
            strong_points: 15,
            fair_threshold: 70.0,
            fair_points: 10,
            floor_points: 5,
            recommendation: CART_RECOVERY_RECOMMENDATION,
        },
        ScoreRule {
            metric: KpiMetric::OrganicTraffic,
            select: |input| input.organic_traffic as f64,
            direction: Direction::HigherIsBetter,
            strong_threshold: 10_000.0,
            strong_points: 10,
            fair_threshold: 5_000.0,
            fair_points: 5,
            floor_points: 0,
            recommendation: SEO_RECOMMENDATION,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with_revenue(monthly_revenue: f64) -> KpiInput {
        KpiInput {
            monthly_revenue,
            conversion_rate: 2.0,
            avg_order_value: 60.0,
            cost_per_click: 1.0,
            cart_abandonment_rate: 60.0,
            organic_traffic: 6_000,
        }
    }

    #[test]
    fn rubric_points_sum_to_the_documented_range() {
        let rules = standard_rules();
        let ceiling: u32 = rules.iter().map(|rule| rule.strong_points as u32).sum();
        let floor: u32 = rules.iter().map(|rule| rule.floor_points as u32).sum();
        assert_eq!(ceiling, 100);
        assert_eq!(floor, 25);
    }

    #[test]
    fn boundary_values_fall_into_the_lower_bracket() {
        let rules = standard_rules();

        let revenue_rule = &rules[0];
        let at_fair_edge = revenue_rule.evaluate(&input_with_revenue(20_000.0));
        assert_eq!(at_fair_edge.points, 5);
        assert_eq!(at_fair_edge.recommendation, Some(REVENUE_RECOMMENDATION));

        let traffic_rule = &rules[5];
        let mut input = input_with_revenue(10_000.0);
        input.organic_traffic = 5_000;
        let component = traffic_rule.evaluate(&input);
        assert_eq!(component.points, 0);
        assert_eq!(component.recommendation, Some(SEO_RECOMMENDATION));
    }

    #[test]
    fn lower_is_better_rules_reward_cheap_clicks() {
        let rules = standard_rules();
        let cpc_rule = &rules[3];

        let mut input = input_with_revenue(10_000.0);
        input.cost_per_click = 0.5;
        assert_eq!(cpc_rule.evaluate(&input).points, 15);

        input.cost_per_click = 1.2;
        assert_eq!(cpc_rule.evaluate(&input).points, 10);

        input.cost_per_click = 2.0;
        let component = cpc_rule.evaluate(&input);
        assert_eq!(component.points, 5);
        assert_eq!(component.recommendation, Some(AD_TARGETING_RECOMMENDATION));
    }
}
