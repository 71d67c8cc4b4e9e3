use ecom_score::report::{gauge_bands, present, ColorToken};
use ecom_score::scoring::{HealthTier, KpiInput, KpiValidationError, ScoringEngine};

fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

#[test]
fn top_performer_scores_one_hundred_with_no_recommendations() {
    let result = engine()
        .score(&KpiInput {
            monthly_revenue: 60_000.0,
            conversion_rate: 4.0,
            avg_order_value: 120.0,
            cost_per_click: 0.5,
            cart_abandonment_rate: 30.0,
            organic_traffic: 12_000,
        })
        .expect("input in domain");

    assert_eq!(result.score, 100);
    assert_eq!(result.tier, HealthTier::Excellent);
    assert!(result.recommendations.is_empty());
}

#[test]
fn bottom_bracket_input_scores_the_floor_with_all_six_recommendations() {
    let result = engine()
        .score(&KpiInput {
            monthly_revenue: 5_000.0,
            conversion_rate: 1.0,
            avg_order_value: 20.0,
            cost_per_click: 2.0,
            cart_abandonment_rate: 80.0,
            organic_traffic: 1_000,
        })
        .expect("input in domain");

    assert_eq!(result.score, 25);
    assert_eq!(result.tier, HealthTier::AtRisk);
    assert_eq!(result.recommendations.len(), 6);
}

#[test]
fn every_score_stays_within_the_rubric_range() {
    // Sweep one bracket combination per rule around the thresholds.
    let revenues = [5_000.0, 30_000.0, 60_000.0];
    let conversions = [1.0, 2.0, 4.0];
    let order_values = [20.0, 60.0, 120.0];
    let clicks = [0.5, 1.0, 2.0];
    let abandonments = [30.0, 60.0, 80.0];
    let traffics = [1_000, 6_000, 12_000];

    let engine = engine();
    for revenue in revenues {
        for conversion in conversions {
            for order_value in order_values {
                for click in clicks {
                    for abandonment in abandonments {
                        for traffic in traffics {
                            let result = engine
                                .score(&KpiInput {
                                    monthly_revenue: revenue,
                                    conversion_rate: conversion,
                                    avg_order_value: order_value,
                                    cost_per_click: click,
                                    cart_abandonment_rate: abandonment,
                                    organic_traffic: traffic,
                                })
                                .expect("input in domain");
                            assert!(
                                (25..=100).contains(&result.score),
                                "score {} escaped the rubric range",
                                result.score
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn rerunning_identical_input_yields_identical_results() {
    let input = KpiInput {
        monthly_revenue: 25_000.0,
        conversion_rate: 2.5,
        avg_order_value: 75.0,
        cost_per_click: 1.2,
        cart_abandonment_rate: 55.0,
        organic_traffic: 7_500,
    };
    let engine = engine();
    let first = engine.score(&input).expect("input in domain");
    let second = engine.score(&input).expect("input in domain");
    assert_eq!(first, second);
}

#[test]
fn mid_tier_store_lands_in_healthy() {
    let result = engine()
        .score(&KpiInput {
            monthly_revenue: 25_000.0,
            conversion_rate: 2.5,
            avg_order_value: 75.0,
            cost_per_click: 1.2,
            cart_abandonment_rate: 55.0,
            organic_traffic: 7_500,
        })
        .expect("input in domain");

    // 15 + 10 + 10 + 10 + 10 + 5
    assert_eq!(result.score, 60);
    assert_eq!(result.tier, HealthTier::Healthy);
    assert!(result.recommendations.is_empty());
}

#[test]
fn negative_revenue_is_rejected_at_the_boundary() {
    let result = engine().score(&KpiInput {
        monthly_revenue: -500.0,
        conversion_rate: 2.0,
        avg_order_value: 50.0,
        cost_per_click: 1.0,
        cart_abandonment_rate: 60.0,
        organic_traffic: 5_000,
    });
    assert!(matches!(result, Err(KpiValidationError::Negative { .. })));
}

#[test]
fn display_payload_color_tracks_the_gauge_band() {
    let engine = engine();
    let result = engine
        .score(&KpiInput {
            monthly_revenue: 25_000.0,
            conversion_rate: 2.5,
            avg_order_value: 75.0,
            cost_per_click: 1.2,
            cart_abandonment_rate: 55.0,
            organic_traffic: 7_500,
        })
        .expect("input in domain");
    let payload = present(&result);

    let band = gauge_bands()
        .into_iter()
        .find(|band| payload.score >= band.from && (payload.score < band.to || band.to == 100))
        .expect("score falls inside a band");
    assert_eq!(payload.color, band.color);
    assert_eq!(payload.color, ColorToken::Orange);
}
