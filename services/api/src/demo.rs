use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use ecom_score::config::AppConfig;
use ecom_score::error::AppError;
use ecom_score::report::{
    gauge_bands, present, render_document, DocumentRenderer, PlainTextRenderer,
};
use ecom_score::scoring::{KpiInput, ScoringEngine};
use ecom_score::service::{ConsentError, ScoreServiceError};
use ecom_score::session::Handle;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Monthly revenue excluding tax, in currency units
    #[arg(long, default_value_t = 10_000.0)]
    monthly_revenue: f64,
    /// Conversion rate, percent
    #[arg(long, default_value_t = 2.0)]
    conversion_rate: f64,
    /// Average order value, in currency units
    #[arg(long, default_value_t = 50.0)]
    avg_order_value: f64,
    /// Average cost per click across ad platforms
    #[arg(long, default_value_t = 1.0)]
    cost_per_click: f64,
    /// Cart abandonment rate, percent
    #[arg(long, default_value_t = 60.0)]
    cart_abandonment: f64,
    /// Monthly organic visits (optional)
    #[arg(long, default_value_t = 5_000)]
    organic_traffic: u64,
    /// Accept that the submitted data is used to generate the report
    #[arg(long)]
    consent: bool,
    /// Contact handle (@username); renders the printable report when given
    #[arg(long)]
    handle: Option<String>,
    /// Write the report artifact to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    if !args.consent {
        return Err(ScoreServiceError::from(ConsentError).into());
    }

    let input = KpiInput {
        monthly_revenue: args.monthly_revenue,
        conversion_rate: args.conversion_rate,
        avg_order_value: args.avg_order_value,
        cost_per_click: args.cost_per_click,
        cart_abandonment_rate: args.cart_abandonment,
        organic_traffic: args.organic_traffic,
    };

    let engine = ScoringEngine::standard();
    let result = engine
        .score(&input)
        .map_err(ScoreServiceError::from)?;
    let payload = present(&result);

    println!("E-commerce health score");
    println!(
        "Score: {}/100 ({}, {})",
        payload.score,
        payload.tier_label,
        payload.color.label()
    );
    println!("{}", payload.message);

    println!("\nGauge bands");
    for band in gauge_bands() {
        println!("- [{:>3}, {:>3}) {}", band.from, band.to, band.color.label());
    }

    println!("\nScore breakdown");
    for component in &payload.components {
        println!("- {}: +{}", component.metric.label(), component.points);
    }

    if payload.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &payload.recommendations {
            println!("- {recommendation}");
        }
    }

    if let Some(raw_handle) = args.handle {
        let handle = Handle::parse(&raw_handle).map_err(ScoreServiceError::from)?;
        let config = AppConfig::load()?;
        let document = render_document(
            &result,
            &handle,
            Local::now().date_naive(),
            &config.report.booking_url,
        );
        let artifact = PlainTextRenderer::default()
            .render(&document)
            .map_err(ScoreServiceError::from)?;

        match args.output {
            Some(path) => {
                std::fs::write(&path, artifact)?;
                println!("\nReport written to {}", path.display());
            }
            None => {
                println!("\n--- Report ---");
                for line in &document.lines {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}
