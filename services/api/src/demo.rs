use crate::infra::InMemoryMetricsSource;
use chrono::Utc;
use clap::Args;
use seller_health::config::AppConfig;
use seller_health::error::AppError;
use seller_health::health::{
    HealthDimension, SellerHealthEngine, SellerHealthReport, SellerHealthService,
    SellerRawMetrics, ShopId,
};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a metrics snapshot (reads stdin when omitted)
    #[arg(long)]
    pub(crate) metrics: Option<PathBuf>,
    /// Pretty-print the JSON result
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only report on this demo shop
    #[arg(long)]
    pub(crate) shop: Option<String>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = match args.metrics {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let output = score_json(&SellerHealthEngine::new(config.weights), &raw, args.pretty)?;
    println!("{output}");
    Ok(())
}

pub(crate) fn score_json(
    engine: &SellerHealthEngine,
    raw: &str,
    pretty: bool,
) -> Result<String, AppError> {
    let metrics: SellerRawMetrics = serde_json::from_str(raw)?;
    let result = engine.evaluate(&metrics);
    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(output)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let source = Arc::new(InMemoryMetricsSource::with_demo_shops());
    let service = SellerHealthService::new(source.clone(), SellerHealthEngine::new(config.weights));

    let shop_ids = match args.shop {
        Some(shop) => vec![ShopId(shop)],
        None => source.shop_ids(),
    };

    println!("Seller health demo");
    let now = Utc::now();
    for shop_id in shop_ids {
        let report = service.evaluate(&shop_id, now)?;
        print!("{}", render_report(&report));
    }

    Ok(())
}

pub(crate) fn render_report(report: &SellerHealthReport) -> String {
    let health = &report.health;
    let mut out = format!(
        "\n{} -> {}/100\n  Window: recent since {}, stale before {}\n",
        report.shop_id,
        health.score,
        report.window.recent_since.format("%Y-%m-%d %H:%M"),
        report.window.stale_pending_before.format("%Y-%m-%d %H:%M")
    );

    for dimension in HealthDimension::ALL {
        out.push_str(&format!(
            "  - {}: {}\n",
            dimension.label(),
            health.breakdown.get(dimension)
        ));
    }

    out.push_str("  Suggestions:\n");
    for suggestion in &health.suggestions {
        out.push_str(&format!("    * {} ({})\n", suggestion.text, suggestion.href));
    }

    out
}
