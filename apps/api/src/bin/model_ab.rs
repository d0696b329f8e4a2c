use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use leadscore_api::config::Config;
use leadscore_api::evaluation::{read_top_leads, run_model_test, write_csv, write_markdown};
use leadscore_api::llm_client::LlmClient;
use leadscore_api::outreach::BrandBrief;
use leadscore_api::scoring::{Language, TargetRegions};

#[derive(Parser, Debug)]
#[command(
    name = "model-ab",
    about = "Compare text-generation models on outreach drafts for the top-ranked leads",
    version
)]
struct Cli {
    /// Comma-separated model list
    #[arg(long, default_value = "gpt-4o-mini,gpt-4.1-mini,gpt-4o")]
    models: String,
    /// Output language
    #[arg(long, default_value = "CN", value_parser = ["CN", "EN"])]
    language: String,
    /// Number of top-scored leads sent to each model
    #[arg(long, default_value_t = 8)]
    top_n: usize,
    /// Lead CSV to score
    #[arg(long, default_value = "sample-data/sample_leads.csv")]
    input: PathBuf,
    #[arg(long, default_value = "AZ,CA,TX,FL,NY")]
    target_states: String,
    #[arg(long, default_value = "Sunny Home")]
    brand_name: String,
    #[arg(
        long,
        default_value = "面向住宅、软装与精品酒店场景的中高端家具与灯具供应方案。"
    )]
    positioning: String,
    #[arg(long, default_value = "专业、务实、可信")]
    tone: String,
    /// Directory for the summary, details and report files
    #[arg(long, default_value = "abtest_output")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "leadscore_api={0},{1}={0}",
                &config.rust_log,
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(api_key) = config.openai_api_key.clone() else {
        bail!("OPENAI_API_KEY is not set");
    };

    let language = Language::parse(&cli.language);
    let targets = TargetRegions::parse(&cli.target_states);
    let leads = read_top_leads(&cli.input, &targets, language, cli.top_n)?;
    if leads.is_empty() {
        bail!("No leads loaded from {}", cli.input.display());
    }
    info!("Loaded {} leads from {}", leads.len(), cli.input.display());

    std::fs::create_dir_all(&cli.output_dir)?;
    let client = LlmClient::new(api_key)?;
    let brief = BrandBrief {
        brand_name: &cli.brand_name,
        positioning: &cli.positioning,
        tone: &cli.tone,
        language,
    };

    let mut details = Vec::new();
    let mut summaries = Vec::new();
    for model in cli.models.split(',').map(str::trim).filter(|m| !m.is_empty()) {
        info!("Testing {model}");
        let (rows, summary) = run_model_test(&client, model, &leads, &brief).await;
        details.extend(rows);
        summaries.push(summary);
    }

    let summary_csv = cli.output_dir.join("model_ab_summary.csv");
    let details_csv = cli.output_dir.join("model_ab_details.csv");
    let report_md = cli.output_dir.join("model_ab_report.md");

    write_csv(&summary_csv, &summaries)?;
    write_csv(&details_csv, &details)?;
    write_markdown(&report_md, &summaries, &details, language)?;

    println!("A/B test complete");
    println!("- Summary: {}", summary_csv.display());
    println!("- Details: {}", details_csv.display());
    println!("- Report: {}", report_md.display());
    Ok(())
}
