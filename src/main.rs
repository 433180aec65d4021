//! QADash - Executive QA Report Generator
//!
//! A CLI tool that aggregates API test campaign results into an executive
//! dashboard with per-API detail sections, as Markdown or JSON.
//!
//! Exit codes:
//!   0 - Success (or no --min-success set)
//!   1 - Runtime error (config, invalid dataset, unknown API, write failure)
//!   2 - Global success rate below the --min-success threshold

use anyhow::{bail, Context, Result};
use qadash::analysis::StatusFilter;
use qadash::cli::Args;
use qadash::config::{Config, ReportFormat, DEFAULT_CONFIG_FILE};
use qadash::fixture;
use qadash::models::Dataset;
use qadash::report::{self, DashboardReport, RenderOptions};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("QADash v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Report generation failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .qadash.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", DEFAULT_CONFIG_FILE);
    println!("   Edit it to choose the dataset, output format and recommendations.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the complete report workflow. Returns exit code (0 or 2).
fn run(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Load and validate the dataset
    let dataset = load_dataset(&config)?;
    fixture::validate(&dataset).context("Dataset failed validation")?;
    info!(
        "Dataset \"{}\" validated: {} APIs",
        dataset.title,
        dataset.apis.len()
    );

    if args.validate_only {
        println!("✅ Dataset is valid ({} APIs).", dataset.apis.len());
        return Ok(0);
    }

    if let Some(ref id) = args.api {
        if dataset.api(id).is_none() {
            let known: Vec<_> = dataset.apis.iter().map(|a| a.id.as_str()).collect();
            bail!("Unknown API id '{}' (known: {})", id, known.join(", "));
        }
    }

    // Step 2: Aggregate
    let report = DashboardReport::build(
        &dataset,
        config.report.recommendations,
        config.report.top_recommendations,
    );
    debug!("Dashboard metrics: {:?}", report.metrics);

    // Step 3: Render
    let options = RenderOptions {
        api: args.api.clone(),
        filter: StatusFilter::from(args.filter),
        include_test_cases: config.report.include_test_cases,
        include_endpoints: config.report.include_endpoints,
    };

    let output = match config.report.format {
        ReportFormat::Json => match options.api.as_deref().and_then(|id| report.api(id)) {
            Some(section) => report::generate_json_api_section(section)?,
            None => report::generate_json_report(&report)?,
        },
        ReportFormat::Markdown => report::generate_markdown_report(&report, &options),
    };

    // Step 4: Write
    if args.stdout {
        println!("{}", output);
    } else {
        std::fs::write(&config.general.output, &output)
            .with_context(|| format!("Failed to write report to {}", config.general.output))?;
        print_summary(&report, &config.general.output, args.quiet);
    }

    // Check --min-success threshold
    if let Some(min) = args.min_success {
        let rate = report.metrics.average_success_rate;
        if rate < min {
            eprintln!(
                "\n⛔ Global success rate {}% is below the required {}%. Failing (exit code 2).",
                rate, min
            );
            return Ok(2);
        }
    }

    Ok(0)
}

/// Print a short console summary of the dashboard.
fn print_summary(report: &DashboardReport, output: &str, quiet: bool) {
    if quiet {
        return;
    }

    let metrics = &report.metrics;
    let totals = &report.test_case_totals;

    println!("\n📊 QA Summary:");
    println!("   APIs evaluated: {}", metrics.total_apis);
    println!("   Test cases: {}", metrics.total_tests);
    println!(
        "   - ✅ Pass: {} | ⚠️ Warning: {} | ❌ Fail: {} | ➖ Not tested: {}",
        totals.pass, totals.warning, totals.fail, totals.not_tested
    );
    println!("   Global success rate: {}%", metrics.average_success_rate);
    println!("   Average coverage: {}%", metrics.average_coverage);
    println!("\n✅ Report saved to: {}", output);
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}

/// Load the configured dataset, falling back to the embedded one.
fn load_dataset(config: &Config) -> Result<Dataset> {
    match config.data.path {
        Some(ref path) => {
            fixture::load_dataset(path, &config.data.title, &config.data.report_date)
        }
        None => {
            debug!("No dataset path configured, using embedded dataset");
            fixture::embedded_dataset()
        }
    }
}
