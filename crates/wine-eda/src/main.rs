//! CLI entry point for the dataset auditor.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use wine_eda::{export, loader, plots, report, AuditConfig, DatasetAuditor, EdaReport};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory data analysis for wine-quality datasets",
    long_about = "Loads a tabular CSV, removes duplicate rows, audits missing values,\n\
                  classifies per-column skewness, renders charts and exports the\n\
                  cleaned table.\n\n\
                  EXAMPLES:\n  \
                  # Audit a dataset with default outputs\n  \
                  wine-eda -i winequality-red.csv\n\n  \
                  # Custom output directory and boxplot grouping column\n  \
                  wine-eda -i data.csv -o results/ --target quality\n\n  \
                  # Machine-readable output\n  \
                  wine-eda -i data.csv --json | jq .audit.duplicates_removed"
)]
struct Args {
    /// Path to the CSV file to audit
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the cleaned CSV, charts and reports
    #[arg(short, long, default_value = "outputs")]
    output: PathBuf,

    /// Custom name for the cleaned CSV (without extension)
    ///
    /// If not specified, uses "<input_stem>_clean"
    #[arg(long)]
    output_name: Option<String>,

    /// Column used to group the boxplots
    #[arg(short, long, default_value = "quality")]
    target: String,

    /// Number of histogram bins per column
    #[arg(long, default_value = "30")]
    bins: usize,

    /// Number of preview rows printed after loading
    #[arg(long, default_value = "5")]
    preview_rows: usize,

    /// Skip chart rendering
    #[arg(long)]
    no_plots: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the final report)
    #[arg(short, long)]
    quiet: bool,

    /// Output the report as JSON to stdout instead of the console summary
    ///
    /// Disables all logs; only the JSON report is written to stdout.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let mut config_builder = AuditConfig::builder()
        .output_dir(&args.output)
        .target_column(&args.target)
        .histogram_bins(args.bins)
        .preview_rows(args.preview_rows)
        .render_plots(!args.no_plots)
        .emit_report(args.emit_report);

    if let Some(ref name) = args.output_name {
        config_builder = config_builder.cleaned_name(name);
    }

    let config = config_builder.build()?;

    // Load the dataset; any load failure terminates the run here
    info!("Loading dataset from: {}", args.input.display());
    let df = loader::load_table(&args.input)?;
    info!("Dataset loaded successfully: {:?}", df.shape());

    let preview = loader::preview(&df, config.preview_rows);
    let describe = loader::describe(&df)?;

    // Run the audit
    let (cleaned, audit) = DatasetAuditor::audit(&df)?;

    let mut eda_report = EdaReport::new(args.input.display().to_string(), audit);

    // Render charts
    if config.render_plots {
        let histograms = plots::render_histograms(&cleaned, &eda_report.audit, &config)?;
        let boxplots = plots::render_boxplots(&cleaned, &config)?;
        let heatmap = plots::render_heatmap(&eda_report.audit.correlations, &config)?;
        for chart in [&histograms, &boxplots, &heatmap] {
            eda_report.charts.push(chart.display().to_string());
        }
    }

    // Export the cleaned table
    let cleaned_path = export::cleaned_csv_path(&config, &args.input);
    export::write_cleaned_csv(&cleaned, &cleaned_path)?;
    eda_report.cleaned_file = Some(cleaned_path.display().to_string());

    // The report file is written before the --json early return so the
    // two flags compose
    if config.emit_report {
        let input_stem = extract_file_stem(&args.input);
        eda_report.write_to_file(&config.output_dir, &input_stem)?;
    }

    // JSON to stdout: nothing else is printed
    if args.json {
        println!("{}", serde_json::to_string_pretty(&eda_report)?);
        return Ok(());
    }

    report::print_load_summary(&df, &preview, &describe);
    report::print_audit_summary(&eda_report.audit);
    report::print_insights(&eda_report.audit);

    println!();
    println!("Cleaned dataset: {}", cleaned_path.display());
    for chart in &eda_report.charts {
        println!("Chart: {chart}");
    }

    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}
