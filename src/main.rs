use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use report_wizard::engine::aggregate::{AggregationSpec, GroupSpec};
use report_wizard::engine::errors::WizardError;
use report_wizard::engine::load;
use report_wizard::engine::state::ReportState;
use report_wizard::logging;
use report_wizard::shared::config::{CONFIG, load_settings};
use report_wizard::shared::response::OutputFormat;

#[derive(Parser)]
#[command(name = "report_wizard")]
#[command(about = "Group and aggregate tabular records into a report", long_about = None)]
struct Args {
    /// JSON array (`.json`) or delimited text file to load
    #[arg(short, long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Use a generated sample dataset instead of a file; the row count defaults to
    /// `loader.sample_rows`
    #[arg(long, num_args = 0..=1)]
    sample: Option<Option<usize>>,

    /// Group-by dimension as `field[:asc|desc]`, repeatable; order sets sort precedence
    #[arg(short, long = "group-by")]
    group_by: Vec<String>,

    /// Aggregation as `function:field[:alias]`, repeatable
    #[arg(short, long)]
    agg: Vec<String>,

    /// Cap on the number of distinct groups
    #[arg(long)]
    max_groups: Option<usize>,

    /// Output format: json or table
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_group(raw: &str) -> Result<GroupSpec> {
    GroupSpec::parse_with_default(raw, CONFIG.grouping.default_sort_order)
        .with_context(|| format!("bad --group-by '{}'", raw))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // A missing file means defaults; a file that fails to parse is fatal
    load_settings()
        .map_err(WizardError::from)
        .context("failed to load settings")?;

    if args.print_config {
        print!("{}", toml::to_string_pretty(&**CONFIG)?);
        return Ok(());
    }

    logging::init()?;

    let groups = args
        .group_by
        .iter()
        .map(|g| parse_group(g))
        .collect::<Result<Vec<_>>>()?;
    let aggregations = args
        .agg
        .iter()
        .map(|a| {
            a.parse::<AggregationSpec>()
                .with_context(|| format!("bad --agg '{}'", a))
        })
        .collect::<Result<Vec<_>>>()?;
    let format: OutputFormat = args.format.parse()?;

    let dataset = match (&args.input, args.sample) {
        (Some(path), _) => load::from_path(path, CONFIG.loader.delimiter_byte())
            .inspect_err(|e| e.log_error())
            .with_context(|| format!("failed to load {}", path.display()))?,
        (None, Some(rows)) => load::sample_dataset(
            rows.unwrap_or(CONFIG.loader.sample_rows),
            CONFIG.loader.sample_seed,
        ),
        (None, None) => anyhow::bail!("either --input or --sample is required"),
    };

    let mut state =
        ReportState::new().with_group_limit(args.max_groups.or(CONFIG.grouping.max_groups));
    state.load(dataset);
    for group in groups {
        state.add_group(group);
    }
    for agg in aggregations {
        state.add_aggregation(agg);
    }

    let result = state.apply();
    info!(rows = result.rows.len(), "Report ready");

    let out = format.renderer().render(result);
    std::io::stdout().lock().write_all(&out)?;
    Ok(())
}
