// nurse_kg - synthetic nurse well-being data generator

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nurse_kg::{
    config::{check_count, parse_date},
    run_graph, run_workforce, GraphConfig, RunReport, WorkforceConfig,
};

#[derive(Parser)]
#[command(name = "nurse_kg", version, about = "Generate synthetic nurse well-being datasets as CSV")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Knowledge-graph nodes and relationships
    Graph(GraphArgs),
    /// Shift and wellbeing survey tables
    Workforce(WorkforceArgs),
}

#[derive(Args)]
struct GraphArgs {
    #[arg(long, allow_negative_numbers = true)]
    nurses: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    clinics: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    incidents: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    comments: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    teams: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    interventions: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    families: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    posts: Option<i64>,
    #[arg(long)]
    output_dir: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// "Today" for incident dates, YYYY-MM-DD
    #[arg(long)]
    reference_date: Option<String>,
}

#[derive(Args)]
struct WorkforceArgs {
    #[arg(long, allow_negative_numbers = true)]
    nurses: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    supervisors: Option<i64>,
    #[arg(long)]
    output_dir: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let report = match cli.command {
        Command::Graph(args) => run_graph(&graph_config(args)?)?,
        Command::Workforce(args) => run_workforce(&workforce_config(args)?)?,
    };
    print_summary(&report);
    Ok(())
}

/// Environment first, then command-line flags on top
fn graph_config(args: GraphArgs) -> anyhow::Result<GraphConfig> {
    let mut config = GraphConfig::from_env()?;
    let counts = &mut config.counts;
    let overrides = [
        ("--nurses", args.nurses, &mut counts.nurses),
        ("--clinics", args.clinics, &mut counts.clinics),
        ("--incidents", args.incidents, &mut counts.incidents),
        ("--comments", args.comments, &mut counts.comments),
        ("--teams", args.teams, &mut counts.teams),
        ("--interventions", args.interventions, &mut counts.interventions),
        ("--families", args.families, &mut counts.families),
        ("--posts", args.posts, &mut counts.posts),
    ];
    for (flag, value, slot) in overrides {
        if let Some(value) = value {
            *slot = check_count(flag, value)?;
        }
    }

    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(raw) = args.reference_date {
        config.reference_date = Some(parse_date("--reference-date", &raw)?);
    }
    config.validate()?;
    Ok(config)
}

fn workforce_config(args: WorkforceArgs) -> anyhow::Result<WorkforceConfig> {
    let mut config = WorkforceConfig::from_env()?;
    if let Some(value) = args.nurses {
        config.nurses = check_count("--nurses", value)?;
    }
    if let Some(value) = args.supervisors {
        config.supervisors = check_count("--supervisors", value)?;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

fn print_summary(report: &RunReport) {
    println!("\n✅ {} files written to {}", report.files_written(), report.output_dir.display());
    for entry in &report.collections {
        match &entry.file {
            Some(file) => println!("  - {} ({} records)", file, entry.rows),
            None => println!("  - {} skipped (empty)", entry.name),
        }
    }
    if !report.warnings.is_empty() {
        println!("⚠️  {} warning(s)", report.warnings.len());
    }
    println!("📊 {} records total, manifest at {}", report.total_rows(), report.manifest_path.display());
}
