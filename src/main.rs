use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_VALIDATION: i32 = 2;
const EXIT_COMPUTE: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score indicator records and rank regions by risk (default if no subcommand)
    Assess {
        /// Path to an indicator file (JSON or YAML). Reads JSON from stdin if omitted.
        input: Option<PathBuf>,
    },
    /// Print a sample indicator record as JSON
    Template,
}

#[derive(Parser, Debug)]
#[command(name = "famine-watch")]
#[command(about = "Famine risk assessment from regional indicators", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (per-region detail view)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit assessments as a JSON array
    #[arg(long, global = true)]
    json: bool,

    /// Emit assessments as tab-separated values
    #[arg(long, global = true)]
    tsv: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Assess { input: None });
    let start_time = Instant::now();

    let input = match command {
        Commands::Template => {
            match serde_json::to_string_pretty(&famine_watch::input::sample_record()) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to render template: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Assess { input } => input,
    };

    // Load indicator records
    let records = match famine_watch::input::load_records(input) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if records.is_empty() {
        eprintln!("No indicator records found in input.");
        eprintln!("Run 'famine-watch template' for a sample record.");
        std::process::exit(EXIT_INPUT);
    }

    if cli.verbose {
        eprintln!("Loaded {} indicator records", records.len());
    }

    // Validate every record before scoring any. All violations are
    // reported at once.
    let mut violations = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if let Err(errors) = famine_watch::scoring::validate_record(record) {
            for error in errors {
                violations.push(format!("record {} ({}): {}", i + 1, record.region, error));
            }
        }
    }
    if !violations.is_empty() {
        eprintln!("Invalid indicator records:");
        for violation in violations {
            eprintln!("  - {}", violation);
        }
        std::process::exit(EXIT_VALIDATION);
    }

    // Score each record. The log sink is constructed once and shared.
    let log = famine_watch::observe::StderrLog;
    let mut assessments = Vec::new();
    for record in &records {
        match famine_watch::scoring::predict(record, &log) {
            Ok(assessment) => assessments.push(assessment),
            Err(e) => {
                eprintln!("Scoring error: {}", e);
                std::process::exit(EXIT_COMPUTE);
            }
        }
    }

    // Sort by score descending, then by region name for ties
    assessments.sort_by(|a, b| {
        let score_cmp = b
            .risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal);
        if score_cmp != std::cmp::Ordering::Equal {
            return score_cmp;
        }
        a.region.cmp(&b.region)
    });

    if cli.json {
        match serde_json::to_string_pretty(&assessments) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize assessments: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else if cli.tsv {
        println!("{}", famine_watch::output::format_tsv(&assessments));
    } else {
        let use_colors = famine_watch::output::should_use_colors();
        if cli.verbose {
            for assessment in &assessments {
                println!(
                    "{}",
                    famine_watch::output::format_assessment_detail(assessment, use_colors)
                );
                println!();
            }
        } else {
            println!(
                "{}",
                famine_watch::output::format_assessment_table(&assessments, use_colors)
            );
        }
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Total: {} regions in {:?}",
            assessments.len(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
