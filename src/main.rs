use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wiscar_fit::scoring::Catalog;

const EXIT_SUCCESS: i32 = 0;
const EXIT_OUTPUT: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Format {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON results record
    Json,
    /// Single tab-separated line of scores
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an answer file and print the results
    Score {
        /// YAML or JSON (by .json extension) list of answers
        answers: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the questions in the effective catalog
    Questions,
    /// Validate the effective catalog and rubric
    Check,
    /// Write the built-in questionnaire to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "wiscar-fit")]
#[command(about = "Career-fit questionnaire scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/wiscar-fit/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("wiscar_fit={}", default_level))
        }))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Load the effective catalog and validate it, exiting on any problem
fn load_catalog_or_exit(config_path: Option<PathBuf>) -> Catalog {
    let config = match wiscar_fit::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let catalog = config.catalog();
    info!(questions = catalog.len(), "catalog loaded");

    if let Err(errors) = wiscar_fit::scoring::validate_catalog(&catalog) {
        eprintln!("Catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    catalog
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);

    match cli.command {
        Commands::Init { force } => {
            let path = match config_path {
                Some(path) => path,
                None => match wiscar_fit::config::get_config_path() {
                    Ok(path) => path,
                    Err(e) => {
                        eprintln!("Config error: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };
            if let Err(e) = wiscar_fit::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default questionnaire to {}", path.display());
        }
        Commands::Check => {
            let catalog = load_catalog_or_exit(config_path);
            println!(
                "Catalog OK: {} questions, {} graded, {} with desirability tables",
                catalog.len(),
                catalog.rubric().answer_key.len(),
                catalog.rubric().desirability.len()
            );
        }
        Commands::Questions => {
            let catalog = load_catalog_or_exit(config_path);
            let use_colors = wiscar_fit::output::should_use_colors();
            println!("{}", wiscar_fit::output::format_catalog(&catalog, use_colors));
        }
        Commands::Score { answers, format } => {
            let catalog = load_catalog_or_exit(config_path);
            let answer_set = match wiscar_fit::assessment::load_answers(&answers) {
                Ok(set) => set,
                Err(e) => {
                    eprintln!("Answers error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            debug!(answers = answer_set.len(), "answers loaded");

            let evaluation = wiscar_fit::scoring::evaluate(&catalog, answer_set.answers());

            if cli.verbose {
                eprintln!(
                    "{}",
                    wiscar_fit::output::format_diagnostics(&evaluation.diagnostics)
                );
                eprintln!(
                    "WISCAR: {}",
                    wiscar_fit::output::format_wiscar_compact(&evaluation.results.scores.wiscar)
                );
                eprintln!();
            }

            let results = &evaluation.results;
            match format {
                Format::Text => {
                    let use_colors = wiscar_fit::output::should_use_colors();
                    println!("{}", wiscar_fit::output::format_report(results, use_colors));
                }
                Format::Json => match wiscar_fit::output::format_json(results) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {}", e);
                        std::process::exit(EXIT_OUTPUT);
                    }
                },
                Format::Tsv => println!("{}", wiscar_fit::output::format_tsv(results)),
            }
        }
    }

    debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
