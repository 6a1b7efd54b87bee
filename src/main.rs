use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docmark::config::Config;
use docmark::observer::TracingObserver;
use docmark::provider::JsonModelProvider;
use docmark::sink::{FileSink, FsSink, MemorySink};
use docmark::symbols::SymbolProvider as _;
use docmark::{diagnostics, error, site};

#[derive(Parser)]
#[command(name = "docmark", version, about = "Markdown documentation sites from symbol models")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log progress to stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate package index and type pages from a symbol model
    Generate {
        /// Output directory; blank means the current directory
        #[arg(short = 'd', long = "directory", value_name = "DIR")]
        directory: Option<String>,
        /// Compose every page in memory and print the paths without writing
        #[arg(long)]
        dry_run: bool,
        /// Model file, or directory of .json model files
        model: PathBuf,
    },
    /// Print the page each documented type is written to
    List {
        /// Model file, or directory of .json model files
        model: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate { directory, dry_run, model } => cmd_generate(&model, directory.as_deref(), dry_run),
        Commands::List { model } => cmd_list(&model),
    };

    return match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| return EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the model, then write every page through the chosen sink.
///
/// # Errors
///
/// Returns config, model, or sink errors; the first sink error stops the run.
fn cmd_generate(model: &Path, directory: Option<&str>, dry_run: bool) -> Result<(), error::Error> {
    let mut config = Config::load(Path::new("."))?;
    if let Some(directory) = directory {
        config.set_output(directory);
    }
    let table = JsonModelProvider::new(model).load()?;
    tracing::info!(output = %config.output.display(), "output directory");

    if dry_run {
        let mut sink = MemorySink::new();
        let summary = generate_into(&table, &config, &mut sink)?;
        for path in &summary.pages {
            println!("{}", config.output.join(path).display());
        }
        println!("Would write {} pages for {} packages", summary.pages.len(), summary.packages);
        return Ok(());
    }

    let mut sink = FsSink::new(&config.output);
    let summary = generate_into(&table, &config, &mut sink)?;
    println!(
        "Wrote {} pages for {} packages to {}",
        summary.pages.len(),
        summary.packages,
        config.output.display()
    );
    return Ok(());
}

/// Run the site driver with the tracing observer.
///
/// # Errors
///
/// Returns the first sink error.
fn generate_into(
    table: &docmark::symbols::SymbolTable,
    config: &Config,
    sink: &mut dyn FileSink,
) -> Result<site::SiteSummary, error::Error> {
    return site::generate(table, config, sink, &mut TracingObserver);
}

/// Print one line per documented type: kind and page path.
///
/// # Errors
///
/// Returns config or model errors.
fn cmd_list(model: &Path) -> Result<(), error::Error> {
    let config = Config::load(Path::new("."))?;
    let table = JsonModelProvider::new(model).load()?;

    for package in table.packages() {
        for plan in site::plan_package(&table, package, &config) {
            let kind = table
                .get(plan.id)
                .and_then(|node| return node.kind)
                .map_or("", |kind| return kind.label());
            println!("{kind:<9} {}", plan.path.display());
        }
    }
    return Ok(());
}
