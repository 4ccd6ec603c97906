//! CLI command definitions, routing, and tracing setup.

use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use lootbuilder_core::pipeline::{self, BuildConfig, BuildResult, ProgressReporter};
use lootbuilder_shared::default_pools_dir;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// lootbuilder — combine loot pool fragments into one loot table.
#[derive(Parser)]
#[command(
    name = "lootbuilder",
    version,
    about = "Combine loot pool fragment files into a single loot table document.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Assemble the pool fragments into raid_level_<level>.json.
    Build {
        /// Raid level naming the output file (prompted for if omitted).
        #[arg(short, long)]
        level: Option<String>,

        /// Directory holding the pool fragment files (defaults to <out>/gen_pools).
        #[arg(short, long)]
        pools_dir: Option<PathBuf>,

        /// Directory the loot table is written into.
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Require every fragment to parse as a JSON object.
        #[arg(long)]
        check: bool,
    },

    /// List the pool fragments the build would include, in collector order.
    List {
        /// Directory holding the pool fragment files (defaults to <out>/gen_pools).
        #[arg(short, long)]
        pools_dir: Option<PathBuf>,

        /// Directory the loot table would be written into.
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "lootbuilder=info",
        1 => "lootbuilder=debug",
        _ => "lootbuilder=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build {
            level,
            pools_dir,
            out,
            check,
        } => cmd_build(level, pools_dir, out, check),
        Command::List { pools_dir, out } => cmd_list(pools_dir, out),
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_build(
    level: Option<String>,
    pools_dir: Option<PathBuf>,
    out: PathBuf,
    check: bool,
) -> Result<()> {
    let level = match level {
        Some(level) => level,
        None => prompt_level()?,
    };

    let pools_dir = pools_dir.unwrap_or_else(|| default_pools_dir(&out));

    info!(
        level = %level,
        pools_dir = %pools_dir.display(),
        "assembling loot table"
    );

    let config = BuildConfig {
        level: level.clone(),
        pools_dir,
        output_dir: out,
        check,
    };

    let reporter = CliProgress::new();
    let result = pipeline::build_table(&config, &reporter)?;

    // Print summary
    println!("Finished");
    println!();
    println!("  Level:  {level}");
    println!("  Pools:  {}", result.pool_count);
    println!("  Path:   {}", result.output_path.display());
    println!("  Time:   {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_list(pools_dir: Option<PathBuf>, out: PathBuf) -> Result<()> {
    let pools_dir = pools_dir.unwrap_or_else(|| default_pools_dir(&out));

    let fragments = lootbuilder_core::collector::collect_fragments(&pools_dir)?;
    for path in &fragments {
        println!("{}", path.display());
    }

    info!(count = fragments.len(), "pool fragments listed");
    Ok(())
}

/// Read the raid level from standard input.
fn prompt_level() -> Result<String> {
    print!("Enter raid level: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.println(name);
        self.spinner.set_message(name.to_string());
    }

    fn fragment_read(&self, path: &str, current: usize, total: usize) {
        self.spinner.set_message(format!(
            "Reading [{current}/{total}] {path}"
        ));
    }

    fn done(&self, _result: &BuildResult) {
        self.spinner.finish_and_clear();
    }
}
