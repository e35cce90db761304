mod generate;
mod init_config;
mod schema;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yarndb-seed")]
#[command(version)]
#[command(
    about = "Generate relationally-consistent fixture data and a YarnDB population script",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate records, per-type YAML files and the population script
    Generate {
        /// YAML run configuration (see `init-config`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for records_<type>.yaml files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Path of the generated population script
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Records per type as KIND=N (repeatable, e.g. --count users=50)
        #[arg(long = "count", value_name = "KIND=N")]
        counts: Vec<String>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Database CLI invoked by the script
        #[arg(long)]
        db_command: Option<String>,

        /// Skip writing the population script
        #[arg(long)]
        no_script: bool,

        /// Fail if any generated reference is dangling
        #[arg(long)]
        strict: bool,

        /// Generate and check without writing files
        #[arg(long)]
        dry_run: bool,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,

        /// Show progress during generation
        #[arg(short, long)]
        progress: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a commented default run configuration
    InitConfig {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print JSON Schemas for record documents and `generate --json` output
    Schema {
        /// Schema name (all schemas when omitted)
        name: Option<String>,

        /// List available schema names
        #[arg(long, conflicts_with = "name")]
        list: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            config,
            output_dir,
            script,
            counts,
            seed,
            db_command,
            no_script,
            strict,
            dry_run,
            json,
            progress,
            verbose,
        } => generate::run(
            config, output_dir, script, counts, seed, db_command, no_script, strict, dry_run,
            json, progress, verbose,
        ),
        Commands::InitConfig { output, force } => init_config::run(output, force),
        Commands::Schema { name, list } => schema::run(name, list),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "yarndb-seed", &mut io::stdout());
            Ok(())
        }
    }
}
