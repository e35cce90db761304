//! Seed command: generate a fixture database, write it out per record type
//! and emit the population script.

mod config;

pub use config::{
    default_config_yaml, SeedYamlConfig, DEFAULT_DB_COMMAND, DEFAULT_OUTPUT_DIR, DEFAULT_SCRIPT,
};

use crate::script::CommandScript;
use crate::writer::RecordWriter;
use anyhow::Context;
use chrono::NaiveDateTime;
use dataset_gen::{Counts, Database, Generator};
use indicatif::{ProgressBar, ProgressStyle};
use schemars::JsonSchema;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for a seed run
#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Records to generate per kind
    pub counts: Counts,
    /// Directory for the per-kind YAML files
    pub output_dir: PathBuf,
    /// Population script path (None skips the script)
    pub script: Option<PathBuf>,
    /// Database CLI the script invokes
    pub db_command: String,
    /// Random seed for reproducibility
    pub seed: u64,
    /// End of the date windows (None = now)
    pub now: Option<NaiveDateTime>,
    /// Generate and check only, write nothing
    pub dry_run: bool,
    /// Show progress
    pub progress: bool,
    /// Fail if any reference is dangling
    pub strict: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            counts: Counts::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            script: Some(PathBuf::from(DEFAULT_SCRIPT)),
            db_command: DEFAULT_DB_COMMAND.to_string(),
            seed: rand::random(),
            now: None,
            dry_run: false,
            progress: false,
            strict: false,
        }
    }
}

/// Statistics from a seed run
#[derive(Debug, Default, Serialize, JsonSchema)]
pub struct SeedStats {
    /// Seed the run used
    pub seed: u64,
    /// Records generated across all kinds
    pub total_records: usize,
    /// Per-kind statistics, in generation order
    pub kinds: Vec<KindStats>,
    /// Script path, if one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// References naming an absent record
    pub dangling_references: Vec<String>,
    pub dry_run: bool,
}

/// Per-kind statistics
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct KindStats {
    pub kind: String,
    pub records: usize,
    /// Record file, if one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Generate the database described by `options` without writing anything
pub fn generate(options: &SeedOptions) -> Database {
    let progress_bar = if options.progress {
        let pb = ProgressBar::new(options.counts.total() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        Some(pb)
    } else {
        None
    };

    let mut generator = match options.now {
        Some(now) => Generator::with_seed_at(options.seed, now),
        None => Generator::new(options.seed),
    };

    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        generator = generator.with_progress(move |kind, _done, _total| {
            pb_clone.set_message(format!("({})", kind));
            pb_clone.inc(1);
        });
    }

    let database = generator.generate(&options.counts);

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    database
}

/// Run a seed: generate, check references, then write files and script
pub fn run(options: SeedOptions) -> anyhow::Result<SeedStats> {
    if options.progress {
        eprintln!(
            "Generating {} records (seed {}) into '{}'",
            options.counts.total(),
            options.seed,
            options.output_dir.display()
        );
    }

    let database = generate(&options);

    let mut stats = SeedStats {
        seed: options.seed,
        total_records: database.total_records(),
        kinds: database
            .sets()
            .iter()
            .map(|set| KindStats {
                kind: set.kind().to_string(),
                records: set.len(),
                file: None,
            })
            .collect(),
        script: None,
        dangling_references: database
            .dangling_references()
            .iter()
            .map(ToString::to_string)
            .collect(),
        dry_run: options.dry_run,
    };

    if options.strict && !stats.dangling_references.is_empty() {
        anyhow::bail!(
            "{} dangling references, first: {}",
            stats.dangling_references.len(),
            stats.dangling_references[0]
        );
    }

    if options.dry_run {
        return Ok(stats);
    }

    let writer = RecordWriter::new(options.output_dir.clone());
    let written = writer
        .write_all(&database)
        .with_context(|| format!("Cannot write records to {}", writer.output_dir().display()))?;
    for (file, kind_stats) in written.iter().zip(stats.kinds.iter_mut()) {
        if options.progress {
            eprintln!(
                "Generated {} {} records in {}",
                file.records,
                file.kind,
                file.path.display()
            );
        }
        kind_stats.file = Some(file.path.display().to_string());
    }

    if let Some(ref script_path) = options.script {
        CommandScript::new(options.db_command.as_str())
            .write(&database, script_path)
            .with_context(|| format!("Cannot write script: {}", script_path.display()))?;
        if options.progress {
            eprintln!("Generated population script: {}", script_path.display());
        }
        stats.script = Some(script_path.display().to_string());
    }

    Ok(stats)
}
