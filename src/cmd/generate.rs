//! Generate command CLI handler.

use crate::seed::{self, SeedOptions, SeedYamlConfig};
use anyhow::Context;
use dataset_gen::{parse_count, Counts};
use std::path::PathBuf;
use std::time::Instant;

/// Resolve counts: config file counts (or the defaults when neither source
/// lists any), extended and overridden by `--count` entries.
fn resolve_counts(config_counts: Option<Counts>, cli_counts: &[String]) -> anyhow::Result<Counts> {
    let mut counts = match config_counts {
        Some(counts) => counts,
        None if cli_counts.is_empty() => Counts::default(),
        None => Counts::empty(),
    };
    for entry in cli_counts {
        let (kind, count) = parse_count(entry).map_err(|e| anyhow::anyhow!(e))?;
        counts.set(kind, count);
    }
    Ok(counts)
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    script: Option<PathBuf>,
    counts: Vec<String>,
    seed: Option<u64>,
    db_command: Option<String>,
    no_script: bool,
    strict: bool,
    dry_run: bool,
    json: bool,
    progress: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let yaml = match config {
        Some(ref path) => SeedYamlConfig::load(path)
            .with_context(|| format!("Cannot load config: {}", path.display()))?,
        None => SeedYamlConfig::default(),
    };

    let counts = resolve_counts(yaml.counts()?, &counts)?;

    let script = if no_script {
        None
    } else {
        Some(
            script
                .or(yaml.script)
                .unwrap_or_else(|| PathBuf::from(seed::DEFAULT_SCRIPT)),
        )
    };

    // Generate random seed if not provided
    let seed = seed.or(yaml.seed).unwrap_or_else(rand::random);

    let options = SeedOptions {
        counts,
        output_dir: output_dir
            .or(yaml.output_dir)
            .unwrap_or_else(|| PathBuf::from(seed::DEFAULT_OUTPUT_DIR)),
        script,
        db_command: db_command
            .or(yaml.db_command)
            .unwrap_or_else(|| seed::DEFAULT_DB_COMMAND.to_string()),
        seed,
        now: None,
        dry_run,
        progress: progress && !json,
        strict,
    };

    let start = Instant::now();
    let stats = seed::run(options)?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if progress || verbose || dry_run {
        eprintln!();
        eprintln!("Generation Statistics:");
        eprintln!("  Seed: {}", stats.seed);
        eprintln!("  Total records: {}", stats.total_records);
        eprintln!("  Time: {:.3?}", elapsed);
        for kind in &stats.kinds {
            match kind.file {
                Some(ref file) => eprintln!("  {}: {} records -> {}", kind.kind, kind.records, file),
                None => eprintln!("  {}: {} records", kind.kind, kind.records),
            }
        }
        if let Some(ref script) = stats.script {
            eprintln!("  Script: {}", script);
        }
    }

    if verbose {
        eprintln!(
            "  Dangling references: {}",
            stats.dangling_references.len()
        );
        for dangling in &stats.dangling_references {
            eprintln!("    Warning: {}", dangling);
        }
    }

    if !dry_run {
        eprintln!(
            "Generated {} records (seed {}). Next: review the YAML files, then run the script{}.",
            stats.total_records,
            stats.seed,
            stats
                .script
                .as_ref()
                .map(|s| {
                    if std::path::Path::new(s).is_absolute() || s.starts_with("./") {
                        format!(" {}", s)
                    } else {
                        format!(" ./{}", s)
                    }
                })
                .unwrap_or_default()
        );
    }

    Ok(())
}
