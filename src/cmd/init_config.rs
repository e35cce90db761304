//! Init-config command CLI handler.

use crate::seed::default_config_yaml;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

pub fn run(output: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let yaml = default_config_yaml();

    match output {
        Some(path) => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            fs::write(&path, yaml)
                .with_context(|| format!("Cannot write config: {}", path.display()))?;
            eprintln!("Wrote default configuration to {}", path.display());
        }
        None => print!("{}", yaml),
    }

    Ok(())
}
