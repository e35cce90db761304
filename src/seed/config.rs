//! YAML run configuration for the generate command.

use dataset_gen::{Counts, RecordKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for the per-kind record files
pub const DEFAULT_OUTPUT_DIR: &str = "yarndb_generated_data";

/// Default path of the population script
pub const DEFAULT_SCRIPT: &str = "populate_yarndb.sh";

/// Default database CLI invoked by the script
pub const DEFAULT_DB_COMMAND: &str = "yarndb";

/// Complete YAML configuration for a seed run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedYamlConfig {
    pub output_dir: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub db_command: Option<String>,
    pub seed: Option<u64>,
    /// Record type name -> count; names are checked by `counts()`
    pub counts: BTreeMap<String, usize>,
}

impl SeedYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: SeedYamlConfig = serde_yaml_ng::from_str(content)?;
        config.counts()?;
        Ok(config)
    }

    /// Configured counts, or `None` when the file lists none
    pub fn counts(&self) -> anyhow::Result<Option<Counts>> {
        if self.counts.is_empty() {
            return Ok(None);
        }
        let counts = self
            .counts
            .iter()
            .map(|(name, count)| {
                name.parse::<RecordKind>()
                    .map(|kind| (kind, *count))
                    .map_err(|e| anyhow::anyhow!(e))
            })
            .collect::<anyhow::Result<Counts>>()?;
        Ok(Some(counts))
    }
}

/// Render a commented default configuration
pub fn default_config_yaml() -> String {
    let mut yaml = String::new();
    yaml.push_str("# yarndb-seed run configuration\n");
    yaml.push_str("# Every key is optional; command-line flags take precedence.\n\n");
    yaml.push_str("# Directory for records_<type>.yaml files\n");
    yaml.push_str(&format!("output_dir: {}\n\n", DEFAULT_OUTPUT_DIR));
    yaml.push_str("# Population script path\n");
    yaml.push_str(&format!("script: {}\n\n", DEFAULT_SCRIPT));
    yaml.push_str("# Database CLI the script invokes\n");
    yaml.push_str(&format!("db_command: {}\n\n", DEFAULT_DB_COMMAND));
    yaml.push_str("# Fixed seed for reproducible output (random when omitted)\n");
    yaml.push_str("# seed: 42\n\n");
    yaml.push_str("# Records per type; omitted types are not generated\n");
    yaml.push_str("counts:\n");
    for (kind, count) in Counts::default().iter() {
        yaml.push_str(&format!("  {}: {}\n", kind, count));
    }
    yaml
}
