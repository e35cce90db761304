//! Population script emission.
//!
//! The script replays a generated database into the YarnDB CLI:
//! `init`, one `index` per indexed field, one `set` per record in
//! dependency order, then `save`. It is written, never executed.

use dataset_gen::Database;
use std::fs;
use std::path::Path;

/// Fields the script creates secondary indexes on
pub const INDEX_FIELDS: [&str; 4] = ["department", "category_id", "status", "user_id"];

/// Escape text for a bash ANSI-C quoted string (`$'...'`)
pub fn escape_ansi_c(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Quote a command word for bash, leaving plain paths untouched
pub fn shell_word(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./+:=@%,".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// Builder for the population script
#[derive(Debug, Clone)]
pub struct CommandScript {
    db_command: String,
}

impl CommandScript {
    pub fn new(db_command: impl Into<String>) -> Self {
        Self {
            db_command: db_command.into(),
        }
    }

    /// Render the full script text
    pub fn render(&self, database: &Database) -> anyhow::Result<String> {
        let db = shell_word(&self.db_command);
        let mut lines: Vec<String> = vec![
            "#!/bin/bash".to_string(),
            "# YarnDB database population script".to_string(),
            "# Generated by yarndb-seed".to_string(),
            "set -e # Exit immediately if a command exits with a non-zero status.".to_string(),
            String::new(),
            "echo 'Initializing YarnDB...'".to_string(),
            format!("{} init", db),
            String::new(),
            "echo 'Creating indexes...'".to_string(),
        ];
        lines.extend(INDEX_FIELDS.iter().map(|field| format!("{} index {}", db, field)));
        lines.push(String::new());
        lines.push("echo 'Inserting records...'".to_string());

        for set in database.sets() {
            lines.push(String::new());
            lines.push(format!("# Inserting {} records...", set.kind()));
            for (id, record) in set.iter() {
                let document = serde_yaml_ng::to_string(record)?;
                lines.push(format!("{} set {} $'{}'", db, id, escape_ansi_c(&document)));
            }
        }

        lines.push(String::new());
        lines.push("echo 'Saving database to disk...'".to_string());
        lines.push(format!("{} save", db));
        lines.push(String::new());
        lines.push(format!(
            "echo 'Successfully populated YarnDB with {} records.'",
            database.total_records()
        ));

        let mut script = lines.join("\n");
        script.push('\n');
        Ok(script)
    }

    /// Render the script to `path` and mark it executable
    pub fn write(&self, database: &Database, path: &Path) -> anyhow::Result<()> {
        let script = self.render(database)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, script)?;
        make_executable(path)?;
        Ok(())
    }
}

impl Default for CommandScript {
    fn default() -> Self {
        Self::new(crate::seed::DEFAULT_DB_COMMAND)
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ansi_c() {
        assert_eq!(escape_ansi_c("it's"), "it\\'s");
        assert_eq!(escape_ansi_c("a\\b"), "a\\\\b");
        assert_eq!(escape_ansi_c("plain\ntext"), "plain\ntext");
    }

    #[test]
    fn test_shell_word() {
        assert_eq!(shell_word("yarndb"), "yarndb");
        assert_eq!(shell_word("./bin/yarndb"), "./bin/yarndb");
        assert_eq!(shell_word("/opt/my tools/yarndb"), "'/opt/my tools/yarndb'");
        assert_eq!(shell_word("it's"), "'it'\\''s'");
        assert_eq!(shell_word(""), "''");
    }

    #[test]
    fn test_db_command_with_space_is_quoted() {
        let script = CommandScript::new("/opt/my tools/yarndb")
            .render(&Database::new())
            .unwrap();
        assert!(script.contains("\n'/opt/my tools/yarndb' init\n"));
        assert!(script.contains("\n'/opt/my tools/yarndb' index department\n"));
        assert!(script.contains("\n'/opt/my tools/yarndb' save\n"));
        assert!(!script.contains("\n/opt/my tools/yarndb "));
    }

    #[test]
    fn test_empty_database_script() {
        let script = CommandScript::new("ydb").render(&Database::new()).unwrap();
        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains("\nydb init\n"));
        assert!(script.contains("\nydb index user_id\n"));
        assert!(script.contains("\nydb save\n"));
        assert!(script.contains("with 0 records."));
        assert!(!script.contains(" set "));
    }
}
