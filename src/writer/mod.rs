use dataset_gen::{Database, RecordKind, RecordSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// File name for the records of `kind`
pub fn records_file_name(kind: RecordKind) -> String {
    format!("records_{}.yaml", kind)
}

/// A record file that was written
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFile {
    pub kind: RecordKind,
    pub path: PathBuf,
    pub records: usize,
}

/// Writes one YAML document per record kind into an output directory
pub struct RecordWriter {
    output_dir: PathBuf,
}

impl RecordWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn ensure_output_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.output_dir)
    }

    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.output_dir.join(records_file_name(kind))
    }

    /// Write one record set as a mapping of id -> record
    pub fn write_set(&self, set: &RecordSet) -> anyhow::Result<WrittenFile> {
        let path = self.path_for(set.kind());
        let file = File::create(&path)?;
        let mut writer = BufWriter::with_capacity(WRITER_BUFFER_SIZE, file);
        serde_yaml_ng::to_writer(&mut writer, set)?;
        writer.flush()?;

        Ok(WrittenFile {
            kind: set.kind(),
            path,
            records: set.len(),
        })
    }

    /// Write every record set, creating the output directory first
    pub fn write_all(&self, database: &Database) -> anyhow::Result<Vec<WrittenFile>> {
        self.ensure_output_dir()?;
        database
            .sets()
            .iter()
            .map(|set| self.write_set(set))
            .collect()
    }
}
