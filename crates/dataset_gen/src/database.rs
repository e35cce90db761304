//! In-memory database of generated records.

use crate::kind::RecordKind;
use crate::record::Record;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Requested record count per kind.
///
/// Kinds without an entry are not generated at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counts(BTreeMap<RecordKind, usize>);

impl Counts {
    /// No kinds configured
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, kind: RecordKind, count: usize) {
        self.0.insert(kind, count);
    }

    pub fn with(mut self, kind: RecordKind, count: usize) -> Self {
        self.set(kind, count);
        self
    }

    pub fn get(&self, kind: RecordKind) -> Option<usize> {
        self.0.get(&kind).copied()
    }

    /// Total records requested across all kinds
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Entries in dependency order
    pub fn iter(&self) -> impl Iterator<Item = (RecordKind, usize)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for Counts {
    fn default() -> Self {
        Self::empty()
            .with(RecordKind::Categories, 10)
            .with(RecordKind::Users, 100)
            .with(RecordKind::Employees, 30)
            .with(RecordKind::Products, 50)
            .with(RecordKind::Orders, 200)
    }
}

impl FromIterator<(RecordKind, usize)> for Counts {
    fn from_iter<I: IntoIterator<Item = (RecordKind, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a `kind=count` pair such as `users=50`
pub fn parse_count(s: &str) -> Result<(RecordKind, usize), String> {
    let (kind, count) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid count '{}'. Expected KIND=N, e.g. users=50", s))?;
    let kind: RecordKind = kind.parse()?;
    let count: usize = count
        .trim()
        .parse()
        .map_err(|_| format!("Invalid count for {}: '{}'", kind, count.trim()))?;
    Ok((kind, count))
}

/// Records of one kind, in ascending sequence order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    kind: RecordKind,
    records: Vec<(String, Record)>,
}

impl RecordSet {
    pub fn new(kind: RecordKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    pub fn with_capacity(kind: RecordKind, capacity: usize) -> Self {
        Self {
            kind,
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn push(&mut self, id: String, record: Record) {
        self.records.push((id, record));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(id, r)| (id.as_str(), r))
    }

}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (id, record) in &self.records {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

/// A reference whose target does not exist (or does not precede it)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub record_id: String,
    pub field: &'static str,
    pub target_id: String,
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} -> {} (missing)",
            self.record_id, self.field, self.target_id
        )
    }
}

/// Generated record sets, kept in dependency order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Database {
    sets: Vec<RecordSet>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record set, replacing any existing set of the same kind
    pub fn insert(&mut self, set: RecordSet) {
        match self.sets.binary_search_by_key(&set.kind, |s| s.kind) {
            Ok(pos) => self.sets[pos] = set,
            Err(pos) => self.sets.insert(pos, set),
        }
    }

    pub fn get(&self, kind: RecordKind) -> Option<&RecordSet> {
        self.sets.iter().find(|s| s.kind == kind)
    }

    /// Record sets in dependency order
    pub fn sets(&self) -> &[RecordSet] {
        &self.sets
    }

    pub fn total_records(&self) -> usize {
        self.sets.iter().map(RecordSet::len).sum()
    }

    /// Every reference that names an absent record.
    ///
    /// Self references must also name a record generated earlier in the
    /// same set.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let positions: HashMap<RecordKind, HashMap<&str, usize>> = self
            .sets
            .iter()
            .map(|set| (set.kind, set.ids().enumerate().map(|(i, id)| (id, i)).collect()))
            .collect();

        let mut dangling = Vec::new();
        for set in &self.sets {
            for (pos, (id, record)) in set.iter().enumerate() {
                for reference in record.references() {
                    let target_pos = positions
                        .get(&reference.target)
                        .and_then(|ids| ids.get(reference.id));
                    let valid = match target_pos {
                        Some(&target) if reference.target == set.kind => target < pos,
                        Some(_) => true,
                        None => false,
                    };
                    if !valid {
                        dangling.push(DanglingReference {
                            record_id: id.to_string(),
                            field: reference.field,
                            target_id: reference.id.to_string(),
                        });
                    }
                }
            }
        }
        dangling
    }
}
