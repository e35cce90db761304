//! Record kinds and the dependency order they are generated in.

use serde::{Deserialize, Serialize};

/// The five record types a dataset is made of.
///
/// Variant order is the generation order: every kind only references kinds
/// declared before it (or itself).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Categories,
    Users,
    Employees,
    Products,
    Orders,
}

impl RecordKind {
    /// All kinds in dependency order.
    pub const GENERATION_ORDER: [RecordKind; 5] = [
        RecordKind::Categories,
        RecordKind::Users,
        RecordKind::Employees,
        RecordKind::Products,
        RecordKind::Orders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Categories => "categories",
            RecordKind::Users => "users",
            RecordKind::Employees => "employees",
            RecordKind::Products => "products",
            RecordKind::Orders => "orders",
        }
    }

    /// Build the identifier of the `seq`-th record (1-indexed).
    pub fn record_id(&self, seq: usize) -> String {
        format!("{}_{}", self.as_str(), seq)
    }

    /// Kinds whose records may reference earlier records of the same kind.
    pub fn is_self_referencing(&self) -> bool {
        matches!(self, RecordKind::Categories | RecordKind::Employees)
    }

    fn valid_names() -> String {
        Self::GENERATION_ORDER
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "categories" => Ok(RecordKind::Categories),
            "users" => Ok(RecordKind::Users),
            "employees" => Ok(RecordKind::Employees),
            "products" => Ok(RecordKind::Products),
            "orders" => Ok(RecordKind::Orders),
            _ => Err(format!(
                "Unknown record type: {}. Valid types: {}",
                s,
                Self::valid_names()
            )),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
