//! JSON Schema generation for record documents and command output.
//!
//! Schemas are generated with schemars and exported via the `schema`
//! subcommand.

use schemars::{schema_for, Schema};
use std::collections::BTreeMap;

/// Returns every schema by name.
/// Uses BTreeMap for deterministic ordering (important for diffable output).
pub fn all_schemas() -> BTreeMap<&'static str, Schema> {
    let mut schemas = BTreeMap::new();

    // generate --json output
    schemas.insert("generate", schema_for!(crate::seed::SeedStats));

    // one document per record type, as written to records_<type>.yaml
    schemas.insert("categories", schema_for!(dataset_gen::Category));
    schemas.insert("users", schema_for!(dataset_gen::User));
    schemas.insert("employees", schema_for!(dataset_gen::Employee));
    schemas.insert("products", schema_for!(dataset_gen::Product));
    schemas.insert("orders", schema_for!(dataset_gen::Order));

    schemas
}

/// Generate a single schema by name.
pub fn get_schema(name: &str) -> Option<Schema> {
    all_schemas().remove(name)
}

/// List all available schema names.
pub fn schema_names() -> Vec<&'static str> {
    all_schemas().keys().copied().collect()
}
