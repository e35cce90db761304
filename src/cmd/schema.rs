//! Schema command CLI handler.

use crate::json_schema;
use std::collections::BTreeMap;

pub fn run(name: Option<String>, list: bool) -> anyhow::Result<()> {
    if list {
        for name in json_schema::schema_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    match name {
        Some(name) => {
            let schema = json_schema::get_schema(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown schema: {}. Available: {}",
                    name,
                    json_schema::schema_names().join(", ")
                )
            })?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        None => {
            let all: BTreeMap<_, _> = json_schema::all_schemas();
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
    }

    Ok(())
}
