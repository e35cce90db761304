//! Fixture data and population scripts for YarnDB.
//!
//! The record generator lives in the `dataset_gen` crate; this crate writes
//! its output as per-type YAML files and a `yarndb` CLI script.

pub mod json_schema;
pub mod script;
pub mod seed;
pub mod writer;

pub use dataset_gen;
