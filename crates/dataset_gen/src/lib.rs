//! Fixture generator for YarnDB seed data.
//!
//! Generates relationally-consistent users, products, orders, categories
//! and employees. Kinds are generated in dependency order and every
//! reference points at a record that already exists.
//!
//! # Example
//!
//! ```rust
//! use dataset_gen::{Counts, Generator, RecordKind};
//!
//! let counts = Counts::empty()
//!     .with(RecordKind::Categories, 3)
//!     .with(RecordKind::Products, 4);
//!
//! let mut generator = Generator::new(42);
//! let db = generator.generate(&counts);
//!
//! assert_eq!(db.total_records(), 7);
//! assert!(db.dangling_references().is_empty());
//! ```

pub mod database;
pub mod fake;
pub mod generator;
pub mod kind;
pub mod record;

pub use database::{parse_count, Counts, Database, DanglingReference, RecordSet};
pub use fake::FakeData;
pub use generator::{Generator, IdTracker};
pub use kind::RecordKind;
pub use record::{
    Category, Employee, Order, Product, ProductAttributes, Record, Reference, ShippingAddress,
    User,
};
