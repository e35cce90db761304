//! Reference-integrity tests for generated databases.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use yarndb_seed::dataset_gen::{Counts, Database, Generator, RecordKind};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn generate(seed: u64, counts: &Counts) -> Database {
    Generator::with_seed_at(seed, fixed_now()).generate(counts)
}

fn ids(db: &Database, kind: RecordKind) -> HashSet<String> {
    db.get(kind)
        .map(|set| set.ids().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Position of an id within its kind (1-indexed sequence number)
fn seq(id: &str) -> usize {
    id.rsplit('_').next().unwrap().parse().unwrap()
}

#[test]
fn test_example_counts() {
    let counts = Counts::empty()
        .with(RecordKind::Categories, 3)
        .with(RecordKind::Users, 5)
        .with(RecordKind::Products, 4)
        .with(RecordKind::Orders, 2);
    let db = generate(42, &counts);

    let categories = ids(&db, RecordKind::Categories);
    assert_eq!(
        categories,
        ["categories_1", "categories_2", "categories_3"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    );
    assert_eq!(db.get(RecordKind::Users).unwrap().len(), 5);
    assert!(db.get(RecordKind::Employees).is_none());

    for (_, record) in db.get(RecordKind::Products).unwrap().iter() {
        let product = record.as_product().unwrap();
        if let Some(ref category) = product.category_id {
            assert!(categories.contains(category));
        }
    }

    let users = ids(&db, RecordKind::Users);
    let products = ids(&db, RecordKind::Products);
    let orders = db.get(RecordKind::Orders).unwrap();
    assert_eq!(orders.len(), 2);
    for (_, record) in orders.iter() {
        let order = record.as_order().unwrap();
        assert!(users.contains(order.user_id.as_ref().unwrap()));
        assert!((1..=4).contains(&order.product_ids.len()));
        let distinct: HashSet<_> = order.product_ids.iter().collect();
        assert_eq!(distinct.len(), order.product_ids.len());
        assert!(order.product_ids.iter().all(|p| products.contains(p)));
    }

    assert!(db.dangling_references().is_empty());
}

#[test]
fn test_ids_sequential_without_gaps() {
    let db = generate(1, &Counts::default());
    for set in db.sets() {
        for (i, id) in set.ids().enumerate() {
            assert_eq!(id, format!("{}_{}", set.kind(), i + 1));
        }
    }
    assert_eq!(db.total_records(), Counts::default().total());
}

#[test]
fn test_all_references_resolve() {
    for seed in [1, 2, 3, 42, 1234] {
        let db = generate(seed, &Counts::default());
        assert!(
            db.dangling_references().is_empty(),
            "seed {} produced dangling references",
            seed
        );
    }
}

#[test]
fn test_self_references_are_acyclic() {
    let counts = Counts::empty()
        .with(RecordKind::Categories, 60)
        .with(RecordKind::Employees, 60);
    let db = generate(77, &counts);

    for (id, record) in db.get(RecordKind::Categories).unwrap().iter() {
        if let Some(ref parent) = record.as_category().unwrap().parent_category {
            assert!(seq(parent) < seq(id), "{} -> {}", id, parent);
        }
    }
    for (id, record) in db.get(RecordKind::Employees).unwrap().iter() {
        if let Some(ref manager) = record.as_employee().unwrap().manager_id {
            assert!(seq(manager) < seq(id), "{} -> {}", id, manager);
        }
    }
}

#[test]
fn test_missing_dependencies_degrade_to_null() {
    let counts = Counts::empty()
        .with(RecordKind::Products, 5)
        .with(RecordKind::Orders, 5);
    let db = generate(5, &counts);

    for (_, record) in db.get(RecordKind::Products).unwrap().iter() {
        assert_eq!(record.as_product().unwrap().category_id, None);
    }
    for (_, record) in db.get(RecordKind::Orders).unwrap().iter() {
        let order = record.as_order().unwrap();
        assert_eq!(order.user_id, None);
        // products were generated, so orders still reference them
        assert!(!order.product_ids.is_empty());
    }
}

#[test]
fn test_orders_without_products() {
    let counts = Counts::empty()
        .with(RecordKind::Users, 2)
        .with(RecordKind::Orders, 3);
    let db = generate(8, &counts);
    for (_, record) in db.get(RecordKind::Orders).unwrap().iter() {
        assert!(record.as_order().unwrap().product_ids.is_empty());
    }
}

#[test]
fn test_zero_count_kind_is_present_but_empty() {
    let counts = Counts::empty()
        .with(RecordKind::Categories, 0)
        .with(RecordKind::Products, 3);
    let db = generate(9, &counts);
    assert!(db.get(RecordKind::Categories).unwrap().is_empty());
    assert_eq!(db.get(RecordKind::Products).unwrap().len(), 3);
}

#[test]
fn test_same_seed_same_reference_graph() {
    let counts = Counts::default();
    let a = generate(2024, &counts);
    let b = generate(2024, &counts);
    assert_eq!(a, b);

    // Unanchored generators still agree on shape
    let c = Generator::new(2024).generate(&counts);
    for (set_a, set_c) in a.sets().iter().zip(c.sets()) {
        assert_eq!(set_a.kind(), set_c.kind());
        assert_eq!(set_a.len(), set_c.len());
        for ((_, ra), (_, rc)) in set_a.iter().zip(set_c.iter()) {
            assert_eq!(ra.references(), rc.references());
        }
    }
}

#[test]
fn test_emails_unique_per_run() {
    let db = generate(3, &Counts::empty().with(RecordKind::Users, 300));
    let emails: HashSet<_> = db
        .get(RecordKind::Users)
        .unwrap()
        .iter()
        .map(|(_, r)| r.as_user().unwrap().email.clone())
        .collect();
    assert_eq!(emails.len(), 300);
}
