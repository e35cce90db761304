//! Record generators and the dataset generator that wires them together.
//!
//! Every reference a generator writes is drawn from ids that already exist,
//! so the resulting reference graph never points forward.

use crate::database::{Counts, Database, RecordSet};
use crate::fake::FakeData;
use crate::kind::RecordKind;
use crate::record::{
    Category, Employee, Order, Product, ProductAttributes, Record, ShippingAddress, User,
};
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

const USER_DEPARTMENTS: &[&str] = &["engineering", "marketing", "sales", "hr"];

const EMPLOYEE_DEPARTMENTS: &[&str] = &[
    "engineering",
    "marketing",
    "sales",
    "hr",
    "finance",
    "operations",
];

const SKILLS: &[&str] = &[
    "Python",
    "Go",
    "Docker",
    "Kubernetes",
    "React",
    "SQL",
    "Terraform",
];

const MATERIALS: &[&str] = &["plastic", "metal", "wood", "fabric", "ceramic"];

const ORDER_STATUSES: &[&str] = &["pending", "processing", "shipped", "delivered", "cancelled"];

/// Most products a single order can reference
pub const MAX_PRODUCTS_PER_ORDER: usize = 5;

/// Generate a single user.
pub fn user<R: Rng>(fake: &mut FakeData<R>, _id: &str) -> User {
    let name = fake.full_name();
    let email = fake.unique_email();
    let department = fake.pick(USER_DEPARTMENTS).to_string();
    let age = fake.int_range(22, 65) as u8;
    let skill_count = fake.int_range(2, 4) as usize;
    let skills = fake
        .pick_distinct(SKILLS, skill_count)
        .into_iter()
        .map(str::to_string)
        .collect();
    let created_at = fake.datetime_within_years(2);

    User {
        name,
        email,
        department,
        age,
        skills,
        created_at,
    }
}

/// Generate a single product linked to one of `category_ids`.
pub fn product<R: Rng>(fake: &mut FakeData<R>, _id: &str, category_ids: &[String]) -> Product {
    let name = fake.catch_phrase();
    let price = fake.price(10.0, 999.99);
    let category_id = fake.pick_opt(category_ids).cloned();
    let description = fake.text(200);
    let in_stock = fake.coin_flip();
    let attributes = ProductAttributes {
        weight: format!("{:.1}kg", fake.float_range(0.1, 10.0)),
        color: fake.color_name().to_string(),
        material: fake.pick(MATERIALS).to_string(),
    };

    Product {
        name,
        price,
        category_id,
        description,
        in_stock,
        attributes,
    }
}

/// Generate a single order placed by one of `user_ids` for some of `product_ids`.
pub fn order<R: Rng>(
    fake: &mut FakeData<R>,
    _id: &str,
    user_ids: &[String],
    product_ids: &[String],
) -> Order {
    let user_id = fake.pick_opt(user_ids).cloned();
    let product_ids = if product_ids.is_empty() {
        Vec::new()
    } else {
        let max = MAX_PRODUCTS_PER_ORDER.min(product_ids.len()) as i64;
        let count = fake.int_range(1, max) as usize;
        fake.pick_distinct(product_ids, count)
    };
    let total_amount = fake.price(25.0, 500.0);
    let status = fake.pick(ORDER_STATUSES).to_string();
    let order_date = fake.datetime_within_years(1);
    let shipping_address = ShippingAddress {
        street: fake.street_address(),
        city: fake.city(),
        state: fake.state_abbr(),
        zip_code: fake.zip_code(),
    };

    Order {
        user_id,
        product_ids,
        total_amount,
        status,
        order_date,
        shipping_address,
    }
}

/// Generate a single category, possibly nested under one of `existing_ids`.
pub fn category<R: Rng>(fake: &mut FakeData<R>, _id: &str, existing_ids: &[String]) -> Category {
    let name = fake.category_name();

    // The coin is always flipped, even when there is nothing to pick from.
    let has_parent = fake.coin_flip() && !existing_ids.is_empty();
    let parent_category = if has_parent {
        fake.pick_opt(existing_ids).cloned()
    } else {
        None
    };

    Category {
        name,
        description: fake.text(150),
        parent_category,
    }
}

/// Generate a single employee, possibly reporting to one of `existing_ids`.
pub fn employee<R: Rng>(fake: &mut FakeData<R>, id: &str, existing_ids: &[String]) -> Employee {
    let managers: Vec<&String> = existing_ids.iter().filter(|eid| *eid != id).collect();
    let has_manager = fake.coin_flip() && !managers.is_empty();
    let manager_id = if has_manager {
        fake.pick_opt(&managers).map(|m| m.to_string())
    } else {
        None
    };

    Employee {
        name: fake.full_name(),
        employee_id: fake.uuid4(),
        department: fake.pick(EMPLOYEE_DEPARTMENTS).to_string(),
        position: fake.job_title().to_string(),
        salary: fake.int_range(40_000, 150_000) as u32,
        hire_date: fake.date_within_years(5),
        manager_id,
    }
}

/// Ids generated so far, per kind
#[derive(Debug, Default)]
pub struct IdTracker {
    ids: HashMap<RecordKind, Vec<String>>,
}

impl IdTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: RecordKind, ids: Vec<String>) {
        self.ids.insert(kind, ids);
    }

    /// Ids of `kind`, empty if the kind was never generated
    pub fn get_ids(&self, kind: RecordKind) -> &[String] {
        self.ids.get(&kind).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

type ProgressFn = Box<dyn FnMut(RecordKind, usize, usize)>;

/// Dataset generator
pub struct Generator<R: Rng = StdRng> {
    fake: FakeData<R>,
    progress: Option<ProgressFn>,
}

impl Generator<StdRng> {
    /// Seeded generator anchored at the current time
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded generator whose date windows end at `now`.
    ///
    /// With the same seed and `now` the generated database is identical.
    pub fn with_seed_at(seed: u64, now: NaiveDateTime) -> Self {
        Self::from_fake(FakeData::with_now(StdRng::seed_from_u64(seed), now))
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::from_fake(FakeData::new(rng))
    }

    pub fn from_fake(fake: FakeData<R>) -> Self {
        Self {
            fake,
            progress: None,
        }
    }

    /// Report `(kind, generated, total)` after every record.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(RecordKind, usize, usize) + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Generate one record of `kind`.
    ///
    /// `candidates` holds the ids the record may reference: earlier ids of
    /// the same kind for self-referencing kinds, otherwise the ids looked up
    /// in `deps`.
    fn generate_record(
        &mut self,
        kind: RecordKind,
        id: &str,
        candidates: &[String],
        deps: &IdTracker,
    ) -> Record {
        let fake = &mut self.fake;
        match kind {
            RecordKind::Categories => Record::Category(category(fake, id, candidates)),
            RecordKind::Employees => Record::Employee(employee(fake, id, candidates)),
            RecordKind::Users => Record::User(user(fake, id)),
            RecordKind::Products => Record::Product(product(
                fake,
                id,
                deps.get_ids(RecordKind::Categories),
            )),
            RecordKind::Orders => Record::Order(order(
                fake,
                id,
                deps.get_ids(RecordKind::Users),
                deps.get_ids(RecordKind::Products),
            )),
        }
    }

    /// Generate `count` records of `kind` with ids `kind_1..kind_count`.
    ///
    /// Self-referencing kinds see the ids generated earlier in this batch;
    /// every other kind sees the full dependency lists in `deps`.
    pub fn generate_records(
        &mut self,
        kind: RecordKind,
        count: usize,
        deps: &IdTracker,
    ) -> RecordSet {
        let mut set = RecordSet::with_capacity(kind, count);
        let mut earlier: Vec<String> = Vec::with_capacity(count);

        for seq in 1..=count {
            let id = kind.record_id(seq);
            let record = if kind.is_self_referencing() {
                self.generate_record(kind, &id, &earlier, deps)
            } else {
                self.generate_record(kind, &id, &[], deps)
            };
            earlier.push(id.clone());
            set.push(id, record);

            if let Some(progress) = self.progress.as_mut() {
                progress(kind, seq, count);
            }
        }

        set
    }

    /// Generate every configured kind in dependency order.
    ///
    /// Kinds missing from `counts` are skipped; their dependents see an
    /// empty id list.
    pub fn generate(&mut self, counts: &Counts) -> Database {
        let mut database = Database::new();
        let mut ids = IdTracker::new();

        for kind in RecordKind::GENERATION_ORDER {
            let Some(count) = counts.get(kind) else {
                continue;
            };
            let set = self.generate_records(kind, count, &ids);
            ids.record(kind, set.ids().map(str::to_string).collect());
            database.insert(set);
        }

        database
    }
}
