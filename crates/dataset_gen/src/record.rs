//! Record documents for each kind.
//!
//! Field declaration order is the serialized field order, so the YAML
//! written for a record lists its fields exactly as declared here.

use crate::kind::RecordKind;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub department: String,
    pub age: u8,
    pub skills: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ProductAttributes {
    pub weight: String,
    pub color: String,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub category_id: Option<String>,
    pub description: String,
    pub in_stock: bool,
    pub attributes: ProductAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Order {
    pub user_id: Option<String>,
    pub product_ids: Vec<String>,
    pub total_amount: f64,
    pub status: String,
    pub order_date: String,
    pub shipping_address: ShippingAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub parent_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Employee {
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub salary: u32,
    pub hire_date: String,
    pub manager_id: Option<String>,
}

/// A generated record of any kind. Serializes as the bare document.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Record {
    Category(Category),
    User(User),
    Employee(Employee),
    Product(Product),
    Order(Order),
}

/// One reference field value pointing at another record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    pub field: &'static str,
    pub target: RecordKind,
    pub id: &'a str,
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Category(_) => RecordKind::Categories,
            Record::User(_) => RecordKind::Users,
            Record::Employee(_) => RecordKind::Employees,
            Record::Product(_) => RecordKind::Products,
            Record::Order(_) => RecordKind::Orders,
        }
    }

    /// All non-null references held by this record.
    pub fn references(&self) -> Vec<Reference<'_>> {
        match self {
            Record::Category(c) => c
                .parent_category
                .as_deref()
                .map(|id| Reference {
                    field: "parent_category",
                    target: RecordKind::Categories,
                    id,
                })
                .into_iter()
                .collect(),
            Record::Employee(e) => e
                .manager_id
                .as_deref()
                .map(|id| Reference {
                    field: "manager_id",
                    target: RecordKind::Employees,
                    id,
                })
                .into_iter()
                .collect(),
            Record::Product(p) => p
                .category_id
                .as_deref()
                .map(|id| Reference {
                    field: "category_id",
                    target: RecordKind::Categories,
                    id,
                })
                .into_iter()
                .collect(),
            Record::Order(o) => {
                let mut refs: Vec<Reference<'_>> = o
                    .user_id
                    .as_deref()
                    .map(|id| Reference {
                        field: "user_id",
                        target: RecordKind::Users,
                        id,
                    })
                    .into_iter()
                    .collect();
                refs.extend(o.product_ids.iter().map(|id| Reference {
                    field: "product_ids",
                    target: RecordKind::Products,
                    id,
                }));
                refs
            }
            Record::User(_) => Vec::new(),
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Record::Category(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Record::User(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_employee(&self) -> Option<&Employee> {
        match self {
            Record::Employee(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Record::Product(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_order(&self) -> Option<&Order> {
        match self {
            Record::Order(o) => Some(o),
            _ => None,
        }
    }
}
