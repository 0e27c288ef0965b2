//! Resource aggregate root, its supplier value object, and mutation types.

use super::ResourceId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Supplier details attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Supplier name.
    pub name: String,
    /// Contact channel (phone number or similar free text).
    pub contact: String,
    /// Contact email, when known.
    pub email: Option<String>,
}

/// Validated field bundle for creating a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    /// Resource name.
    pub name: String,
    /// Free-text category, e.g. "Material" or "Labour".
    pub kind: String,
    /// Available quantity.
    pub quantity: f64,
    /// Supplier details, when supplied.
    pub supplier: Option<Supplier>,
    /// Unit cost, when known.
    pub cost_per_unit: Option<f64>,
}

/// Partial-field replacement set for updating a resource.
///
/// Fields left as `None` keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceChanges {
    /// Replacement name, when supplied.
    pub name: Option<String>,
    /// Replacement category, when supplied.
    pub kind: Option<String>,
    /// Replacement quantity, when supplied.
    pub quantity: Option<f64>,
    /// Replacement supplier details, when supplied.
    pub supplier: Option<Supplier>,
    /// Replacement unit cost, when supplied.
    pub cost_per_unit: Option<f64>,
}

/// Resource aggregate root.
///
/// Resources hold no back-references; the tasks consuming a resource are
/// found by querying the task store for the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    id: ResourceId,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    quantity: f64,
    supplier: Option<Supplier>,
    cost_per_unit: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Resource {
    /// Creates a new resource from validated fields.
    #[must_use]
    pub fn new(fields: NewResource, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ResourceId::new(),
            name: fields.name,
            kind: fields.kind,
            quantity: fields.quantity,
            supplier: fields.supplier,
            cost_per_unit: fields.cost_per_unit,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the resource identifier.
    #[must_use]
    pub const fn id(&self) -> ResourceId {
        self.id
    }

    /// Returns the resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-text category.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the available quantity.
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the supplier details, when supplied.
    #[must_use]
    pub const fn supplier(&self) -> Option<&Supplier> {
        self.supplier.as_ref()
    }

    /// Returns the unit cost, when known.
    #[must_use]
    pub const fn cost_per_unit(&self) -> Option<f64> {
        self.cost_per_unit
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the supplied fields and refreshes the update timestamp.
    pub fn apply(&mut self, changes: ResourceChanges, clock: &impl Clock) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(kind) = changes.kind {
            self.kind = kind;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(supplier) = changes.supplier {
            self.supplier = Some(supplier);
        }
        if let Some(cost_per_unit) = changes.cost_per_unit {
            self.cost_per_unit = Some(cost_per_unit);
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
