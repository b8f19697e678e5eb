use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dietary flags attached to a menu item, used by the UI for filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
}

/// A catalog entry. Immutable once fetched; the cart stores a snapshot of it
/// inside each line item so pricing stays stable during checkout.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) (see
/// [`crate::menu_actor`]), allowing the catalog to be managed by a
/// [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Unit price. Decimal, never floating point: monetary totals are
    /// computed from this value.
    pub price: Decimal,
    pub category_id: String,
    pub available: bool,
    pub dietary: DietaryFlags,
    /// Preparation time in minutes.
    pub prep_minutes: u32,
}

impl MenuItem {
    /// Creates a new available MenuItem with default dietary flags.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category_id: category_id.into(),
            available: true,
            dietary: DietaryFlags::default(),
            prep_minutes: 0,
        }
    }
}

/// Payload for adding a menu item to the catalog.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: Decimal,
    pub category_id: String,
    pub available: bool,
    pub dietary: DietaryFlags,
    pub prep_minutes: u32,
}

/// Payload for updating an existing menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub price: Option<Decimal>,
    pub available: Option<bool>,
    pub prep_minutes: Option<u32>,
}

/// A menu category as shown to the guest (e.g. "Mains", "Desserts").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub id: String,
    pub name: String,
}

impl FoodCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
