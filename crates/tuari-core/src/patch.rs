//! # Partial Updates
//!
//! An update touches only the fields the caller actually supplied. A plain
//! `Option<T>` can't carry that for nullable columns (is `None` "leave it"
//! or "clear it"?), so every attribute is wrapped in [`FieldUpdate`].
//!
//! ## Payload Mapping
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────────────┐
//! │ JSON payload                 │ ItemPatch field                          │
//! ├──────────────────────────────┼──────────────────────────────────────────┤
//! │ (key absent)                 │ FieldUpdate::Unchanged                   │
//! │ "quantity": 0                │ quantity = Set(0)                        │
//! │ "description": null          │ description = Set(None)   ← clears it    │
//! │ "description": "Refurbished" │ description = Set(Some("Refurbished"))   │
//! └──────────────────────────────┴──────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Field Update
// =============================================================================

/// One attribute of a partial update: either left alone or set to a value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T> {
    /// The caller didn't supply this field.
    Unchanged,
    /// The caller supplied this value, even if it is empty or zero.
    Set(T),
}

impl<T> FieldUpdate<T> {
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldUpdate::Unchanged)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }

    /// Returns the supplied value, if any.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Unchanged => None,
        }
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Unchanged
    }
}

impl<T> From<T> for FieldUpdate<T> {
    fn from(value: T) -> Self {
        FieldUpdate::Set(value)
    }
}

// A present key always means Set; absence is handled by `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(FieldUpdate::Set)
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldUpdate::Set(value) => value.serialize(serializer),
            FieldUpdate::Unchanged => serializer.serialize_none(),
        }
    }
}

// =============================================================================
// Item Patch
// =============================================================================

/// Partial update of an item.
///
/// ## Example
/// ```rust
/// use tuari_core::{FieldUpdate, ItemPatch};
///
/// let patch = ItemPatch::new().quantity(0).clear_location();
/// assert_eq!(patch.quantity, FieldUpdate::Set(0));
/// assert_eq!(patch.location, FieldUpdate::Set(None));
/// assert!(patch.name.is_unchanged());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub name: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub category: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub description: FieldUpdate<Option<String>>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub quantity: FieldUpdate<i64>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub price: FieldUpdate<f64>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub sku: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub location: FieldUpdate<Option<String>>,
}

impl ItemPatch {
    /// Creates an empty patch (every field unchanged).
    pub fn new() -> Self {
        ItemPatch::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldUpdate::Set(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = FieldUpdate::Set(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldUpdate::Set(Some(description.into()));
        self
    }

    /// Sets the description to null.
    pub fn clear_description(mut self) -> Self {
        self.description = FieldUpdate::Set(None);
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = FieldUpdate::Set(quantity);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = FieldUpdate::Set(price);
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = FieldUpdate::Set(sku.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = FieldUpdate::Set(Some(location.into()));
        self
    }

    /// Sets the location to null.
    pub fn clear_location(mut self) -> Self {
        self.location = FieldUpdate::Set(None);
        self
    }

    /// Names of the columns this patch writes, in column order.
    pub fn set_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_set() {
            fields.push("name");
        }
        if self.category.is_set() {
            fields.push("category");
        }
        if self.description.is_set() {
            fields.push("description");
        }
        if self.quantity.is_set() {
            fields.push("quantity");
        }
        if self.price.is_set() {
            fields.push("price");
        }
        if self.sku.is_set() {
            fields.push("sku");
        }
        if self.location.is_set() {
            fields.push("location");
        }
        fields
    }

    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.set_fields().is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
