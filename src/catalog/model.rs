use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValidationError;

/// A single product record as exchanged with the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by the remote catalog. Absent for items not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Item {
    /// Checks the invariant every submitted item must hold.
    ///
    /// All text fields must be non-empty and the price must be a finite,
    /// non-negative number. Whitespace counts as content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let text_fields = [
            (ItemField::Title, &self.title),
            (ItemField::Description, &self.description),
            (ItemField::Category, &self.category),
            (ItemField::Image, &self.image),
        ];
        for (field, value) in text_fields {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        if !self.price.is_finite() {
            return Err(ValidationError::InvalidPrice(self.price.to_string()));
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice(self.price));
        }

        Ok(())
    }

    /// Returns a copy of this item carrying the given id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Editable fields of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl ItemField {
    pub const ALL: [ItemField; 5] = [
        ItemField::Title,
        ItemField::Price,
        ItemField::Description,
        ItemField::Category,
        ItemField::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Title => "title",
            ItemField::Price => "price",
            ItemField::Description => "description",
            ItemField::Category => "category",
            ItemField::Image => "image",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
