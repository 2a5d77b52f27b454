//! Working values of the create/edit form.

use crate::catalog::{Item, ItemField, ValidationError};

/// The form fields as the user types them.
///
/// Everything is text, including the price, which is parsed on validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductForm {
    /// Pre-populate the form with an existing item's values.
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            price: item.price.to_string(),
            description: item.description.clone(),
            category: item.category.clone(),
            image: item.image.clone(),
        }
    }

    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Title => &self.title,
            ItemField::Price => &self.price,
            ItemField::Description => &self.description,
            ItemField::Category => &self.category,
            ItemField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: ItemField, value: impl Into<String>) {
        let slot = match field {
            ItemField::Title => &mut self.title,
            ItemField::Price => &mut self.price,
            ItemField::Description => &mut self.description,
            ItemField::Category => &mut self.category,
            ItemField::Image => &mut self.image,
        };
        *slot = value.into();
    }

    /// Validate the fields and build an item without id.
    pub fn validate(&self) -> Result<Item, ValidationError> {
        // Report fields in form order. Only the price is trimmed, since it
        // must parse as a number.
        for field in ItemField::ALL {
            let value = self.get(field);
            let empty = match field {
                ItemField::Price => value.trim().is_empty(),
                _ => value.is_empty(),
            };
            if empty {
                return Err(ValidationError::MissingField(field));
            }
        }

        let price_text = self.price.trim();
        let price: f64 = price_text
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(price_text.to_string()))?;

        let item = Item {
            id: None,
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Validate the fields and lay them over `target`, keeping its id.
    pub fn merge_over(&self, target: &Item) -> Result<Item, ValidationError> {
        let mut merged = self.validate()?;
        merged.id = target.id;
        Ok(merged)
    }
}
