//! State of the product list view.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::Item;
use crate::ui::mvi::UiState;

use super::form::ProductForm;

/// Requested ordering of the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the order the catalog returned.
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    pub fn is_active(&self) -> bool {
        !matches!(self, SortOrder::None)
    }

    /// Textual form used by selectors: `""`, `"price-asc"` or `"price-desc"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "",
            SortOrder::PriceAscending => "price-asc",
            SortOrder::PriceDescending => "price-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort order '{0}' (expected price-asc or price-desc)")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(SortOrder::None),
            "price-asc" => Ok(SortOrder::PriceAscending),
            "price-desc" => Ok(SortOrder::PriceDescending),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Whether the create/edit form is shown, and for which item.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    /// Only the list is shown.
    #[default]
    Hidden,

    /// The form is open for a new product.
    Creating,

    /// The form is open for an existing product.
    Editing {
        /// The item as it was when editing began.
        target: Item,
    },
}

/// Everything the display surface needs to render the product list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductListState {
    /// Displayed products, already filtered and sorted.
    pub items: Vec<Item>,
    /// Exact category to keep. Empty means no filter.
    pub selected_category: String,
    pub sort_order: SortOrder,
    pub form_mode: FormMode,
    /// Working values of the create/edit form.
    pub form: ProductForm,
    /// Message of the most recent failed operation, cleared by the next success.
    pub last_error: Option<String>,
    /// Sequence number of the latest list load. Older completions are dropped.
    pub load_generation: u64,
}

impl UiState for ProductListState {}

impl ProductListState {
    pub fn form_visible(&self) -> bool {
        !matches!(self.form_mode, FormMode::Hidden)
    }

    /// The item being edited, if any.
    pub fn edit_target(&self) -> Option<&Item> {
        match &self.form_mode {
            FormMode::Editing { target } => Some(target),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.form_mode, FormMode::Editing { .. })
    }

    /// The category filter, or `None` when every category is shown.
    pub fn category_filter(&self) -> Option<&str> {
        if self.selected_category.is_empty() {
            None
        } else {
            Some(&self.selected_category)
        }
    }
}
